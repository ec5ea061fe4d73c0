//! Gem records and input normalization
//!
//! A `Gem` is one bookmarked link with display metadata. Untrusted input
//! (form fields, stored JSON) arrives as a [`RawGem`] and must pass through
//! [`RawGem::normalize`] before it can enter a collection.

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

/// Fallback gem color, applied when input is missing or malformed
pub const DEFAULT_COLOR: &str = "#7b6cff";

/// Gem footprint in the shelf grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GemSize {
    #[default]
    Medium,
    Large,
}

impl GemSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            GemSize::Medium => "medium",
            GemSize::Large => "large",
        }
    }

    /// Exactly the literal `"large"` selects [`GemSize::Large`]; every other
    /// value (including case variants) reads as [`GemSize::Medium`].
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "large" => GemSize::Large,
            _ => GemSize::Medium,
        }
    }
}

/// A validated bookmark entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: String,
    pub size: GemSize,
}

/// Untrusted gem fields, before normalization
///
/// Every field is optional and scalars of any JSON type decode as text, so
/// arbitrary stored records never fail to decode; all validation happens in
/// [`RawGem::normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGem {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub size: Option<String>,
}

impl RawGem {
    /// Coerce into a valid [`Gem`].
    ///
    /// Returns `None` when `title` or `url` is empty after trimming; that is
    /// the only rejection. A malformed `color` or `size` falls back to its
    /// default instead of rejecting the record.
    pub fn normalize(self) -> Option<Gem> {
        let title = trimmed(self.title);
        let url = trimmed(self.url);
        if title.is_empty() || url.is_empty() {
            return None;
        }

        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate_id(),
        };
        let color = self.color.unwrap_or_default();

        Some(Gem {
            id,
            title,
            description: trimmed(self.description),
            url,
            color: if is_hex_color(&color) {
                color
            } else {
                DEFAULT_COLOR.to_string()
            },
            size: GemSize::from_raw(self.size.as_deref().unwrap_or("")),
        })
    }
}

/// Fresh opaque gem id: `gem-` plus 8 random alphanumerics.
///
/// Uniqueness is best-effort; ids are randomized, not checked against the
/// collection.
pub fn generate_id() -> String {
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), 8);
    format!("gem-{}", suffix.to_lowercase())
}

/// `#` followed by exactly 3 or 6 hex digits, case-insensitive
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Accept any JSON scalar as text; arrays and objects read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
