//! Collection-level normalization and the built-in starter set

use serde_json::Value;

use crate::gem::{Gem, GemSize, RawGem};

/// Run every record of an untrusted sequence through gem normalization.
///
/// Records that fail to decode or fail validation are dropped, never
/// errored on. Survivors keep their relative order. No deduplication by id
/// or url.
pub fn normalize_collection(raw: Vec<Value>) -> Vec<Gem> {
    raw.into_iter()
        .filter_map(|record| serde_json::from_value::<RawGem>(record).ok())
        .filter_map(RawGem::normalize)
        .collect()
}

/// The starter collection shown before the user saves anything, 4 entries.
///
/// Builds a fresh vector on every call so each caller owns an independent
/// copy; mutating a working collection can never reach the seed used by a
/// later reset.
pub fn default_collection() -> Vec<Gem> {
    vec![
        Gem {
            id: "gem-blog".to_string(),
            title: "魔法工房ブログ".to_string(),
            description: "制作記録や学びの呟き".to_string(),
            url: "https://example.com/blog".to_string(),
            color: "#7b6cff".to_string(),
            size: GemSize::Medium,
        },
        Gem {
            id: "gem-music".to_string(),
            title: "星霜のシンセ".to_string(),
            description: "幻想的なシンセポップ楽曲".to_string(),
            url: "https://example.com/music".to_string(),
            color: "#ff8adc".to_string(),
            size: GemSize::Large,
        },
        Gem {
            id: "gem-portfolio".to_string(),
            title: "ポートフォリオ".to_string(),
            description: "これまでの作品ギャラリー".to_string(),
            url: "https://example.com/portfolio".to_string(),
            color: "#00d1ff".to_string(),
            size: GemSize::Medium,
        },
        Gem {
            id: "gem-game".to_string(),
            title: "インディーゲーム".to_string(),
            description: "ドット絵の魔法冒険譚".to_string(),
            url: "https://example.com/game".to_string(),
            color: "#ffe066".to_string(),
            size: GemSize::Medium,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_shape() {
        let seed = default_collection();
        assert_eq!(seed.len(), 4);
        assert!(seed.iter().all(|gem| !gem.title.is_empty() && !gem.url.is_empty()));
        assert_eq!(seed[1].size, GemSize::Large);
    }

    #[test]
    fn test_seed_copies_are_independent() {
        let mut working = default_collection();
        working[0].title = "edited".to_string();
        working.remove(3);

        let fresh = default_collection();
        assert_eq!(fresh.len(), 4);
        assert_eq!(fresh[0].title, "魔法工房ブログ");
        assert_eq!(fresh, default_collection());
    }

    #[test]
    fn test_drops_invalid_records_preserving_order() {
        let raw = vec![
            json!({"id": "gem-a", "title": "First", "url": "https://example.com/a"}),
            json!(null),
            json!({"title": "no url"}),
            json!(42),
            json!("not a record"),
            json!({"id": "gem-b", "title": "Second", "url": "https://example.com/b"}),
        ];

        let gems = normalize_collection(raw);
        assert_eq!(gems.len(), 2);
        assert_eq!(gems[0].id, "gem-a");
        assert_eq!(gems[1].id, "gem-b");
    }

    #[test]
    fn test_does_not_deduplicate() {
        let record = json!({"id": "gem-a", "title": "Same", "url": "https://example.com"});
        let gems = normalize_collection(vec![record.clone(), record]);
        assert_eq!(gems.len(), 2);
        assert_eq!(gems[0], gems[1]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize_collection(Vec::new()).is_empty());
    }
}
