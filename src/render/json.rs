//! JSON rendering for entry maps.

use crate::error::{Error, Result};
use crate::model::EntryMap;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an entry map to JSON.
///
/// The output is an object keyed by entry name:
/// `{ "<name>": { "description": ..., "properties": ..., "category": ...,
/// "imageUrl": ... }, ... }` with keys in lexicographic order.
pub fn to_json(entries: &EntryMap, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(entries),
        JsonFormat::Compact => serde_json::to_string(entries),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn sample() -> EntryMap {
        let mut entries = EntryMap::new();
        entries.insert(
            "Saltmarsh".to_string(),
            Entry::in_category("Places")
                .with_description("A small port town")
                .with_property("population", "2,000")
                .with_image("https://x/map.png"),
        );
        entries
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Saltmarsh\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entry = &value["Saltmarsh"];
        assert_eq!(entry["description"], "A small port town");
        assert_eq!(entry["category"], "Places");
        assert_eq!(entry["properties"]["population"], "2,000");
        assert_eq!(entry["imageUrl"], "https://x/map.png");
    }
}
