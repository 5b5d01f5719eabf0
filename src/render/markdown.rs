//! Markdown rendering for entry maps.
//!
//! Renders the knowledge base back into a reviewable glossary document:
//! one section per entry in map order, category shown inline under the
//! entry name.

use crate::error::Result;
use crate::model::{Entry, EntryMap};

/// Convert an entry map to a Markdown glossary.
pub fn to_markdown(entries: &EntryMap) -> Result<String> {
    let mut output = String::new();

    for (name, entry) in entries {
        render_entry(&mut output, name, entry);
    }

    Ok(output.trim_end().to_string())
}

fn render_entry(output: &mut String, name: &str, entry: &Entry) {
    output.push_str("## ");
    output.push_str(name);
    output.push('\n');

    if !entry.category.is_empty() {
        output.push_str(&format!("*{}*\n", entry.category));
    }
    output.push('\n');

    if let Some(ref uri) = entry.image {
        output.push_str(&format!("![{}]({})\n\n", name, uri));
    }

    if entry.has_description() {
        output.push_str(&entry.description);
        output.push_str("\n\n");
    }

    for (key, value) in &entry.properties {
        output.push_str(&format!("- {}: {}\n", key, value));
    }
    if !entry.properties.is_empty() {
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    #[test]
    fn test_markdown_glossary() {
        let mut entries = EntryMap::new();
        entries.insert(
            "Saltmarsh".to_string(),
            Entry::in_category("Places")
                .with_description("A small port town")
                .with_property("population", "2,000")
                .with_image("https://x/map.png"),
        );

        let markdown = to_markdown(&entries).unwrap();
        assert!(markdown.starts_with("## Saltmarsh\n*Places*\n"));
        assert!(markdown.contains("![Saltmarsh](https://x/map.png)"));
        assert!(markdown.contains("A small port town"));
        assert!(markdown.contains("- population: 2,000"));
    }

    #[test]
    fn test_markdown_minimal_entry() {
        let mut entries = EntryMap::new();
        entries.insert("Bare".to_string(), Entry::new());

        let markdown = to_markdown(&entries).unwrap();
        assert_eq!(markdown, "## Bare");
    }

    #[test]
    fn test_markdown_empty_map() {
        assert_eq!(to_markdown(&EntryMap::new()).unwrap(), "");
    }
}
