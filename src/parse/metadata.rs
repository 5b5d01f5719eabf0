//! Hierarchy-aware metadata parsing.
//!
//! Turns a flat, document-ordered block sequence into a name-keyed entry
//! map. Heading blocks contribute twice: they update the active category
//! path for everything beneath them, and they open a candidate entry of
//! their own so heading titles are lookupable terms. Blank blocks and
//! headings are the segmentation boundaries that commit the pending
//! buffer.

use crate::model::{join_category, Block, Entry, EntryMap};
use log::debug;

/// Lines starting with this character end property scanning for the
/// current entry; everything buffered after it is ignored.
const STOP_MARKER: char = '_';

/// Parse a block sequence into an entry map.
///
/// Total over arbitrary input: malformed buffers, nameless entries, and
/// empty documents all degrade to "no entry" rather than an error. The
/// heading trail and pending buffer live only for the duration of the
/// call.
pub fn parse_entries(blocks: &[Block]) -> EntryMap {
    let mut entries = EntryMap::new();
    let mut trail = HeadingTrail::new();
    let mut buffer: Vec<Block> = Vec::new();
    let mut path = String::new();

    for block in blocks {
        if let Some(level) = block.heading_level() {
            // Commit the pending buffer under the path in effect before
            // this heading; the heading itself opens the next buffer.
            flush_into(&mut entries, &mut buffer, &path);
            path = trail.ancestor_path(level);
            buffer.push(block.clone());
            trail.record(level, &block.text);
        } else if block.is_blank() {
            flush_into(&mut entries, &mut buffer, &path);
            path = trail.path();
        } else {
            if buffer.is_empty() {
                path = trail.path();
            }
            buffer.push(block.clone());
        }
    }
    flush_into(&mut entries, &mut buffer, &path);

    debug!("parsed {} entries from {} blocks", entries.len(), blocks.len());
    entries
}

/// The most recent heading title seen at each level, index `level - 1`.
///
/// Recording level L truncates the trail to length L so deeper context
/// never survives a shallower heading's return. Skipped intermediate
/// levels hold empty strings and are omitted from joined paths.
#[derive(Debug)]
struct HeadingTrail {
    titles: Vec<String>,
}

impl HeadingTrail {
    fn new() -> Self {
        Self { titles: Vec::new() }
    }

    /// Record a heading title at the given level (1-based).
    fn record(&mut self, level: u8, title: &str) {
        let level = level as usize;
        self.titles.truncate(level);
        if self.titles.len() < level {
            self.titles.resize(level, String::new());
        }
        self.titles[level - 1] = title.to_string();
    }

    /// The full joined path of all recorded titles.
    fn path(&self) -> String {
        join_category(self.titles.iter().map(String::as_str))
    }

    /// The joined path of the given level's ancestors (levels above it),
    /// not including the level itself.
    fn ancestor_path(&self, level: u8) -> String {
        let upto = (level as usize).saturating_sub(1).min(self.titles.len());
        join_category(self.titles[..upto].iter().map(String::as_str))
    }
}

/// Commit the pending buffer as at most one entry and clear it.
fn flush_into(entries: &mut EntryMap, buffer: &mut Vec<Block>, category: &str) {
    let blocks = std::mem::take(buffer);
    if let Some((name, entry)) = convert_buffer(&blocks, category) {
        entries.insert(name, entry);
    }
}

/// Convert a committed buffer into a named entry.
///
/// Returns `None` when the buffer holds nothing usable: only blank
/// padding, or a first block with no text to serve as the name.
fn convert_buffer(blocks: &[Block], category: &str) -> Option<(String, Entry)> {
    // Leading blank padding never contributes to the entry.
    let start = blocks.iter().position(|block| !block.is_blank())?;
    let blocks = &blocks[start..];

    let name = blocks[0].text.clone();
    if name.is_empty() {
        return None;
    }

    let mut entry = Entry::in_category(category);
    entry.image = blocks[0].image.clone();

    // A second line without a property separator or stop marker reads as
    // the description.
    let mut scan_from = 1;
    if let Some(second) = blocks.get(1) {
        if !second.text.contains(':') && !second.text.starts_with(STOP_MARKER) {
            entry.description = second.text.clone();
            if entry.image.is_none() {
                entry.image = second.image.clone();
            }
            scan_from = 2;
        }
    }

    for block in blocks.iter().skip(scan_from) {
        if block.text.starts_with(STOP_MARKER) {
            break;
        }
        if entry.image.is_none() {
            entry.image = block.image.clone();
        }
        if let Some((key, value)) = block.text.split_once(':') {
            let (key, value) = (key.trim(), value.trim());
            if !key.is_empty() && !value.is_empty() {
                entry.properties.insert(key.to_string(), value.to_string());
            }
        }
        // Lines without a separator are ignored here; only the second
        // line can be a description.
    }

    Some((name, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockStyle;

    fn parse(blocks: &[Block]) -> EntryMap {
        parse_entries(blocks)
    }

    #[test]
    fn test_empty_document_yields_empty_map() {
        assert!(parse(&[]).is_empty());
        assert!(parse(&[Block::empty(), Block::empty()]).is_empty());
    }

    #[test]
    fn test_simple_entry() {
        let blocks = [
            Block::normal("Saltmarsh"),
            Block::normal("A small port town"),
            Block::normal("population: 2,000"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Saltmarsh"];
        assert_eq!(entry.description, "A small port town");
        assert_eq!(entry.properties["population"], "2,000");
        assert_eq!(entry.category, "");
    }

    #[test]
    fn test_blank_line_segments_entries() {
        let blocks = [
            Block::normal("First"),
            Block::empty(),
            Block::normal("Second"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("First"));
        assert!(entries.contains_key("Second"));
    }

    #[test]
    fn test_heading_nesting_sets_category() {
        let blocks = [
            Block::heading("A", 1),
            Block::heading("B", 2),
            Block::normal("x"),
        ];
        let entries = parse(&blocks);

        assert_eq!(entries["A"].category, "");
        assert_eq!(entries["B"].category, "A");
        assert_eq!(entries["x"].category, "A > B");
    }

    #[test]
    fn test_shallow_heading_resets_stack() {
        let blocks = [
            Block::heading("A", 1),
            Block::heading("B", 2),
            Block::heading("C", 1),
            Block::empty(),
            Block::normal("under-c"),
        ];
        let entries = parse(&blocks);

        assert_eq!(entries["C"].category, "");
        assert_eq!(entries["under-c"].category, "C");
    }

    #[test]
    fn test_skipped_heading_levels_join_without_gaps() {
        let blocks = [
            Block::heading("A", 1),
            Block::heading("B", 3),
            Block::empty(),
            Block::normal("x"),
        ];
        let entries = parse(&blocks);

        assert_eq!(entries["B"].category, "A");
        assert_eq!(entries["x"].category, "A > B");
    }

    #[test]
    fn test_heading_is_its_own_entry() {
        let blocks = [
            Block::heading("Places", 1),
            Block::normal("Where things happen"),
            Block::normal("count: 12"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Places"];
        assert_eq!(entry.description, "Where things happen");
        assert_eq!(entry.properties["count"], "12");
    }

    #[test]
    fn test_stop_marker_halts_property_scan() {
        let blocks = [
            Block::normal("Widget"),
            Block::normal("A thing"),
            Block::normal("color: blue"),
            Block::normal("_private notes below"),
            Block::normal("secret: yes"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Widget"];
        assert_eq!(entry.properties.len(), 1);
        assert!(entry.properties.contains_key("color"));
        assert!(!entry.properties.contains_key("secret"));
    }

    #[test]
    fn test_second_line_with_colon_is_property_not_description() {
        let blocks = [
            Block::normal("Widget"),
            Block::normal("color: blue"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Widget"];
        assert_eq!(entry.description, "");
        assert_eq!(entry.properties["color"], "blue");
    }

    #[test]
    fn test_second_line_stop_marker_means_no_description() {
        let blocks = [
            Block::normal("Widget"),
            Block::normal("_everything below is private"),
            Block::normal("color: blue"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Widget"];
        assert_eq!(entry.description, "");
        assert!(entry.properties.is_empty());
    }

    #[test]
    fn test_property_splits_on_first_colon() {
        let blocks = [Block::normal("Svc"), Block::normal("url: http://x:8080")];
        let entries = parse(&blocks);
        assert_eq!(entries["Svc"].properties["url"], "http://x:8080");
    }

    #[test]
    fn test_malformed_property_lines_are_skipped() {
        let blocks = [
            Block::normal("Svc"),
            Block::normal("desc"),
            Block::normal(": missing key"),
            Block::normal("missing value:"),
            Block::normal("not a property line"),
            Block::normal("ok: yes"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Svc"];
        assert_eq!(entry.properties.len(), 1);
        assert_eq!(entry.properties["ok"], "yes");
    }

    #[test]
    fn test_duplicate_property_key_overwrites() {
        let blocks = [
            Block::normal("Svc"),
            Block::normal("port: 80"),
            Block::normal("port: 8080"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["Svc"].properties["port"], "8080");
    }

    #[test]
    fn test_first_image_wins() {
        let blocks = [
            Block::normal("Town").with_image("https://x/first.png"),
            Block::normal("desc").with_image("https://x/second.png"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["Town"].image.as_deref(), Some("https://x/first.png"));
    }

    #[test]
    fn test_image_found_on_property_line() {
        let blocks = [
            Block::normal("Town"),
            Block::normal("desc"),
            Block::normal("kind: port").with_image("https://x/map.png"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["Town"].image.as_deref(), Some("https://x/map.png"));
    }

    #[test]
    fn test_image_after_stop_marker_is_ignored() {
        let blocks = [
            Block::normal("Town"),
            Block::normal("desc"),
            Block::normal("_stop"),
            Block::normal("later").with_image("https://x/late.png"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["Town"].image, None);
    }

    #[test]
    fn test_leading_blank_padding_is_discarded() {
        // A block with an image but no text survives the padding trim but
        // yields no name, so the buffer produces nothing.
        let blocks = [
            Block::empty(),
            Block::empty().with_image("https://x/i.png"),
        ];
        assert!(parse(&blocks).is_empty());

        let blocks = [Block::empty(), Block::normal("Named")];
        assert!(parse(&blocks).contains_key("Named"));
    }

    #[test]
    fn test_duplicate_entry_name_overwrites_entirely() {
        let blocks = [
            Block::heading("Cat", 1),
            Block::empty(),
            Block::normal("Term"),
            Block::normal("old description"),
            Block::normal("old: prop"),
            Block::empty(),
            Block::normal("Term"),
            Block::normal("new: prop"),
        ];
        let entries = parse(&blocks);

        let entry = &entries["Term"];
        assert_eq!(entry.description, "");
        assert!(!entry.properties.contains_key("old"));
        assert_eq!(entry.properties["new"], "prop");
    }

    #[test]
    fn test_category_captured_when_buffer_opens() {
        // The blank after "B" resets the active path to the full trail;
        // the entry that then opens belongs under the nearest heading.
        let blocks = [
            Block::heading("A", 1),
            Block::empty(),
            Block::normal("inside"),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["inside"].category, "A");
    }

    #[test]
    fn test_heading_style_tag_input() {
        let blocks = [
            Block::new("Top", BlockStyle::from_tag("HEADING_1")),
            Block::new("body", BlockStyle::from_tag("NORMAL_TEXT")),
        ];
        let entries = parse(&blocks);
        assert_eq!(entries["Top"].description, "body");
    }
}
