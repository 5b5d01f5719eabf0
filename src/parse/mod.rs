//! Parsing module: block sequence in, entry map out.

mod backfill;
mod metadata;
mod options;

pub use backfill::backfill_descriptions;
pub use metadata::parse_entries;
pub use options::{ParseOptions, DEFAULT_SECTION};

use crate::model::{Block, EntryMap};

/// Parse a block sequence into an entry map, honoring the options'
/// backfill setting. Section selection happens in the caller-facing
/// wrapper ([`crate::extract_entries`]); this function always parses the
/// blocks it is given.
pub fn parse_blocks(blocks: &[Block], options: &ParseOptions) -> EntryMap {
    let mut entries = parse_entries(blocks);
    if options.backfill {
        backfill_descriptions(&mut entries);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_parse_blocks_applies_backfill() {
        let blocks = [
            Block::heading("A", 1),
            Block::empty(),
            Block::normal("B"),
            Block::normal("child entry"),
        ];

        let entries = parse_blocks(&blocks, &ParseOptions::default());
        assert_eq!(entries["A"].description, "Entries: B");

        let entries = parse_blocks(&blocks, &ParseOptions::new().without_backfill());
        assert_eq!(entries["A"].description, "");
    }
}
