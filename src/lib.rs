//! # termbase
//!
//! Hierarchical knowledge-base extraction from structured documents.
//!
//! A writer maintains a glossary section organized by headings; termbase
//! turns that section into named entries with descriptions, key/value
//! properties, an optional image, and a category path derived from the
//! heading nesting. Separately, given the writer's cursor or selection,
//! it returns a bounded window of surrounding text so a lookup feature
//! can disambiguate terms in context.
//!
//! ## Quick Start
//!
//! ```
//! use termbase::Termbase;
//!
//! fn main() -> termbase::Result<()> {
//!     let document = "\
//! ## Metadata
//!
//! ### Places
//!
//! Saltmarsh
//! A small port town
//! population: 2,000
//! ";
//!
//!     let result = Termbase::new().parse_text(document)?;
//!     let entry = &result.entries()["Saltmarsh"];
//!     assert_eq!(entry.category, "Places");
//!
//!     println!("{}", result.to_json(termbase::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading-aware parsing**: heading nesting becomes `" > "`-joined
//!   category paths; headings are themselves lookupable entries
//! - **Tolerant by design**: malformed lines degrade to no-ops, never
//!   errors; an unstructured document yields an empty map
//! - **Description backfill**: category entries without prose list their
//!   immediate children instead
//! - **Context windows**: bounded, blank-skipping neighborhoods around a
//!   cursor or selection
//! - **Multiple outputs**: JSON (host wire shape) and Markdown glossary

pub mod context;
pub mod error;
pub mod model;
pub mod parse;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use context::{extract_context, MAX_WALK_STEPS};
pub use error::{Error, Result};
pub use model::{Block, BlockStyle, Entry, EntryMap, Position, CATEGORY_SEPARATOR};
pub use parse::{backfill_descriptions, parse_blocks, parse_entries, ParseOptions, DEFAULT_SECTION};
pub use render::{to_json, to_markdown, JsonFormat};
pub use source::{section_blocks, DocumentSource, JsonSource, TextSource};

/// Parse a block sequence into an entry map, resolving the options'
/// named section first.
///
/// This is the caller-facing wrapper around the (total) core parser: a
/// named section that cannot be located is reported as
/// [`Error::SectionNotFound`] instead of invoking the parser at all.
///
/// # Example
///
/// ```
/// use termbase::{extract_entries, Block, ParseOptions};
///
/// let blocks = vec![
///     Block::heading("Metadata", 1),
///     Block::normal("Term"),
///     Block::normal("What the term means"),
/// ];
/// let entries = extract_entries(&blocks, &ParseOptions::default()).unwrap();
/// assert!(entries.contains_key("Term"));
/// ```
pub fn extract_entries(blocks: &[Block], options: &ParseOptions) -> Result<EntryMap> {
    let region = match &options.section {
        Some(name) => source::section_blocks(blocks, name)
            .ok_or_else(|| Error::SectionNotFound(name.clone()))?,
        None => blocks,
    };
    Ok(parse::parse_blocks(region, options))
}

/// Builder for parsing documents and extracting context windows.
///
/// # Example
///
/// ```
/// use termbase::{JsonFormat, Position, Termbase};
///
/// let result = Termbase::new()
///     .whole_body()
///     .parse_text("Term\nkind: example")?;
///
/// println!("{}", result.to_json(JsonFormat::Compact)?);
/// println!("{}", result.context(Position::cursor(0), 1));
/// # Ok::<(), termbase::Error>(())
/// ```
pub struct Termbase {
    parse_options: ParseOptions,
}

impl Termbase {
    /// Create a new termbase builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
        }
    }

    /// Parse the given named section (default `"Metadata"`).
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_section(name);
        self
    }

    /// Parse the whole document body instead of a named section.
    pub fn whole_body(mut self) -> Self {
        self.parse_options = self.parse_options.whole_body();
        self
    }

    /// Disable the description backfill pass.
    pub fn without_backfill(mut self) -> Self {
        self.parse_options = self.parse_options.without_backfill();
        self
    }

    /// Parse a plain-text document.
    pub fn parse_text(self, content: &str) -> Result<TermbaseResult> {
        self.parse_source(&TextSource::from_string(content))
    }

    /// Parse any document source.
    pub fn parse_source(self, source: &dyn DocumentSource) -> Result<TermbaseResult> {
        let blocks = source.blocks()?;
        self.parse_blocks(blocks)
    }

    /// Parse an already-normalized block sequence.
    pub fn parse_blocks(self, blocks: Vec<Block>) -> Result<TermbaseResult> {
        let entries = extract_entries(&blocks, &self.parse_options)?;
        Ok(TermbaseResult { blocks, entries })
    }
}

impl Default for Termbase {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document: the entry map plus the normalized
/// blocks it came from, kept so context windows can be extracted against
/// the same document.
pub struct TermbaseResult {
    blocks: Vec<Block>,
    entries: EntryMap,
}

impl TermbaseResult {
    /// The parsed entry map.
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    /// The normalized block sequence the entries were parsed from.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the result, handing the entry map to the caller.
    pub fn into_entries(self) -> EntryMap {
        self.entries
    }

    /// Convert the entry map to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.entries, format)
    }

    /// Convert the entry map to a Markdown glossary.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.entries)
    }

    /// Extract the context window around a position in this document.
    pub fn context(&self, position: Position, limit: usize) -> String {
        extract_context(&self.blocks, position, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let termbase = Termbase::new();
        assert_eq!(termbase.parse_options.section.as_deref(), Some("Metadata"));
        assert!(termbase.parse_options.backfill);
    }

    #[test]
    fn test_builder_chained() {
        let termbase = Termbase::new().with_section("Glossary").without_backfill();
        assert_eq!(termbase.parse_options.section.as_deref(), Some("Glossary"));
        assert!(!termbase.parse_options.backfill);
    }

    #[test]
    fn test_extract_entries_missing_section() {
        let blocks = [Block::normal("no headings here")];
        let result = extract_entries(&blocks, &ParseOptions::default());
        assert!(matches!(result, Err(Error::SectionNotFound(name)) if name == "Metadata"));
    }

    #[test]
    fn test_extract_entries_whole_body_never_fails() {
        let blocks = [Block::normal("no headings here")];
        let entries = extract_entries(&blocks, &ParseOptions::new().whole_body()).unwrap();
        assert!(entries.contains_key("no headings here"));
    }

    #[test]
    fn test_result_keeps_blocks_for_context() {
        let result = Termbase::new()
            .whole_body()
            .parse_text("alpha\n\nbeta\n\ngamma")
            .unwrap();

        assert_eq!(result.context(Position::cursor(2), 1), "alpha beta gamma");
    }
}
