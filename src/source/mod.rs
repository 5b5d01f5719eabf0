//! Document sources: the host-collaborator seam.
//!
//! The core algorithms depend on one narrow capability: "produce an
//! ordered block sequence for a region". [`DocumentSource`] is that seam;
//! the built-in implementations normalize documents that live on disk.
//! A real host (a document store with tabs and positioned objects) plugs
//! in the same way.

mod json;
mod text;

pub use json::JsonSource;
pub use text::TextSource;

use crate::error::Result;
use crate::model::Block;

/// A provider of normalized block sequences.
pub trait DocumentSource {
    /// Human-readable source name for logs and error messages.
    fn name(&self) -> &str;

    /// Produce the document body as an ordered block sequence.
    fn blocks(&self) -> Result<Vec<Block>>;
}

/// Locate a named section inside a block sequence.
///
/// The section is the run of blocks strictly after the first heading
/// whose text equals `name`, up to (not including) the next heading of
/// the same or a shallower level. Returns `None` when no heading matches.
pub fn section_blocks<'a>(blocks: &'a [Block], name: &str) -> Option<&'a [Block]> {
    let (start, level) = blocks.iter().enumerate().find_map(|(index, block)| {
        block
            .heading_level()
            .filter(|_| block.text == name)
            .map(|level| (index + 1, level))
    })?;

    let end = blocks[start..]
        .iter()
        .position(|block| matches!(block.heading_level(), Some(l) if l <= level))
        .map(|offset| start + offset)
        .unwrap_or(blocks.len());

    Some(&blocks[start..end])
}
