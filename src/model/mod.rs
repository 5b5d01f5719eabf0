//! Document model types shared by the parser and the context extractor.
//!
//! This module defines the intermediate representation that bridges host
//! document retrieval and the core algorithms: a flat, document-ordered
//! sequence of [`Block`]s in, a name-keyed [`EntryMap`] out.

mod block;
mod entry;
mod position;

pub use block::{Block, BlockStyle};
pub use entry::{join_category, Entry, EntryMap, CATEGORY_SEPARATOR};
pub use position::Position;
