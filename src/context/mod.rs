//! Bounded context-window extraction around a cursor or selection.
//!
//! Given a position inside a block sequence, returns the selected or
//! current text plus up to `limit` non-empty neighboring blocks on each
//! side. Empty blocks are visual spacing and are skipped without counting
//! against the limit; a hard step bound keeps the walks finite on
//! documents padded with long runs of empty paragraphs.

use crate::model::{Block, Position};
use log::debug;

/// Hard bound on sibling-walk steps per direction, independent of the
/// caller's limit.
pub const MAX_WALK_STEPS: usize = 100;

/// Extract the text neighborhood around a position.
///
/// The result is `prefix + " " + core + " " + suffix` where `core` is the
/// cursor block's text (or the selected blocks' texts joined by spaces)
/// and prefix/suffix hold up to `limit` non-empty neighbors in document
/// order. With `limit == 0` the result is exactly `" " + core + " "`.
/// A position that identifies no block yields an empty string.
pub fn extract_context(blocks: &[Block], position: Position, limit: usize) -> String {
    let start = position.start_block();
    if start >= blocks.len() {
        return String::new();
    }
    // A selection may run past the end of the sequence; the last block
    // caps it.
    let end = position.end_block().min(blocks.len() - 1);

    let core = match position {
        Position::Cursor { block } => blocks[block].text.clone(),
        Position::Selection { .. } => blocks[start..=end]
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    };

    let prefix = collect_neighbors(blocks, start, Direction::Backward, limit);
    let suffix = collect_neighbors(blocks, end, Direction::Forward, limit);

    debug!(
        "context window at blocks {}..={}: {} prefix, {} suffix neighbors",
        start,
        end,
        prefix.len(),
        suffix.len()
    );

    format!("{} {} {}", prefix.join(" "), core, suffix.join(" "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Walk sibling blocks from (exclusive) the given index, gathering up to
/// `limit` non-empty texts. Returned in document order regardless of walk
/// direction.
fn collect_neighbors(
    blocks: &[Block],
    from: usize,
    direction: Direction,
    limit: usize,
) -> Vec<String> {
    let mut collected = Vec::new();
    let mut index = from;
    let mut steps = 0;

    while collected.len() < limit && steps < MAX_WALK_STEPS {
        index = match direction {
            Direction::Backward => match index.checked_sub(1) {
                Some(previous) => previous,
                None => break,
            },
            Direction::Forward => {
                if index + 1 >= blocks.len() {
                    break;
                }
                index + 1
            }
        };
        steps += 1;

        let text = &blocks[index].text;
        if !text.is_empty() {
            collected.push(text.clone());
        }
    }

    if direction == Direction::Backward {
        collected.reverse();
    }
    collected
}
