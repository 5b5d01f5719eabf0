//! Description backfill for category entries.
//!
//! Heading entries often carry no prose of their own; this pass fills
//! each blank description with the names of the entry's immediate
//! children so category terms still resolve to something useful.

use crate::model::EntryMap;
use log::debug;

/// Prefix of every synthesized description.
const BACKFILL_PREFIX: &str = "Entries: ";

/// Fill blank descriptions from immediate child entry names.
///
/// An entry named `n` with category `c` parents exactly the entries whose
/// category equals `c + " > " + n` (or `n` when `c` is empty). Children
/// are listed in map order, which for [`EntryMap`] is lexicographic by
/// name. Grandchildren are never considered, entries that already have a
/// description are left untouched, and the pass is idempotent.
pub fn backfill_descriptions(entries: &mut EntryMap) {
    let mut synthesized: Vec<(String, String)> = Vec::new();

    for (name, entry) in entries.iter() {
        if entry.has_description() {
            continue;
        }
        let child_category = entry.child_category(name);
        let children: Vec<&str> = entries
            .iter()
            .filter(|(child_name, _)| child_name.as_str() != name)
            .filter(|(_, child)| child.category == child_category)
            .map(|(child_name, _)| child_name.as_str())
            .collect();
        if !children.is_empty() {
            synthesized.push((
                name.clone(),
                format!("{}{}", BACKFILL_PREFIX, children.join(", ")),
            ));
        }
    }

    if !synthesized.is_empty() {
        debug!("backfilled {} descriptions", synthesized.len());
    }
    for (name, description) in synthesized {
        if let Some(entry) = entries.get_mut(&name) {
            entry.description = description;
        }
    }
}
