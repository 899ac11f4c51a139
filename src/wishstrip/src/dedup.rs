//! Collapse entries with the same perk set, merging their notes

use crate::entry::WishlistEntry;
use std::collections::{BTreeSet, HashMap};

/// Order-insensitive grouping key for a perk list
pub fn perk_set_key(perks: &[String]) -> String {
    let mut sorted: Vec<&str> = perks.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// Deduplicate the entries of a single item by perk set
///
/// The first entry seen for each perk set is kept, in first-seen order. Its
/// note is replaced by every distinct non-empty note in the group, sorted and
/// joined with `;`.
pub fn dedupe_by_perk_set(entries: Vec<WishlistEntry>) -> Vec<WishlistEntry> {
    let mut groups: Vec<(WishlistEntry, BTreeSet<String>)> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for mut entry in entries {
        let key = perk_set_key(&entry.perks);
        let notes = std::mem::take(&mut entry.notes);
        match by_key.get(&key) {
            Some(&group) => {
                groups[group].1.insert(notes);
            }
            None => {
                by_key.insert(key, groups.len());
                groups.push((entry, BTreeSet::from([notes])));
            }
        }
    }

    groups
        .into_iter()
        .map(|(mut entry, notes)| {
            entry.notes = notes
                .into_iter()
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(";");
            entry
        })
        .collect()
}
