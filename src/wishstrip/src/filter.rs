//! Restrict wishlist entries to perks their item can actually roll

use crate::entry::{EntryError, WishlistEntry};
use crate::manifest::{ManifestError, ManifestIndex};
use thiserror::Error;

/// A wishlist line that couldn't be filtered
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("while parsing {line:?}: {source}")]
    Entry {
        line: String,
        #[source]
        source: EntryError,
    },

    #[error("while looking up perks for the item in {line:?}: {source}")]
    Manifest {
        line: String,
        #[source]
        source: ManifestError,
    },

    #[error("{line:?} is not valid UTF-8: {source}")]
    Encoding {
        line: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Drop perks not rollable on the entry's item, keeping the written order
///
/// Returns `None` when no perk survives.
pub fn filter_entry(
    entry: WishlistEntry,
    index: &mut ManifestIndex,
) -> Result<Option<WishlistEntry>, ManifestError> {
    let WishlistEntry { item, perks, notes } = entry;
    let valid = index.perks_for_item(&item)?;

    let perks: Vec<String> = perks.into_iter().filter(|p| valid.contains(p)).collect();
    if perks.is_empty() {
        return Ok(None);
    }

    Ok(Some(WishlistEntry { item, perks, notes }))
}

/// Parse and filter one wishlist line
pub fn filter_line(
    line: &str,
    index: &mut ManifestIndex,
) -> Result<Option<WishlistEntry>, FilterError> {
    let entry = WishlistEntry::parse(line).map_err(|source| FilterError::Entry {
        line: line.to_string(),
        source,
    })?;

    filter_entry(entry, index).map_err(|source| FilterError::Manifest {
        line: line.to_string(),
        source,
    })
}
