//! # wishstrip
//!
//! Filter DIM wishlists against the Destiny 2 manifest.
//!
//! Wishlists often list perk combinations that can no longer roll on an
//! item. This library:
//! - Resolves the perks rollable on each weapon from the manifest
//! - Parses and serializes `dimwishlist:` entry lines
//! - Drops unrollable perks from each entry (and entries left with none)
//! - Collapses entries with the same perk set, merging their notes
//! - Leaves every other line of the wishlist where it was
//!
//! ## Example
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{self, BufReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = wishstrip::Manifest::from_reader(BufReader::new(File::open("manifest.json")?))?;
//! let mut index = wishstrip::ManifestIndex::new(manifest);
//!
//! let wishlist = BufReader::new(File::open("wishlist.txt")?);
//! let summary = wishstrip::filter_wishlist(wishlist, &mut io::stdout(), &mut index)?;
//! eprintln!("{} of {} entries kept", summary.entries_out, summary.entries_in);
//! # Ok(())
//! # }
//! ```

pub mod dedup;
pub mod entry;
pub mod filter;
pub mod manifest;
pub mod stream;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use dedup::{dedupe_by_perk_set, perk_set_key};
#[doc(inline)]
pub use entry::{is_entry_line, EntryError, WishlistEntry, ENTRY_PREFIX};
#[doc(inline)]
pub use filter::{filter_entry, filter_line, FilterError};
#[doc(inline)]
pub use manifest::{
    LookupKind, MalformedReason, Manifest, ManifestError, ManifestIndex, PerkSet,
    WEAPON_PERKS_CATEGORY_HASH,
};
#[doc(inline)]
pub use stream::{filter_run, filter_wishlist, FilterSummary, Line, StreamError};
