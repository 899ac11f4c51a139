//! DIM wishlist entry lines
//!
//! ```text
//! dimwishlist:item=<ItemID>&perks=<PerkID>[,<PerkID>...][#notes:<free text>]
//! ```
//!
//! Everything after the first `#notes:` is the note, taken verbatim.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix every wishlist entry line starts with
pub const ENTRY_PREFIX: &str = "dimwishlist:";

const NOTES_MARKER: &str = "#notes:";

/// Errors that can occur while parsing a wishlist entry line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("line does not start with {:?}", ENTRY_PREFIX)]
    MissingPrefix,

    #[error("missing \"=\" in {0:?}")]
    MalformedField(String),

    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("missing item ID")]
    MissingItem,

    #[error("missing perks")]
    MissingPerks,
}

/// One `dimwishlist:` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistEntry {
    pub item: String,
    /// Perk hashes in the order they were written
    pub perks: Vec<String>,
    /// Free text after `#notes:`, empty when absent
    pub notes: String,
}

/// Whether a line is a wishlist entry (as opposed to a comment, title, blank line...)
pub fn is_entry_line(line: &str) -> bool {
    line.starts_with(ENTRY_PREFIX)
}

impl WishlistEntry {
    /// Parse a single wishlist line
    ///
    /// `perks=` with an empty value yields a single empty perk rather than an
    /// error; it can never match a manifest perk so filtering drops it.
    pub fn parse(line: &str) -> Result<Self, EntryError> {
        let body = line
            .strip_prefix(ENTRY_PREFIX)
            .ok_or(EntryError::MissingPrefix)?;

        let (fields, notes) = body.split_once(NOTES_MARKER).unwrap_or((body, ""));

        let mut item = None;
        let mut perks: Option<Vec<String>> = None;
        for field in fields.split('&') {
            let (name, value) = field
                .split_once('=')
                .ok_or_else(|| EntryError::MalformedField(field.to_string()))?;
            match name {
                "item" => item = Some(value),
                "perks" => perks = Some(value.split(',').map(str::to_string).collect()),
                _ => return Err(EntryError::UnknownField(name.to_string())),
            }
        }

        let item = item
            .filter(|id| !id.is_empty())
            .ok_or(EntryError::MissingItem)?;
        let perks = perks.ok_or(EntryError::MissingPerks)?;

        Ok(Self {
            item: item.to_string(),
            perks,
            notes: notes.to_string(),
        })
    }
}

impl FromStr for WishlistEntry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WishlistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}item={}&perks={}",
            ENTRY_PREFIX,
            self.item,
            self.perks.join(",")
        )?;
        if !self.notes.is_empty() {
            write!(f, "{}{}", NOTES_MARKER, self.notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item: &str, perks: &[&str], notes: &str) -> WishlistEntry {
        WishlistEntry {
            item: item.to_string(),
            perks: perks.iter().map(|p| p.to_string()).collect(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_parse_full_line() {
        let parsed = WishlistEntry::parse("dimwishlist:item=100&perks=1,4#notes:good").unwrap();
        assert_eq!(parsed, entry("100", &["1", "4"], "good"));
    }

    #[test]
    fn test_parse_without_notes() {
        let parsed: WishlistEntry = "dimwishlist:item=100&perks=3".parse().unwrap();
        assert_eq!(parsed, entry("100", &["3"], ""));
    }

    #[test]
    fn test_notes_keep_later_markers() {
        let parsed =
            WishlistEntry::parse("dimwishlist:item=1&perks=2#notes:PvE #godroll#notes:again")
                .unwrap();
        assert_eq!(parsed.notes, "PvE #godroll#notes:again");
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let parsed = WishlistEntry::parse("dimwishlist:perks=5,6&item=200").unwrap();
        assert_eq!(parsed, entry("200", &["5", "6"], ""));
    }

    #[test]
    fn test_empty_perk_token_is_kept() {
        let parsed = WishlistEntry::parse("dimwishlist:item=100&perks=1,").unwrap();
        assert_eq!(parsed.perks, vec!["1".to_string(), String::new()]);

        let parsed = WishlistEntry::parse("dimwishlist:item=100&perks=").unwrap();
        assert_eq!(parsed.perks, vec![String::new()]);
    }

    #[test]
    fn test_missing_perks() {
        assert_eq!(
            WishlistEntry::parse("dimwishlist:item=100"),
            Err(EntryError::MissingPerks)
        );
    }

    #[test]
    fn test_missing_item() {
        assert_eq!(
            WishlistEntry::parse("dimwishlist:perks=1,2"),
            Err(EntryError::MissingItem)
        );
        assert_eq!(
            WishlistEntry::parse("dimwishlist:item=&perks=1,2"),
            Err(EntryError::MissingItem)
        );
    }

    #[test]
    fn test_malformed_field() {
        assert_eq!(
            WishlistEntry::parse("dimwishlist:item=100&perks"),
            Err(EntryError::MalformedField("perks".to_string()))
        );
        assert_eq!(
            WishlistEntry::parse("dimwishlist:#notes:nothing here"),
            Err(EntryError::MalformedField(String::new()))
        );
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            WishlistEntry::parse("dimwishlist:item=100&perks=1&masterwork=2"),
            Err(EntryError::UnknownField("masterwork".to_string()))
        );
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(
            WishlistEntry::parse("item=100&perks=1"),
            Err(EntryError::MissingPrefix)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            entry("100", &["1", "2"], "good;great").to_string(),
            "dimwishlist:item=100&perks=1,2#notes:good;great"
        );
        assert_eq!(
            entry("100", &["1"], "").to_string(),
            "dimwishlist:item=100&perks=1"
        );
    }

    #[test]
    fn test_roundtrip() {
        for original in [
            entry("100", &["1"], "good;great"),
            entry("200", &["7", "5", "6"], ""),
            entry("300", &["1"], "notes with # and #notes: inside"),
        ] {
            let parsed = WishlistEntry::parse(&original.to_string()).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn test_is_entry_line() {
        assert!(is_entry_line("dimwishlist:item=1&perks=2"));
        assert!(!is_entry_line("// dimwishlist:item=1&perks=2"));
        assert!(!is_entry_line(""));
        assert!(!is_entry_line("title:My Wishlist"));
    }
}
