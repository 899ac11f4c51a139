//! Destiny 2 manifest data needed to resolve rollable weapon perks.
//!
//! Only the inventory item and plug set tables are decoded. Everything else
//! in the manifest (other tables, other fields on items) is ignored by serde.
//!
//! An item's rollable perks come from its "Weapon Perks" socket category:
//! the third and fourth socket indexes of that category point at the two
//! randomized perk columns, and each of those sockets references a plug set
//! listing the perks that can roll there.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

/// Socket category hash of the "Weapon Perks" category
pub const WEAPON_PERKS_CATEGORY_HASH: u32 = 4241085061;

/// Positions in the weapon perks category's index list holding the two random perk columns
const RANDOM_PERK_POSITIONS: [usize; 2] = [2, 3];

/// Perk hashes (decimal strings) rollable on an item
pub type PerkSet = HashSet<String>;

/// Which manifest table a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Item,
    PlugSet,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Item => write!(f, "item"),
            LookupKind::PlugSet => write!(f, "plug set"),
        }
    }
}

/// Why an item's socket layout can't yield random perk columns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("socket category {} not found", WEAPON_PERKS_CATEGORY_HASH)]
    MissingWeaponPerks,

    #[error("weapon perks category has {found} sockets, want at least 4")]
    TooFewSockets { found: usize },

    #[error("socket entry with index {index} not found, total entries: {total}")]
    SocketOutOfRange { index: usize, total: usize },
}

/// Errors that can occur while decoding the manifest or resolving perks
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("{kind} {id:?} not found")]
    NotFound { kind: LookupKind, id: String },

    #[error("item {item:?}: {reason}")]
    MalformedItem {
        item: String,
        reason: MalformedReason,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Manifest tables
// ============================================================================

/// The two manifest tables perk resolution needs
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Manifest {
    #[serde(rename = "DestinyInventoryItemDefinition", default)]
    pub items: HashMap<String, Item>,

    #[serde(rename = "DestinyPlugSetDefinition", default)]
    pub plug_sets: HashMap<String, PlugSet>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub sockets: SocketsDef,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketsDef {
    #[serde(default)]
    pub socket_entries: Vec<SocketEntry>,

    #[serde(default)]
    pub socket_categories: Vec<SocketCategory>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketEntry {
    /// Plug set rolled into this socket when the item drops; 0 when the
    /// socket has none, which never names a real plug set
    #[serde(default)]
    pub randomized_plug_set_hash: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketCategory {
    pub socket_category_hash: u32,

    /// Indexes into `SocketsDef::socket_entries`
    #[serde(default)]
    pub socket_indexes: Vec<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugSet {
    #[serde(default)]
    pub reusable_plug_items: Vec<PlugItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugItem {
    pub plug_item_hash: u32,
}

impl Item {
    /// Find a socket category by hash
    pub fn socket_category(&self, hash: u32) -> Option<&SocketCategory> {
        self.sockets
            .socket_categories
            .iter()
            .find(|c| c.socket_category_hash == hash)
    }

    /// Plug set hashes behind the two random perk columns
    pub fn random_perk_plug_sets(&self) -> Result<[u32; 2], MalformedReason> {
        let category = self
            .socket_category(WEAPON_PERKS_CATEGORY_HASH)
            .ok_or(MalformedReason::MissingWeaponPerks)?;

        if category.socket_indexes.len() < 4 {
            return Err(MalformedReason::TooFewSockets {
                found: category.socket_indexes.len(),
            });
        }

        let entries = &self.sockets.socket_entries;
        let mut hashes = [0u32; 2];
        for (slot, position) in hashes.iter_mut().zip(RANDOM_PERK_POSITIONS) {
            let index = category.socket_indexes[position];
            let entry = entries
                .get(index)
                .ok_or(MalformedReason::SocketOutOfRange {
                    index,
                    total: entries.len(),
                })?;
            *slot = entry.randomized_plug_set_hash;
        }

        Ok(hashes)
    }
}

impl Manifest {
    /// Decode the manifest from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode the manifest from a JSON stream
    ///
    /// Full manifests run to hundreds of megabytes, so wrap files in a
    /// `BufReader` before handing them over.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve the rollable perks of an item without caching
    pub fn resolve_perks(&self, item_id: &str) -> Result<PerkSet, ManifestError> {
        let item = self.items.get(item_id).ok_or_else(|| ManifestError::NotFound {
            kind: LookupKind::Item,
            id: item_id.to_string(),
        })?;

        let plug_sets = item
            .random_perk_plug_sets()
            .map_err(|reason| ManifestError::MalformedItem {
                item: item_id.to_string(),
                reason,
            })?;

        let mut perks = PerkSet::new();
        for hash in plug_sets {
            let id = hash.to_string();
            let plug_set = self
                .plug_sets
                .get(&id)
                .ok_or(ManifestError::NotFound {
                    kind: LookupKind::PlugSet,
                    id,
                })?;
            perks.extend(
                plug_set
                    .reusable_plug_items
                    .iter()
                    .map(|p| p.plug_item_hash.to_string()),
            );
        }

        Ok(perks)
    }
}

// ============================================================================
// Memoizing index
// ============================================================================

/// Manifest plus a per-item cache of resolved perk sets
///
/// The cache lives as long as the index and is never invalidated.
#[derive(Debug, Default)]
pub struct ManifestIndex {
    manifest: Manifest,
    cache: HashMap<String, PerkSet>,
}

impl ManifestIndex {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            cache: HashMap::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.manifest.items.len()
    }

    pub fn plug_set_count(&self) -> usize {
        self.manifest.plug_sets.len()
    }

    /// Number of items whose perk sets have been resolved so far
    pub fn cached_items(&self) -> usize {
        self.cache.len()
    }

    /// Perks currently rollable on `item_id`, resolved once per item
    ///
    /// Failed lookups are not cached.
    pub fn perks_for_item(&mut self, item_id: &str) -> Result<&PerkSet, ManifestError> {
        if !self.cache.contains_key(item_id) {
            let perks = self.manifest.resolve_perks(item_id)?;
            debug!(item = item_id, perks = perks.len(), "resolved item perks");
            self.cache.insert(item_id.to_string(), perks);
        }

        Ok(&self.cache[item_id])
    }
}

impl From<Manifest> for ManifestIndex {
    fn from(manifest: Manifest) -> Self {
        Self::new(manifest)
    }
}
