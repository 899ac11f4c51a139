//! Small hand-written manifest shared by the unit tests

use crate::manifest::{Manifest, ManifestIndex};

/// Items:
/// - `100`: perks `{1, 2, 3}`
/// - `200`: perks `{5, 6, 7}`, category indexes out of order
/// - `300`: no weapon perks category
/// - `400`: weapon perks category with only 3 indexes
/// - `500`: category index past the end of the socket entries
/// - `600`: references a plug set that doesn't exist
/// - `700`: perk socket without a randomized plug set
pub const MANIFEST_JSON: &str = r#"{
  "DestinyInventoryItemDefinition": {
    "100": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {"randomizedPlugSetHash": 11}],
        "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2, 3]}]
      }
    },
    "200": {
      "sockets": {
        "socketEntries": [
          {"randomizedPlugSetHash": 21},
          {},
          {"randomizedPlugSetHash": 20},
          {"socketTypeHash": 1}
        ],
        "socketCategories": [
          {"socketCategoryHash": 3956125808, "socketIndexes": [1]},
          {"socketCategoryHash": 4241085061, "socketIndexes": [3, 1, 2, 0]}
        ]
      }
    },
    "300": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {"randomizedPlugSetHash": 11}],
        "socketCategories": [{"socketCategoryHash": 3956125808, "socketIndexes": [0, 1, 2, 3]}]
      }
    },
    "400": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}],
        "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2]}]
      }
    },
    "500": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {"randomizedPlugSetHash": 11}],
        "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2, 9]}]
      }
    },
    "600": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {"randomizedPlugSetHash": 99}],
        "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2, 3]}]
      }
    },
    "700": {
      "sockets": {
        "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {}],
        "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2, 3]}]
      }
    }
  },
  "DestinyPlugSetDefinition": {
    "10": {"reusablePlugItems": [{"plugItemHash": 1}]},
    "11": {"reusablePlugItems": [{"plugItemHash": 2}, {"plugItemHash": 3}]},
    "20": {"reusablePlugItems": [{"plugItemHash": 5}, {"plugItemHash": 6, "currentlyCanRoll": true}]},
    "21": {"reusablePlugItems": [{"plugItemHash": 7}]}
  }
}"#;

pub fn manifest() -> Manifest {
    Manifest::from_json_str(MANIFEST_JSON).expect("fixture manifest parses")
}

pub fn index() -> ManifestIndex {
    ManifestIndex::new(manifest())
}
