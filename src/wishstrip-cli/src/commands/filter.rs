//! Wishlist filter command handler

use crate::config::Config;
use crate::file_io;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;
use wishstrip::{FilterSummary, ManifestIndex};

/// Handle the filter command
///
/// # Arguments
/// * `manifest` - Manifest path (falls back to the configured default)
/// * `wishlist` - Wishlist to read, stdin if `None`
/// * `output` - File to write, stdout if `None`
pub fn handle(manifest: Option<&Path>, wishlist: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let manifest_path = Config::load()?.resolve_manifest(manifest);
    let mut index = file_io::load_manifest(&manifest_path)?;

    let input = file_io::open_input(wishlist)?;
    let mut out = file_io::open_output(output)?;

    let summary = run(input, &mut out, &mut index)?;
    report(&summary, &index);
    Ok(())
}

/// Filter `input` into `output`
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    index: &mut ManifestIndex,
) -> Result<FilterSummary> {
    wishstrip::filter_wishlist(input, output, index).context("Failed to filter wishlist")
}

fn report(summary: &FilterSummary, index: &ManifestIndex) {
    info!(
        lines = summary.lines,
        runs = summary.runs,
        items = index.cached_items(),
        "kept {} of {} wishlist entries",
        summary.entries_out,
        summary.entries_in
    );
    if summary.failed_runs > 0 {
        info!(
            "{} of {} runs could not be filtered and were kept as-is",
            summary.failed_runs, summary.runs
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    const MANIFEST: &str = r#"{
        "DestinyInventoryItemDefinition": {
            "100": {
                "sockets": {
                    "socketEntries": [{}, {}, {"randomizedPlugSetHash": 10}, {"randomizedPlugSetHash": 11}],
                    "socketCategories": [{"socketCategoryHash": 4241085061, "socketIndexes": [0, 1, 2, 3]}]
                }
            }
        },
        "DestinyPlugSetDefinition": {
            "10": {"reusablePlugItems": [{"plugItemHash": 1}]},
            "11": {"reusablePlugItems": [{"plugItemHash": 2}, {"plugItemHash": 3}]}
        }
    }"#;

    fn index_from_file() -> ManifestIndex {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("manifest.json");
        fs::write(&path, MANIFEST).unwrap();
        file_io::load_manifest(&path).unwrap()
    }

    #[test]
    fn test_run_filters_wishlist() {
        let mut index = index_from_file();
        let input = Cursor::new(
            "dimwishlist:item=100&perks=1,4#notes:good\n\
             dimwishlist:item=100&perks=4,1#notes:great\n\
             // comment\n",
        );
        let mut out = Vec::new();

        let summary = run(input, &mut out, &mut index).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "dimwishlist:item=100&perks=1#notes:good;great\n// comment\n"
        );
        assert_eq!(summary.entries_in, 2);
        assert_eq!(summary.entries_out, 1);
    }

    #[test]
    fn test_run_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let wishlist = temp_dir.path().join("wishlist.txt");
        let output = temp_dir.path().join("filtered.txt");
        fs::write(&wishlist, "// keep\ndimwishlist:item=100\n").unwrap();

        let mut index = index_from_file();
        {
            let input = file_io::open_input(Some(&wishlist)).unwrap();
            let mut out = file_io::open_output(Some(&output)).unwrap();
            run(input, &mut out, &mut index).unwrap();
        }

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "// keep\ndimwishlist:item=100\n"
        );
    }
}
