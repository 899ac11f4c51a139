//! Opening the manifest and wishlist streams

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;
use wishstrip::{Manifest, ManifestIndex};

/// Decode the manifest at `path` into a fresh index
pub fn load_manifest(path: &Path) -> Result<ManifestIndex> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open manifest: {}", path.display()))?;

    let manifest = Manifest::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;

    let index = ManifestIndex::new(manifest);
    info!(
        items = index.item_count(),
        plug_sets = index.plug_set_count(),
        "loaded manifest {}",
        path.display()
    );
    Ok(index)
}

/// Wishlist file, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open wishlist: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
