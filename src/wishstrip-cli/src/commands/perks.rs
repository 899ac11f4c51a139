//! Perk lookup command handler

use crate::config::Config;
use crate::file_io;
use anyhow::{Context, Result};
use std::path::Path;
use wishstrip::PerkSet;

/// Handle the perks command: print every perk rollable on `item`
pub fn handle(item: &str, manifest: Option<&Path>) -> Result<()> {
    let manifest_path = Config::load()?.resolve_manifest(manifest);
    let mut index = file_io::load_manifest(&manifest_path)?;

    let perks = index
        .perks_for_item(item)
        .with_context(|| format!("Failed to resolve perks for item {}", item))?;

    for perk in sorted_perks(perks) {
        println!("{}", perk);
    }

    Ok(())
}

/// Perk hashes in numeric order
pub fn sorted_perks(perks: &PerkSet) -> Vec<&str> {
    let mut sorted: Vec<&str> = perks.iter().map(String::as_str).collect();
    sorted.sort_by_key(|p| (p.parse::<u64>().unwrap_or(u64::MAX), *p));
    sorted
}
