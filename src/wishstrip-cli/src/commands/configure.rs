//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up wishstrip defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `manifest` - Optional manifest path to set as default
/// * `show` - If true, show current configuration
pub fn handle(manifest: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = manifest {
        set_manifest(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    if let Some(path) = config.get_manifest() {
        println!("Manifest: {}", path.display());
    } else {
        println!("No manifest configured");
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Set the manifest path in configuration
fn set_manifest(config: &mut Config, path: PathBuf) -> Result<()> {
    // Stored absolute when the file exists
    let path = path.canonicalize().unwrap_or(path);
    println!("Manifest configured: {}", path.display());
    config.set_manifest(path);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: wishstrip configure --manifest PATH");
    println!("   or: wishstrip configure --show");
    println!();
    println!("Note: the manifest is the Destiny 2 world content JSON,");
    println!("      available from the Bungie.net API (Destiny2/Manifest).");
}
