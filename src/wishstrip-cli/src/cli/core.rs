//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wishstrip", version)]
#[command(about = "Filter DIM wishlists down to perks the manifest can roll", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (-v for debug, -vv for everything)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a wishlist against the manifest
    #[command(visible_alias = "f")]
    Filter {
        /// Path to the manifest JSON (uses configured default if not provided)
        #[arg(short, long, env = "WISHSTRIP_MANIFEST")]
        manifest: Option<PathBuf>,

        /// Wishlist to read (stdin if not provided)
        #[arg(short, long)]
        wishlist: Option<PathBuf>,

        /// Where to write the filtered wishlist (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the perks that can roll on an item
    #[command(visible_alias = "p")]
    Perks {
        /// Item hash (e.g. 1363886209)
        item: String,

        /// Path to the manifest JSON (uses configured default if not provided)
        #[arg(short, long, env = "WISHSTRIP_MANIFEST")]
        manifest: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default manifest path
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
