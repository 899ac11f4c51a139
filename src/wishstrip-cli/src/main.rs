mod cli;
mod commands;
mod config;
mod file_io;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Filter {
            manifest,
            wishlist,
            output,
        } => {
            commands::filter::handle(manifest.as_deref(), wishlist.as_deref(), output.as_deref())?;
        }

        Commands::Perks { item, manifest } => {
            commands::perks::handle(&item, manifest.as_deref())?;
        }

        Commands::Configure { manifest, show } => {
            commands::configure::handle(manifest, show)?;
        }
    }

    Ok(())
}
