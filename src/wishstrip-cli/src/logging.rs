//! Log output setup
//!
//! Everything goes to stderr; stdout is reserved for the filtered wishlist.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity flags
///
/// The library crate and the `wishstrip` binary share a crate name, so a
/// `wishstrip` target directive covers both; directive targets match by
/// prefix, which also takes in every `wishstrip::` module path.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "wishstrip=info",
        1 => "wishstrip=debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the flags
pub fn init(verbose: u8, quiet: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose, quiet).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
