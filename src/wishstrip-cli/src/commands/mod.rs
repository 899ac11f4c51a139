//! Command handlers for wishstrip CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod filter;
pub mod perks;
