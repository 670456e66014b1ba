//! # Branch Sweep
//!
//! A tidy-up tool for local git branches. It shells out to the `git` CLI,
//! classifies branches whose upstream was deleted ("gone"), branches with no
//! upstream at all ("not pushed"), and branches pointing at a duplicate
//! commit, then deletes whichever sets the user opts into.
//!
//! ## Features
//!
//! - Structured git invocation (argument lists, never shell strings)
//! - Prune-fetch of stale remote-tracking refs
//! - Gone / not-pushed / duplicate classification from listing output
//! - Safe, force, and dry-run deletion with current-branch protection
//! - Professional error handling and logging

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
