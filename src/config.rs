//! Configuration management for the branch sweeper
//!
//! Centralizes the run flags and the repository context. The working
//! directory is carried here explicitly so every operation receives it as a
//! value instead of relying on ambient process state.

use crate::{cli::Args, error::SweepError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Repository directory all git commands run in
    pub work_dir: PathBuf,
    /// Skip the remote synchronization step
    pub no_fetch: bool,
    /// Deletion configuration
    pub deletion: DeletionConfig,
}

/// Deletion configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeletionConfig {
    /// Process gone-branch deletion in the post-report phase
    pub gone: bool,
    /// Process not-pushed-branch deletion in the post-report phase
    pub untracked: bool,
    /// Use safe, merge-checked deletion instead of force deletion
    pub no_force: bool,
    /// Report intended deletions without executing them
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            work_dir: PathBuf::from("."),
            no_fetch: false,
            deletion: DeletionConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SweepError> {
        let config = Self {
            debug: args.debug,
            no_fetch: args.no_fetch,
            deletion: DeletionConfig {
                gone: args.delete_gone,
                untracked: args.delete_untracked,
                no_force: args.no_force,
                dry_run: args.dry_run,
            },
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.work_dir.exists() {
            return Err(SweepError::validation(format!(
                "Working directory not found: {}",
                self.work_dir.display()
            )));
        }

        Ok(())
    }
}
