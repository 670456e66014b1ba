//! Command-line argument parsing

use clap::{CommandFactory, Parser};

/// git-sweep - prune gone, unpushed, and duplicate local branches
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "git-sweep")]
pub struct Args {
    /// Delete branches whose upstream is gone, without prompting
    #[arg(long)]
    pub delete_gone: bool,

    /// Delete branches that have no upstream configured
    #[arg(long)]
    pub delete_untracked: bool,

    /// Use safe, merge-checked deletion instead of force deletion
    #[arg(long)]
    pub no_force: bool,

    /// Report intended deletions without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the remote synchronization step
    #[arg(long)]
    pub no_fetch: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Print the usage text.
///
/// Called unconditionally at startup, not only on request or error; the tool
/// has always led every run with its usage text.
pub fn print_usage() {
    let mut command = Args::command();
    let _ = command.print_help();
    println!();
}
