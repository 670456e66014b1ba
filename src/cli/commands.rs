//! Top-level sweep pipeline
//!
//! Linear orchestration: fetch, classify, report, then delete what the user
//! opted into.

use crate::{
    cli::args,
    cli::prompt::{Confirm, ConsolePrompt},
    config::Config,
    core::{
        BranchClassifier, Classification, DeleteOptions, DuplicateGroup, delete_branches,
        find_duplicates,
    },
    error::SweepError,
    utils::process::{GitExecutor, GitRunner},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute a sweep run against the real git binary and console prompt
#[instrument(skip(config))]
pub fn execute_command(config: &mut Config) -> anyhow::Result<()> {
    // Usage is always shown, not only on request or error.
    args::print_usage();

    let git = GitRunner::new(&config.work_dir);
    run(config, &git, &ConsolePrompt)
}

/// The sweep pipeline over an arbitrary executor and prompt
pub fn run<G: GitExecutor, C: Confirm>(
    config: &mut Config,
    git: &G,
    prompt: &C,
) -> anyhow::Result<()> {
    if !config.no_fetch {
        info!("Fetching and pruning remote-tracking refs...");
        git.output(&["fetch", "-p"])
            .map_err(|e| SweepError::fetch(format!("remote synchronization failed: {e}")))?;
    }

    let listing = git.lines(&["branch", "-vv"]).unwrap_or_default();
    if listing.is_empty() {
        return Err(SweepError::no_branches(
            "no local branches found (is this a git repository?)",
        ))
        .context("Failed to list branches");
    }

    let classifier = BranchClassifier::new()?;
    let classification = classifier.classify(&listing);
    let duplicates = find_duplicates(git);

    report(&classification, &duplicates);

    // Interactive gone-branch deletion, inline with the reporting phase.
    // The prompt always force-deletes; --dry-run and --no-force scope the
    // flag-triggered phase below only.
    if !classification.gone.is_empty() && !config.deletion.gone {
        let question = format!(
            "Delete {} gone branch(es)?",
            classification.gone.len()
        );
        if prompt.confirm(&question) {
            let deleted = delete_branches(
                git,
                &classification.gone,
                DeleteOptions {
                    force: true,
                    dry_run: false,
                },
            );
            println!("Deleted {deleted} branch(es)");
            // The post-report phase re-checks this same flag, so accepting
            // the prompt arms a second pass over the same candidates.
            config.deletion.gone = true;
        }
    }

    if !classification.unpushed.is_empty() && !config.deletion.untracked {
        println!(
            "{} not-pushed branch(es) would be deleted; re-run with --delete-untracked to delete them",
            classification.unpushed.len()
        );
    }

    let opts = DeleteOptions {
        force: !config.deletion.no_force,
        dry_run: config.deletion.dry_run,
    };

    if config.deletion.gone && !classification.gone.is_empty() {
        let deleted = delete_branches(git, &classification.gone, opts);
        if !opts.dry_run {
            println!("Deleted {deleted} gone branch(es)");
        }
    }

    if config.deletion.untracked && !classification.unpushed.is_empty() {
        let deleted = delete_branches(git, &classification.unpushed, opts);
        if !opts.dry_run {
            println!("Deleted {deleted} not-pushed branch(es)");
        }
    }

    Ok(())
}

/// Print the three classifications
fn report(classification: &Classification, duplicates: &[DuplicateGroup]) {
    println!("Gone branches (upstream deleted):");
    print_lines(&classification.gone);

    println!("\nBranches not pushed to origin:");
    print_lines(&classification.unpushed);

    println!("\nDuplicate branches (same commit):");
    if duplicates.is_empty() {
        println!("  (none)");
    } else {
        for group in duplicates {
            println!("  {}: {}", group.commit, group.branches.join(", "));
        }
    }
    println!();
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        println!("  (none)");
    } else {
        for line in lines {
            println!("  {}", line.trim_end());
        }
    }
}
