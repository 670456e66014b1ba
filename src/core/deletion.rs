//! Branch deletion workflow
//!
//! Deletes candidate branches with current-branch protection, safe/force
//! modes, and a dry-run mode that never touches git.

use crate::core::classify::branch_name;
use crate::utils::process::GitExecutor;
use tracing::{debug, instrument, warn};

/// Deletion behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Use `git branch -D` instead of the merge-checked `-d`
    pub force: bool,
    /// Only print what would be deleted; never invoke git
    pub dry_run: bool,
}

/// Delete the branches named by the given raw listing lines.
///
/// The currently checked-out branch is resolved once per call and is never
/// passed to a deletion command; matching candidates are reported as skipped.
/// Every attempted deletion is independent: a failure is reported and the
/// remaining candidates are still processed. Returns the number of branches
/// actually deleted (skips and failures excluded).
#[instrument(skip(git, lines))]
pub fn delete_branches<G: GitExecutor>(git: &G, lines: &[String], opts: DeleteOptions) -> usize {
    // Absent (e.g. detached HEAD) just means there is nothing to protect.
    let current = git.single(&["rev-parse", "--abbrev-ref", "HEAD"]).ok();

    let mut deleted = 0;
    for line in lines {
        let name = branch_name(line);
        if name.is_empty() {
            continue;
        }

        if current.as_deref() == Some(name) {
            println!("Skipping checked-out branch '{name}'");
            continue;
        }

        if opts.dry_run {
            println!("Would delete branch '{name}'");
            continue;
        }

        let delete_flag = if opts.force { "-D" } else { "-d" };
        match git.output(&["branch", delete_flag, name]) {
            Ok(_) => {
                debug!("Deleted branch '{}'", name);
                deleted += 1;
            }
            Err(e) => {
                warn!("Could not delete branch '{}': {}", name, e);
            }
        }
    }

    deleted
}
