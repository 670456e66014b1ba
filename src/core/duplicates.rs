//! Duplicate-commit detection
//!
//! Finds local branches that resolve to the identical commit. The commit id
//! is an opaque grouping key; it is never interpreted.

use crate::core::classify::branch_name;
use crate::utils::process::GitExecutor;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A set of branches pointing at the same commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Commit id shared by the group
    pub commit: String,
    /// Branch names in listing order
    pub branches: Vec<String>,
}

/// Group local branches by the commit they resolve to, keeping only commits
/// with two or more branches.
///
/// Branches whose resolution fails are skipped without surfacing an error.
/// Groups come back in first-seen listing order.
#[instrument(skip(git))]
pub fn find_duplicates<G: GitExecutor>(git: &G) -> Vec<DuplicateGroup> {
    let listing = git.lines(&["branch"]).unwrap_or_default();

    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for line in &listing {
        let name = branch_name(line);
        if name.is_empty() {
            continue;
        }

        let Ok(commit) = git.single(&["rev-parse", name]) else {
            debug!("Could not resolve branch '{}', skipping", name);
            continue;
        };

        match index.get(&commit) {
            Some(&i) => groups[i].branches.push(name.to_string()),
            None => {
                index.insert(commit.clone(), groups.len());
                groups.push(DuplicateGroup {
                    commit,
                    branches: vec![name.to_string()],
                });
            }
        }
    }

    groups.retain(|group| group.branches.len() >= 2);
    debug!("Found {} duplicate commit group(s)", groups.len());
    groups
}
