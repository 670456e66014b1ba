//! Branch listing parsing and classification
//!
//! Consumes raw `git branch -vv` output lines without re-querying git: the
//! tracking annotation in the listing carries everything needed to tell gone
//! branches from branches that were never pushed.

use crate::error::{Result, SweepError};
use regex::Regex;
use tracing::{debug, instrument};

/// Extract the branch name token from one raw listing line.
///
/// Handles both the plain listing format (name only, possibly prefixed with
/// the checked-out `*` marker) and the verbose format (name, commit, bracketed
/// tracking info, subject). Idempotent on already-clean names.
pub fn branch_name(line: &str) -> &str {
    let stripped = line.trim_start();
    let stripped = stripped.strip_prefix('*').unwrap_or(stripped);
    stripped.split_whitespace().next().unwrap_or("")
}

/// Verbose listing lines partitioned by tracking status
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Lines whose upstream was deleted on the remote
    pub gone: Vec<String>,
    /// Lines with no upstream configured at all
    pub unpushed: Vec<String>,
}

/// Classifier over verbose branch-listing lines
pub struct BranchClassifier {
    /// Regex for the deleted-upstream tracking annotation
    re_gone: Regex,
}

impl BranchClassifier {
    /// Create a new classifier
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_gone: Regex::new(r"origin/.*: gone\]")
                .map_err(|e| SweepError::config(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Partition listing lines into gone and not-pushed sets.
    ///
    /// The two sets are computed independently from the same listing; the
    /// patterns happen to be mutually exclusive but nothing here relies on
    /// that.
    #[instrument(skip(self, lines))]
    pub fn classify(&self, lines: &[String]) -> Classification {
        let mut classification = Classification::default();

        for line in lines {
            if self.re_gone.is_match(line) {
                debug!("Gone branch: {}", line);
                classification.gone.push(line.clone());
            }
            if !line.contains("origin") {
                debug!("Not-pushed branch: {}", line);
                classification.unpushed.push(line.clone());
            }
        }

        debug!(
            "Classified {} lines: {} gone, {} not pushed",
            lines.len(),
            classification.gone.len(),
            classification.unpushed.len()
        );

        classification
    }
}

impl Default for BranchClassifier {
    fn default() -> Self {
        Self::new().expect("Failed to create default branch classifier")
    }
}
