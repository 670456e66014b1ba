//! Git process execution utilities
//!
//! Provides structured git invocation with proper error handling and logging.
//! Commands are always built from argument slices, never from interpolated
//! shell strings, so branch names with unexpected characters cannot break out
//! of the intended command.

use crate::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Result of a git process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

/// Interface over the external git binary.
///
/// A failed command is an `Err`, distinct from a successful command with
/// empty output. Call sites that want the tolerant "no result" behavior
/// apply `.ok()` or `unwrap_or_default()` themselves.
pub trait GitExecutor {
    /// Run `git` with the given arguments and capture its output
    fn output(&self, args: &[&str]) -> Result<ProcessResult>;

    /// Run `git` and return the non-empty stdout lines, trailing
    /// whitespace trimmed
    fn lines(&self, args: &[&str]) -> Result<Vec<String>> {
        let result = self.output(args)?;
        Ok(result
            .stdout
            .split('\n')
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Run `git` and return the whole trimmed stdout as a single value
    fn single(&self, args: &[&str]) -> Result<String> {
        let result = self.output(args)?;
        Ok(result.stdout.trim().to_string())
    }
}

/// Production executor that runs the `git` binary in a fixed working
/// directory
#[derive(Debug, Clone)]
pub struct GitRunner {
    work_dir: PathBuf,
}

impl GitRunner {
    /// Create a new runner anchored at the given repository directory
    pub fn new(work_dir: impl AsRef<Path>) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }
}

impl GitExecutor for GitRunner {
    #[instrument(skip(self))]
    fn output(&self, args: &[&str]) -> Result<ProcessResult> {
        let cmd_str = format!("git {}", args.join(" "));
        debug!("Running command: {}", cmd_str);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                SweepError::process(
                    cmd_str.clone(),
                    None,
                    String::new(),
                    format!("Failed to execute command: {e}"),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}",
            output.status.success(),
            exit_code,
            stdout.len()
        );

        if !output.status.success() {
            debug!("Command stderr: {}", stderr.trim());
            return Err(SweepError::process(cmd_str, exit_code, stdout, stderr));
        }

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedGit;
    use super::*;

    #[test]
    fn test_lines_splits_and_trims() {
        let git = ScriptedGit::new().on_success("branch", "  main \n  feature-x\n\n");
        let lines = git.lines(&["branch"]).unwrap();
        assert_eq!(lines, vec!["  main", "  feature-x"]);
    }

    #[test]
    fn test_lines_empty_output_is_ok_but_empty() {
        let git = ScriptedGit::new().on_success("branch", "");
        let lines = git.lines(&["branch"]).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_failure_is_distinct_from_empty_output() {
        let git = ScriptedGit::new().on_failure("branch", "fatal: not a git repository");
        assert!(git.lines(&["branch"]).is_err());
    }

    #[test]
    fn test_single_trims_whole_output() {
        let git = ScriptedGit::new().on_success("rev-parse --abbrev-ref HEAD", "main\n");
        assert_eq!(
            git.single(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap(),
            "main"
        );
    }

    #[test]
    fn test_runner_failing_command() {
        // `git` with a bogus subcommand exits non-zero
        let runner = GitRunner::new(std::env::temp_dir());
        let result = runner.output(&["definitely-not-a-subcommand"]);
        assert!(result.is_err());

        if let Err(SweepError::Process { command, .. }) = result {
            assert_eq!(command, "git definitely-not-a-subcommand");
        } else {
            panic!("Expected Process error");
        }
    }
}
