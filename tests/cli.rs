//! End-to-end tests for the git-sweep binary
//!
//! Each test builds a scratch git repository (and, for gone-branch
//! scenarios, a bare file remote) and runs the real binary against it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(dir)
        .args(args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .expect("Failed to execute git");
    assert!(status.success(), "git {:?} failed", args);
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute git");
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path();

    git(path, &["init", "--initial-branch=main"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    std::fs::write(path.join("README.md"), "# Test Repository").expect("Failed to write README");
    git(path, &["add", "README.md"]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Repo with a branch whose upstream has been deleted on the remote
fn setup_repo_with_gone_branch() -> (TempDir, TempDir) {
    let remote_dir = TempDir::new().expect("Failed to create remote dir");
    git(remote_dir.path(), &["init", "--bare", "--initial-branch=main"]);

    let repo = setup_repo();
    let path = repo.path();
    let remote_url = remote_dir.path().to_str().unwrap().to_string();

    git(path, &["remote", "add", "origin", &remote_url]);
    git(path, &["push", "-u", "origin", "main"]);
    git(path, &["checkout", "-b", "feat"]);
    git(path, &["push", "-u", "origin", "feat"]);
    git(path, &["checkout", "main"]);
    git(path, &["push", "origin", "--delete", "feat"]);

    (repo, remote_dir)
}

fn sweep() -> Command {
    Command::cargo_bin("git-sweep").expect("binary builds")
}

fn local_branches(dir: &Path) -> String {
    git_stdout(dir, &["branch"])
}

#[test]
fn fails_outside_a_repository() {
    let empty = TempDir::new().unwrap();

    sweep()
        .current_dir(empty.path())
        .arg("--no-fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No branches found"));
}

#[test]
fn fails_when_fetch_has_no_remote() {
    let repo = setup_repo();

    sweep()
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fetch error"));
}

#[test]
fn reports_unpushed_branches_with_a_hint() {
    let repo = setup_repo();
    git(repo.path(), &["branch", "spike"]);

    sweep()
        .current_dir(repo.path())
        .arg("--no-fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Branches not pushed to origin"))
        .stdout(predicate::str::contains("spike"))
        .stdout(predicate::str::contains("--delete-untracked"));

    assert!(local_branches(repo.path()).contains("spike"));
}

#[test]
fn reports_duplicate_commits_in_listing_order() {
    let repo = setup_repo();
    git(repo.path(), &["branch", "dup"]);

    // `git branch` lists alphabetically, so dup precedes main
    sweep()
        .current_dir(repo.path())
        .arg("--no-fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("dup, main"));
}

#[test]
fn dry_run_prints_candidates_without_deleting() {
    let repo = setup_repo();
    git(repo.path(), &["branch", "spike"]);

    sweep()
        .current_dir(repo.path())
        .args(["--no-fetch", "--delete-untracked", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would delete branch 'spike'"));

    assert!(local_branches(repo.path()).contains("spike"));
}

#[test]
fn delete_untracked_spares_the_checked_out_branch() {
    let repo = setup_repo();
    git(repo.path(), &["branch", "spike"]);

    sweep()
        .current_dir(repo.path())
        .args(["--no-fetch", "--delete-untracked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping checked-out branch 'main'"))
        .stdout(predicate::str::contains("Deleted 1 not-pushed branch(es)"));

    let branches = local_branches(repo.path());
    assert!(branches.contains("main"));
    assert!(!branches.contains("spike"));
}

#[test]
fn delete_gone_removes_pruned_branch() {
    let (repo, _remote) = setup_repo_with_gone_branch();

    sweep()
        .current_dir(repo.path())
        .arg("--delete-gone")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gone branches"))
        .stdout(predicate::str::contains("Deleted 1 gone branch(es)"));

    assert!(!local_branches(repo.path()).contains("feat"));
}

#[test]
fn declined_prompt_keeps_gone_branch() {
    let (repo, _remote) = setup_repo_with_gone_branch();

    sweep()
        .current_dir(repo.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete 1 gone branch(es)?"));

    assert!(local_branches(repo.path()).contains("feat"));
}

#[test]
fn accepted_prompt_force_deletes_gone_branch() {
    let (repo, _remote) = setup_repo_with_gone_branch();

    sweep()
        .current_dir(repo.path())
        .write_stdin("\n")
        .assert()
        .success();

    assert!(!local_branches(repo.path()).contains("feat"));
}
