//! Core functionality for branch sweeping
//!
//! Contains the logic for parsing branch listings, detecting duplicate
//! commits, and deleting branches.

pub mod classify;
pub mod deletion;
pub mod duplicates;

pub use classify::{BranchClassifier, Classification, branch_name};
pub use deletion::{DeleteOptions, delete_branches};
pub use duplicates::{DuplicateGroup, find_duplicates};
