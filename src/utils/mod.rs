//! Utility modules for common functionality
//!
//! Provides the structured git process execution layer.

pub mod process;

pub use process::{GitExecutor, GitRunner, ProcessResult};
