//! Command-line interface module
//!
//! Provides argument parsing, the interactive prompt, and the sweep pipeline.

pub mod args;
pub mod commands;
pub mod prompt;

pub use args::{Args, parse_args};
pub use commands::execute_command;
pub use prompt::{Confirm, ConsolePrompt};
