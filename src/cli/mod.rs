//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod diagnostics;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{execute, execute_with, is_valid_command_line, settings_for, Outcome};
pub use error::{CliError, CliResult};
