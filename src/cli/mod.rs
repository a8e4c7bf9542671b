//! CLI layer: argument parsing, command dispatch, terminal output

pub mod args;
pub mod commands;
pub mod error;
pub mod menu;
pub mod output;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
