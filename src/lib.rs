//! termweave: render panels, tables and live progress bars from the command line
//!
//! The library half of the binary: argument parsing, configuration
//! resolution and the subcommand implementations.

pub mod cli;

pub use cli::{Cli, Command};
