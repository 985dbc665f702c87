//! # Bough CLI Library
//!
//! Argument parsing and wiring for the `bough` binary: builds the GitHub
//! branch source from the command line and runs one resolution session
//! against the terminal.

pub mod cli;

pub use cli::{Cli, handle_cli};
