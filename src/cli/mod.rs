//! CLI module
//!
//! Argument parsing and the interactive menu shell. Everything here is a
//! thin layer over the ledger's entry points.

pub mod args;
pub mod menu;

pub use args::{parse_args, CliArgs, Command};
