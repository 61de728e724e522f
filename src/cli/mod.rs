//! CLI module - argument parsing and subcommand runners

pub mod apply;
pub mod args;

pub use args::{Cli, Commands};
