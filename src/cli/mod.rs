//! CLI module for the lblens query tool.
//!
//! This module provides the command-line interface for running inventory
//! queries against the CLB API.

mod commands;
mod output;

pub use commands::{Cli, Commands, OutputFormat, parse_tag};
pub use output::OutputFormatter;
