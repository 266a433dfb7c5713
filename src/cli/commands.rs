//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::error::{ConfigError, LblensError, Result};

/// lblens - declarative load balancer inventory queries.
#[derive(Parser, Debug)]
#[command(name = "lblens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the provider settings file.
    #[arg(short, long, global = true, env = "LBLENS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the load balancer inventory.
    Query {
        /// Exact load balancer id to match.
        #[arg(long)]
        id: Option<String>,

        /// Exact load balancer name to match.
        #[arg(long)]
        name: Option<String>,

        /// Tag equality filter, `key=value`. Repeatable; all must match.
        #[arg(short, long = "tag", value_name = "KEY=VALUE")]
        tags: Vec<String>,

        /// Region override for this query.
        #[arg(long)]
        region: Option<String>,

        /// Restrict results to one zone.
        #[arg(long)]
        zone: Option<String>,
    },

    /// Print the data source schema declaration.
    Schema {
        /// Provider name prepended to the type name.
        #[arg(long, default_value = "lblens")]
        provider: String,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Parses a `key=value` tag argument.
///
/// # Errors
///
/// Returns a validation error if the argument has no `=` or an empty key.
pub fn parse_tag(spec: &str) -> Result<(String, String)> {
    let (key, value) = spec.split_once('=').ok_or_else(|| {
        LblensError::Config(ConfigError::validation(
            format!("expected key=value, got '{spec}'"),
            "tag",
        ))
    })?;

    if key.is_empty() {
        return Err(ConfigError::validation("tag key must not be empty", "tag").into());
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_splits_on_first_equals() {
        let (key, value) = parse_tag("env=prod").unwrap();
        assert_eq!(key, "env");
        assert_eq!(value, "prod");

        let (key, value) = parse_tag("expr=a=b").unwrap();
        assert_eq!(key, "expr");
        assert_eq!(value, "a=b");
    }

    #[test]
    fn test_parse_tag_rejects_malformed() {
        assert!(parse_tag("noequals").is_err());
        assert!(parse_tag("=value").is_err());
    }

    #[test]
    fn test_parse_tag_allows_empty_value() {
        let (key, value) = parse_tag("env=").unwrap();
        assert_eq!(key, "env");
        assert!(value.is_empty());
    }

    #[test]
    fn test_cli_parses_query_command() {
        let cli = Cli::try_parse_from([
            "lblens", "query", "--name", "lb-test", "--tag", "env=prod", "--zone",
            "ap-jakarta-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Query {
                name, tags, zone, ..
            } => {
                assert_eq!(name.as_deref(), Some("lb-test"));
                assert_eq!(tags, vec![String::from("env=prod")]);
                assert_eq!(zone.as_deref(), Some("ap-jakarta-1"));
            }
            Commands::Schema { .. } => panic!("expected query command"),
        }
    }
}
