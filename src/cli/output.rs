//! Output formatting for CLI commands.
//!
//! This module renders query results and the schema declaration either
//! as human-readable text or as JSON.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::datasource::{DataSourceSchema, DataSourceState, TagMap};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Load balancer row for table display.
#[derive(Tabled)]
struct LoadBalancerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a query result for display.
    #[must_use]
    pub fn format_state(&self, state: &DataSourceState) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(state).unwrap_or_default(),
            OutputFormat::Text => Self::format_state_text(state),
        }
    }

    /// Formats a query result as text.
    fn format_state_text(state: &DataSourceState) -> String {
        if state.load_balancers.is_empty() {
            return format!("{} No load balancers matched the query.\n", "∅".yellow());
        }

        let rows: Vec<LoadBalancerRow> = state
            .load_balancers
            .iter()
            .map(|lb| LoadBalancerRow {
                id: lb.id.clone(),
                name: lb.name.clone(),
                tags: Self::format_tags(&lb.tags),
            })
            .collect();

        let mut output = String::new();
        let _ = writeln!(
            output,
            "{} {} load balancer(s)\n",
            "✓".green(),
            state.load_balancers.len()
        );
        let _ = writeln!(output, "{}", Table::new(rows));
        output
    }

    /// Formats the schema declaration for display.
    #[must_use]
    pub fn format_schema(&self, type_name: &str, schema: &DataSourceSchema) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(schema).unwrap_or_default(),
            OutputFormat::Text => {
                let mut output = String::new();
                let _ = writeln!(output, "{}", type_name.bold());
                let _ = writeln!(output, "  {}\n", schema.description);

                for attr in &schema.attributes {
                    let _ = writeln!(
                        output,
                        "  {:<16} {:?}/{:?} - {}",
                        attr.name, attr.kind, attr.mode, attr.description
                    );
                    for nested in &attr.nested {
                        let _ = writeln!(
                            output,
                            "    .{:<13} {:?} - {}",
                            nested.name, nested.kind, nested.description
                        );
                    }
                }
                for block in &schema.blocks {
                    let _ = writeln!(output, "\n  block {}", block.name.bold());
                    for attr in &block.attributes {
                        let _ = writeln!(output, "    {:<14} - {}", attr.name, attr.description);
                    }
                }
                output
            }
        }
    }

    /// Renders a tag map for the table column.
    fn format_tags(tags: &TagMap) -> String {
        match tags {
            TagMap::Null => String::from("-"),
            TagMap::Empty => String::from("{}"),
            TagMap::Populated(map) => {
                let mut pairs: Vec<String> =
                    map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                pairs.sort();
                pairs.join(", ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{LoadBalancerDetail, schema, type_name};
    use std::collections::HashMap;

    fn sample_state() -> DataSourceState {
        let mut tags = HashMap::new();
        tags.insert(String::from("env"), String::from("prod"));

        DataSourceState {
            id: None,
            name: Some(String::from("lb-test")),
            tags: None,
            load_balancers: vec![
                LoadBalancerDetail {
                    id: String::from("lb-123"),
                    name: String::from("lb-test"),
                    tags: TagMap::Populated(tags),
                },
                LoadBalancerDetail {
                    id: String::from("lb-456"),
                    name: String::from("bare"),
                    tags: TagMap::Null,
                },
            ],
        }
    }

    #[test]
    fn test_text_output_lists_all_records() {
        let formatter = OutputFormatter::new(OutputFormat::Text);
        let text = formatter.format_state(&sample_state());

        assert!(text.contains("lb-123"));
        assert!(text.contains("lb-456"));
        assert!(text.contains("env=prod"));
    }

    #[test]
    fn test_json_output_preserves_null_tags() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let json: serde_json::Value =
            serde_json::from_str(&formatter.format_state(&sample_state())).unwrap();

        assert_eq!(json["load_balancers"][1]["id"], "lb-456");
        assert!(json["load_balancers"][1]["tags"].is_null());
    }

    #[test]
    fn test_empty_result_message() {
        let formatter = OutputFormatter::new(OutputFormat::Text);
        let text = formatter.format_state(&DataSourceState::default());
        assert!(text.contains("No load balancers"));
    }

    #[test]
    fn test_schema_text_mentions_blocks() {
        let formatter = OutputFormatter::new(OutputFormat::Text);
        let text = formatter.format_schema(&type_name("lblens"), &schema());
        assert!(text.contains("lblens_clb_instances"));
        assert!(text.contains("client_config"));
    }
}
