//! Schema and metadata declaration for the data source.
//!
//! Pure declaration of the external name and attribute/block shapes a
//! host framework consumes. No behavior lives here.

use serde::Serialize;

/// Suffix of the external type name; the host prepends its provider name.
pub const TYPE_NAME_SUFFIX: &str = "clb_instances";

/// Returns the external type name for a given provider name.
#[must_use]
pub fn type_name(provider: &str) -> String {
    format!("{provider}_{TYPE_NAME_SUFFIX}")
}

/// How an attribute participates in configuration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeMode {
    /// Supplied by the user, may be omitted.
    Optional,
    /// Produced by the read, never supplied.
    Computed,
}

/// Value shape of an attribute.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// A single string.
    String,
    /// A string-to-string mapping.
    StringMap,
    /// A list of nested objects.
    ObjectList,
}

/// A declared attribute.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Value shape.
    pub kind: AttributeKind,
    /// Configuration mode.
    pub mode: AttributeMode,
    /// Nested attributes, for object lists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<AttributeSpec>,
}

/// A declared configuration block.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlockSpec {
    /// Block name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Attributes inside the block.
    pub attributes: Vec<AttributeSpec>,
}

/// The full data source schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataSourceSchema {
    /// Schema description.
    pub description: &'static str,
    /// Top-level attributes.
    pub attributes: Vec<AttributeSpec>,
    /// Configuration blocks.
    pub blocks: Vec<BlockSpec>,
}

impl AttributeSpec {
    const fn leaf(
        name: &'static str,
        description: &'static str,
        kind: AttributeKind,
        mode: AttributeMode,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            mode,
            nested: Vec::new(),
        }
    }
}

/// Declares the schema of the load balancer data source.
#[must_use]
pub fn schema() -> DataSourceSchema {
    DataSourceSchema {
        description: "Queries the cloud load balancers visible to the configured account.",
        attributes: vec![
            AttributeSpec::leaf(
                "id",
                "ID of the load balancer to query",
                AttributeKind::String,
                AttributeMode::Optional,
            ),
            AttributeSpec::leaf(
                "name",
                "Name of the load balancers to query",
                AttributeKind::String,
                AttributeMode::Optional,
            ),
            AttributeSpec::leaf(
                "tags",
                "Tags of the load balancers to query",
                AttributeKind::StringMap,
                AttributeMode::Optional,
            ),
            AttributeSpec {
                name: "load_balancers",
                description: "Result list of load balancers queried",
                kind: AttributeKind::ObjectList,
                mode: AttributeMode::Computed,
                nested: vec![
                    AttributeSpec::leaf(
                        "id",
                        "The ID of the load balancer",
                        AttributeKind::String,
                        AttributeMode::Computed,
                    ),
                    AttributeSpec::leaf(
                        "name",
                        "The name of the load balancer",
                        AttributeKind::String,
                        AttributeMode::Computed,
                    ),
                    AttributeSpec::leaf(
                        "tags",
                        "The tags of the load balancer",
                        AttributeKind::StringMap,
                        AttributeMode::Computed,
                    ),
                ],
            },
        ],
        blocks: vec![BlockSpec {
            name: "client_config",
            description: "Per-read client overrides. Never recorded in emitted state.",
            attributes: vec![
                AttributeSpec::leaf(
                    "region",
                    "Region override; defaults to the provider region",
                    AttributeKind::String,
                    AttributeMode::Optional,
                ),
                AttributeSpec::leaf(
                    "zone",
                    "Zone to restrict the listing to",
                    AttributeKind::String,
                    AttributeMode::Optional,
                ),
                AttributeSpec::leaf(
                    "secret_id",
                    "Secret id override with permission to list load balancers",
                    AttributeKind::String,
                    AttributeMode::Optional,
                ),
                AttributeSpec::leaf(
                    "secret_key",
                    "Secret key override paired with secret_id",
                    AttributeKind::String,
                    AttributeMode::Optional,
                ),
            ],
        }],
    }
}
