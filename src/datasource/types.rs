//! Declarative output shapes for the load balancer data source.
//!
//! The tag field is deliberately tri-state: a record the API returned
//! with zero tags carries a null map, which is not the same thing as a
//! present-but-empty map. Collapsing the two would make "not fetched"
//! and "empty" indistinguishable downstream.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Tag mapping on an emitted record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagMap {
    /// The record carries no tag map at all (serialized as `null`).
    #[default]
    Null,
    /// A present but empty tag map (serialized as `{}`).
    Empty,
    /// A populated tag map.
    Populated(HashMap<String, String>),
}

impl TagMap {
    /// Returns true if the map is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up a tag value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Populated(map) => map.get(key).map(String::as_str),
            Self::Null | Self::Empty => None,
        }
    }

    /// Number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Populated(map) => map.len(),
            Self::Null | Self::Empty => 0,
        }
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for TagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Empty => HashMap::<String, String>::new().serialize(serializer),
            Self::Populated(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TagMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<HashMap<String, String>>::deserialize(deserializer)?;
        Ok(match map {
            None => Self::Null,
            Some(map) if map.is_empty() => Self::Empty,
            Some(map) => Self::Populated(map),
        })
    }
}

/// One emitted load balancer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerDetail {
    /// Load balancer identifier. Never empty.
    pub id: String,
    /// Display name. Never empty.
    pub name: String,
    /// Tags, copied verbatim from the API; null when the record had none.
    pub tags: TagMap,
}

/// The full result of one data source read.
///
/// Mirrors API response order. Either the whole set is produced or the
/// read fails; there is no partial state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DataSourceState {
    /// Identifier filter echoed from the query.
    pub id: Option<String>,
    /// Name filter echoed from the query.
    pub name: Option<String>,
    /// Tag filters echoed from the query.
    pub tags: Option<HashMap<String, String>>,
    /// Load balancers matching the query, in API order.
    pub load_balancers: Vec<LoadBalancerDetail>,
}
