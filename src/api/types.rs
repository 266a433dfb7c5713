//! Vendor CLB API types and data structures.
//!
//! Wire shapes for the three collaborator calls this crate makes:
//! listing load balancers, resolving availability zones, and client
//! construction. The vendor speaks PascalCase JSON.

use serde::{Deserialize, Serialize};

/// Prefix marking a filter key as a tag-equality predicate.
pub const TAG_FILTER_PREFIX: &str = "tag:";

/// API credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Secret id.
    pub secret_id: String,
    /// Secret key.
    pub secret_key: String,
}

impl Credential {
    /// Creates a new credential.
    #[must_use]
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

// Keeps secrets out of logs and error text.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// A server-side key/value filter predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// Filter key (e.g. `tag:env`).
    pub name: String,
    /// Accepted values for the key.
    pub values: Vec<String>,
}

impl Filter {
    /// Creates a single-value filter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// Creates a tag-equality filter for the given key/value pair.
    #[must_use]
    pub fn tag(key: &str, value: impl Into<String>) -> Self {
        Self::new(format!("{TAG_FILTER_PREFIX}{key}"), value)
    }
}

/// Request body for the load balancer listing call.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLoadBalancersRequest {
    /// Identifier filter. The API accepts a list; this crate only ever
    /// supplies a single value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_ids: Option<Vec<String>>,
    /// Exact name filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    /// Tag filters, ANDed server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Master zone filter (resolved zone identifier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_zone: Option<String>,
}

impl DescribeLoadBalancersRequest {
    /// Creates an unfiltered listing request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Response body for the load balancer listing call.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLoadBalancersResponse {
    /// Load balancers matching the filters, in API order.
    #[serde(default)]
    pub load_balancer_set: Vec<LoadBalancerRecord>,
    /// Total matching count.
    #[serde(default)]
    pub total_count: u64,
}

/// A raw load balancer record as returned by the listing API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerRecord {
    /// Unique load balancer identifier.
    pub load_balancer_id: String,
    /// Display name.
    pub load_balancer_name: String,
    /// Tags attached to the load balancer. May be empty.
    #[serde(default)]
    pub tags: Vec<TagPair>,
}

/// A tag key/value pair on a load balancer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TagPair {
    /// Tag key.
    pub tag_key: String,
    /// Tag value.
    pub tag_value: String,
}

impl TagPair {
    /// Creates a new tag pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_key: key.into(),
            tag_value: value.into(),
        }
    }
}

/// Response body for the zone listing call.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    /// Known zones for the client's region.
    #[serde(default)]
    pub zone_set: Vec<ZoneInfo>,
}

/// An availability zone descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneInfo {
    /// Zone name as users write it (e.g. `ap-jakarta-1`).
    pub zone: String,
    /// Internal zone identifier the listing API filters on.
    pub zone_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filter_is_prefixed() {
        let filter = Filter::tag("env", "prod");
        assert_eq!(filter.name, "tag:env");
        assert_eq!(filter.values, vec![String::from("prod")]);
    }

    #[test]
    fn test_request_serializes_pascal_case_and_skips_unset() {
        let request = DescribeLoadBalancersRequest {
            load_balancer_name: Some(String::from("lb-test")),
            ..DescribeLoadBalancersRequest::new()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["LoadBalancerName"], "lb-test");
        assert!(json.get("LoadBalancerIds").is_none());
        assert!(json.get("Filters").is_none());
        assert!(json.get("MasterZone").is_none());
    }

    #[test]
    fn test_response_deserializes_records() {
        let body = r#"{
            "TotalCount": 1,
            "LoadBalancerSet": [
                {
                    "LoadBalancerId": "lb-123",
                    "LoadBalancerName": "lb-test",
                    "Tags": [{"TagKey": "env", "TagValue": "prod"}]
                }
            ]
        }"#;

        let response: DescribeLoadBalancersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.load_balancer_set.len(), 1);

        let record = &response.load_balancer_set[0];
        assert_eq!(record.load_balancer_id, "lb-123");
        assert_eq!(record.tags, vec![TagPair::new("env", "prod")]);
    }

    #[test]
    fn test_record_without_tags_defaults_empty() {
        let body = r#"{"LoadBalancerId": "lb-1", "LoadBalancerName": "a"}"#;
        let record: LoadBalancerRecord = serde_json::from_str(body).unwrap();
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_credential_debug_redacts_key() {
        let credential = Credential::new("AKIDexample", "topsecret");
        let text = format!("{credential:?}");
        assert!(text.contains("AKIDexample"));
        assert!(!text.contains("topsecret"));
    }
}
