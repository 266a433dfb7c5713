//! Response-to-state mapping.
//!
//! Projects raw listing records into the declarative output shape.
//! Straight field copies only: no filtering, no sorting, no dedup.
//! A record with zero tags maps to a null tag field, never `{}`.

use std::collections::HashMap;

use crate::api::LoadBalancerRecord;
use crate::error::{MappingError, Result};

use super::types::{LoadBalancerDetail, TagMap};

/// Maps raw records into output details, preserving API order.
///
/// # Errors
///
/// Returns a mapping error if a record violates the upstream contract:
/// an empty id or name, or a duplicate tag key.
pub fn map_records(records: &[LoadBalancerRecord]) -> Result<Vec<LoadBalancerDetail>> {
    records.iter().map(map_record).collect()
}

/// Maps a single raw record.
///
/// # Errors
///
/// Returns a mapping error on an upstream contract violation.
pub fn map_record(record: &LoadBalancerRecord) -> Result<LoadBalancerDetail> {
    if record.load_balancer_id.is_empty() {
        return Err(MappingError::MissingField {
            field: String::from("LoadBalancerId"),
        }
        .into());
    }
    if record.load_balancer_name.is_empty() {
        return Err(MappingError::MissingField {
            field: String::from("LoadBalancerName"),
        }
        .into());
    }

    let tags = if record.tags.is_empty() {
        TagMap::Null
    } else {
        let mut map = HashMap::with_capacity(record.tags.len());
        for tag in &record.tags {
            if map
                .insert(tag.tag_key.clone(), tag.tag_value.clone())
                .is_some()
            {
                return Err(MappingError::DuplicateTagKey {
                    key: tag.tag_key.clone(),
                    lb_id: record.load_balancer_id.clone(),
                }
                .into());
            }
        }
        TagMap::Populated(map)
    };

    Ok(LoadBalancerDetail {
        id: record.load_balancer_id.clone(),
        name: record.load_balancer_name.clone(),
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TagPair;

    fn record(id: &str, name: &str, tags: Vec<TagPair>) -> LoadBalancerRecord {
        LoadBalancerRecord {
            load_balancer_id: id.to_string(),
            load_balancer_name: name.to_string(),
            tags,
        }
    }

    #[test]
    fn test_zero_tags_map_to_null() {
        let detail = map_record(&record("lb-1", "a", vec![])).unwrap();
        assert_eq!(detail.tags, TagMap::Null);
        assert_ne!(detail.tags, TagMap::Empty);
    }

    #[test]
    fn test_tags_copied_verbatim() {
        let detail = map_record(&record(
            "lb-123",
            "lb-test",
            vec![TagPair::new("env", "prod"), TagPair::new("team", "core")],
        ))
        .unwrap();

        assert_eq!(detail.id, "lb-123");
        assert_eq!(detail.name, "lb-test");
        assert_eq!(detail.tags.len(), 2);
        assert_eq!(detail.tags.get("env"), Some("prod"));
        assert_eq!(detail.tags.get("team"), Some("core"));
    }

    #[test]
    fn test_duplicate_tag_key_is_fatal() {
        let result = map_record(&record(
            "lb-1",
            "a",
            vec![TagPair::new("env", "prod"), TagPair::new("env", "dev")],
        ));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate tag key"));
        assert!(err.to_string().contains("lb-1"));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(map_record(&record("", "a", vec![])).is_err());
        assert!(map_record(&record("lb-1", "", vec![])).is_err());
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            record("lb-2", "b", vec![]),
            record("lb-1", "a", vec![]),
            record("lb-3", "c", vec![]),
        ];

        let details = map_records(&records).unwrap();
        let ids: Vec<&str> = details.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["lb-2", "lb-1", "lb-3"]);
    }

    #[test]
    fn test_one_bad_record_fails_whole_batch() {
        let records = vec![record("lb-1", "a", vec![]), record("", "b", vec![])];
        assert!(map_records(&records).is_err());
    }
}
