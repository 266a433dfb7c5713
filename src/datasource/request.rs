//! Filter request construction.
//!
//! Translates query parameters into the vendor listing request. The rule
//! is strict: a filter is attached iff the corresponding query field is
//! known, and nothing else ever is. All attached filters ride in one
//! request and AND together server-side.

use tracing::debug;

use crate::api::{DescribeLoadBalancersRequest, Filter};
use crate::config::QueryParams;

/// Builds the listing request for a query.
///
/// `zone_id` is the already-resolved master zone identifier, when the
/// read carries a zone override.
#[must_use]
pub fn build_request(query: &QueryParams, zone_id: Option<&str>) -> DescribeLoadBalancersRequest {
    let mut request = DescribeLoadBalancersRequest::new();

    // Unknown names are plan-time placeholders, not match-nothing filters.
    if let Some(name) = query.name.as_deref() {
        request.load_balancer_name = Some(name.to_string());
    }

    // The API takes a list; only a single identifier is ever supplied.
    if let Some(id) = query.id.as_deref() {
        request.load_balancer_ids = Some(vec![id.to_string()]);
    }

    if let Some(tags) = query.tags.as_known() {
        let filters: Vec<Filter> = tags
            .iter()
            .map(|(key, value)| Filter::tag(key, value.clone()))
            .collect();
        request.filters = Some(filters);
    }

    if let Some(zone_id) = zone_id {
        request.master_zone = Some(zone_id.to_string());
    }

    debug!(
        "Built listing request: name={:?} ids={:?} tag_filters={} zone={:?}",
        request.load_balancer_name,
        request.load_balancer_ids,
        request.filters.as_ref().map_or(0, Vec::len),
        request.master_zone
    );

    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValue;
    use std::collections::HashMap;

    #[test]
    fn test_empty_query_builds_empty_request() {
        let request = build_request(&QueryParams::new(), None);
        assert_eq!(request, DescribeLoadBalancersRequest::new());
    }

    #[test]
    fn test_name_filter_only_when_known() {
        let query = QueryParams::new().with_name("lb-test");
        let request = build_request(&query, None);
        assert_eq!(request.load_balancer_name.as_deref(), Some("lb-test"));

        let unknown = QueryParams {
            name: ConfigValue::Unknown,
            ..QueryParams::new()
        };
        let request = build_request(&unknown, None);
        assert!(request.load_balancer_name.is_none());
    }

    #[test]
    fn test_id_wrapped_into_single_element_list() {
        let query = QueryParams::new().with_id("lb-123");
        let request = build_request(&query, None);
        assert_eq!(
            request.load_balancer_ids,
            Some(vec![String::from("lb-123")])
        );
    }

    #[test]
    fn test_tags_become_prefixed_filters() {
        let mut tags = HashMap::new();
        tags.insert(String::from("env"), String::from("prod"));
        tags.insert(String::from("team"), String::from("core"));

        let query = QueryParams::new().with_tags(tags);
        let request = build_request(&query, None);

        let mut filters = request.filters.unwrap();
        filters.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].name, "tag:env");
        assert_eq!(filters[0].values, vec![String::from("prod")]);
        assert_eq!(filters[1].name, "tag:team");
    }

    #[test]
    fn test_zone_id_becomes_master_zone() {
        let request = build_request(&QueryParams::new(), Some("900001"));
        assert_eq!(request.master_zone.as_deref(), Some("900001"));
    }

    #[test]
    fn test_all_filters_combine_in_one_request() {
        let mut tags = HashMap::new();
        tags.insert(String::from("env"), String::from("prod"));

        let query = QueryParams::new()
            .with_id("lb-123")
            .with_name("lb-test")
            .with_tags(tags);
        let request = build_request(&query, Some("900001"));

        assert!(request.load_balancer_ids.is_some());
        assert!(request.load_balancer_name.is_some());
        assert!(request.filters.is_some());
        assert!(request.master_zone.is_some());
    }

    #[test]
    fn test_no_extra_filters_for_null_fields() {
        let query = QueryParams::new().with_name("lb-test");
        let request = build_request(&query, None);

        assert!(request.load_balancer_ids.is_none());
        assert!(request.filters.is_none());
        assert!(request.master_zone.is_none());
    }
}
