//! Vendor CLB API integration module.
//!
//! This module provides the collaborator seam to the cloud vendor:
//! wire types, the API trait with its HTTP implementation, and the
//! backoff-bounded retrying fetcher.

mod client;
mod retry;
mod types;

pub use client::{ApiResult, ClientFactory, HttpClbClient, HttpClientFactory, LoadBalancerApi};
pub use retry::{RetryPolicy, retry_with_backoff};
pub use types::{
    Credential, DescribeLoadBalancersRequest, DescribeLoadBalancersResponse, Filter,
    LoadBalancerRecord, TAG_FILTER_PREFIX, TagPair, ZoneInfo,
};

#[cfg(test)]
pub use client::MockLoadBalancerApi;
