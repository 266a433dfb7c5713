//! The load balancer inventory data source.
//!
//! This module wires one declarative read end to end:
//! validate input → resolve client → build request → fetch with retry →
//! map response → emit result. Each read is stateless and independent;
//! the shared default client is only read, never mutated — an override
//! block gets a freshly constructed client instead.

mod mapper;
mod request;
mod resolver;
mod schema;
mod types;

pub use mapper::{map_record, map_records};
pub use request::build_request;
pub use resolver::{Resolution, resolve_client, resolve_zone};
pub use schema::{
    AttributeKind, AttributeMode, AttributeSpec, BlockSpec, DataSourceSchema, TYPE_NAME_SUFFIX,
    schema, type_name,
};
pub use types::{DataSourceState, LoadBalancerDetail, TagMap};

use std::sync::Arc;
use tracing::{debug, info};

use crate::api::{ClientFactory, LoadBalancerApi, RetryPolicy, retry_with_backoff};
use crate::config::{ClientOverrides, ProviderSettings, QueryParams};
use crate::error::{LblensError, Result};

/// Read-only data source over the load balancer listing API.
#[derive(Clone)]
pub struct ClbInstancesDataSource {
    /// Shared default client, read-only during a read.
    client: Arc<dyn LoadBalancerApi>,
    /// Factory for override-scoped clients.
    factory: Arc<dyn ClientFactory>,
    /// Provider-wide client settings.
    defaults: ProviderSettings,
    /// Backoff policy for the listing call.
    retry_policy: RetryPolicy,
}

impl ClbInstancesDataSource {
    /// Creates a data source around an existing default client.
    #[must_use]
    pub fn new(
        client: Arc<dyn LoadBalancerApi>,
        factory: Arc<dyn ClientFactory>,
        defaults: ProviderSettings,
    ) -> Self {
        Self {
            client,
            factory,
            defaults,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Overrides the default backoff policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Performs one read.
    ///
    /// Produces the full result set or fails; no partial state is ever
    /// emitted. Override values never appear in the returned state.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid queries, unresolvable
    /// zones or client construction failures; an API error when the
    /// listing fails permanently or the retry budget runs out; a mapping
    /// error when a record violates the upstream contract.
    pub async fn read(
        &self,
        query: &QueryParams,
        overrides: &ClientOverrides,
    ) -> Result<DataSourceState> {
        query.validate()?;

        let resolution = resolve_client(self.client.as_ref(), &self.defaults, overrides)?;
        let client: Arc<dyn LoadBalancerApi> = if resolution.needs_new_client {
            info!("Constructing override client for region {}", resolution.region);
            self.factory.build(&resolution.credential, &resolution.region)?
        } else {
            Arc::clone(&self.client)
        };

        let zone_id = match overrides.zone.as_deref() {
            Some(zone) if !zone.is_empty() => Some(resolve_zone(client.as_ref(), zone).await?),
            _ => None,
        };

        let request = build_request(query, zone_id.as_deref());

        info!("Listing load balancers in {}", resolution.region);
        let response = retry_with_backoff(self.retry_policy, || {
            let client = Arc::clone(&client);
            let request = request.clone();
            async move { client.describe_load_balancers(&request).await }
        })
        .await
        .map_err(LblensError::Api)?;

        debug!(
            "Listing returned {} of {} load balancers",
            response.load_balancer_set.len(),
            response.total_count
        );

        let load_balancers = map_records(&response.load_balancer_set)?;

        Ok(DataSourceState {
            id: query.id.as_deref().map(str::to_string),
            name: query.name.as_deref().map(str::to_string),
            tags: query.tags.as_known().cloned(),
            load_balancers,
        })
    }
}

impl std::fmt::Debug for ClbInstancesDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClbInstancesDataSource")
            .field("region", &self.client.region())
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}
