//! Client resolution for a single read.
//!
//! Merges the per-read override block over the provider-wide defaults and
//! decides whether the read can reuse the shared default client or must
//! construct a fresh one. Zone names are resolved to internal zone
//! identifiers against the resolved client; an unknown zone is fatal for
//! the read and never retried.

use tracing::debug;

use crate::api::{Credential, LoadBalancerApi};
use crate::config::{ClientOverrides, ProviderSettings};
use crate::error::{ConfigError, Result};

/// Outcome of merging overrides over the provider defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// True when the shared default client cannot serve this read.
    pub needs_new_client: bool,
    /// Credential the read must use.
    pub credential: Credential,
    /// Region the read must run against.
    pub region: String,
}

/// Resolves the client configuration for one read.
///
/// `current` is the shared default client the data source holds; it is
/// only inspected, never mutated. A new client is signalled when the
/// resolved region or credential differs from what `current` was built
/// with. A secret key override always forces a rebuild, since the key a
/// client was built with is not observable.
///
/// # Errors
///
/// Returns a configuration error when no region or no complete
/// credential is available after merging.
pub fn resolve_client(
    current: &dyn LoadBalancerApi,
    defaults: &ProviderSettings,
    overrides: &ClientOverrides,
) -> Result<Resolution> {
    let region = overrides
        .region
        .as_deref()
        .map(str::to_string)
        .or_else(|| defaults.region.clone())
        .ok_or(ConfigError::MissingRegion)?;

    let secret_id = overrides
        .secret_id
        .as_deref()
        .map(str::to_string)
        .or_else(|| defaults.secret_id.clone())
        .ok_or_else(|| ConfigError::MissingCredential {
            name: String::from("secret_id"),
        })?;

    let secret_key = overrides
        .secret_key
        .as_deref()
        .map(str::to_string)
        .or_else(|| defaults.secret_key.clone())
        .ok_or_else(|| ConfigError::MissingCredential {
            name: String::from("secret_key"),
        })?;

    let needs_new_client = region != current.region()
        || secret_id != current.secret_id()
        || overrides.secret_key.is_known();

    if needs_new_client {
        debug!("Read overrides differ from default client, new client required");
    }

    Ok(Resolution {
        needs_new_client,
        credential: Credential::new(secret_id, secret_key),
        region,
    })
}

/// Resolves a zone name to its internal zone identifier.
///
/// # Errors
///
/// Returns `ConfigError::UnknownZone` if the zone is not known to the
/// client's region; API failures during the lookup surface as-is and are
/// not retried.
pub async fn resolve_zone(client: &dyn LoadBalancerApi, zone: &str) -> Result<String> {
    debug!("Resolving zone '{zone}' to zone id");

    let zones = client.describe_zones().await?;
    zones
        .into_iter()
        .find(|z| z.zone == zone)
        .map(|z| z.zone_id)
        .ok_or_else(|| {
            ConfigError::UnknownZone {
                zone: zone.to_string(),
            }
            .into()
        })
}
