//! Query parameters, client overrides, and provider settings.
//!
//! A read is described by an immutable [`QueryParams`] plus an optional
//! [`ClientOverrides`] block. Provider-wide defaults come from
//! [`ProviderSettings`], loaded from a YAML file with environment
//! variable overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ConfigError, LblensError, Result};

use super::value::ConfigValue;

/// Environment variable holding the secret id.
pub const ENV_SECRET_ID: &str = "LBLENS_SECRET_ID";

/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "LBLENS_SECRET_KEY";

/// Environment variable holding the default region.
pub const ENV_REGION: &str = "LBLENS_REGION";

/// Filter parameters for a load balancer inventory read.
///
/// Immutable once read from configuration. All present fields are ANDed
/// into a single listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Exact load balancer identifier to match. At most one.
    pub id: ConfigValue<String>,
    /// Exact load balancer name to match.
    pub name: ConfigValue<String>,
    /// Tag equality filters; every key/value pair must match.
    pub tags: ConfigValue<HashMap<String, String>>,
}

impl QueryParams {
    /// Creates an empty query matching every load balancer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier filter.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ConfigValue::Known(id.into());
        self
    }

    /// Sets the name filter.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = ConfigValue::Known(name.into());
        self
    }

    /// Sets the tag filters.
    #[must_use]
    pub fn with_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.tags = ConfigValue::Known(tags);
        self
    }

    /// Validates the query.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a known field carries an empty value.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref() == Some("") {
            return Err(ConfigError::validation("id must not be empty", "id").into());
        }
        if self.name.as_deref() == Some("") {
            return Err(ConfigError::validation("name must not be empty", "name").into());
        }
        if let Some(tags) = self.tags.as_known() {
            if tags.keys().any(String::is_empty) {
                return Err(ConfigError::validation("tag keys must not be empty", "tags").into());
            }
        }
        Ok(())
    }
}

/// Per-read client override block.
///
/// Overrides the provider-wide client for a single read. Call-scoped
/// only: never persisted to emitted state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOverrides {
    /// Region override.
    pub region: ConfigValue<String>,
    /// Zone to restrict the listing to (resolved to a zone id).
    pub zone: ConfigValue<String>,
    /// Secret id override.
    pub secret_id: ConfigValue<String>,
    /// Secret key override.
    pub secret_key: ConfigValue<String>,
}

impl ClientOverrides {
    /// Returns true if no override field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.region.is_null()
            && self.zone.is_null()
            && self.secret_id.is_null()
            && self.secret_key.is_null()
    }
}

/// Provider-wide client settings.
///
/// The defaults every read starts from; an override block may shadow any
/// of them for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProviderSettings {
    /// Default region.
    #[serde(default)]
    pub region: Option<String>,
    /// Secret id with permission to list load balancers.
    #[serde(default)]
    pub secret_id: Option<String>,
    /// Secret key paired with the secret id.
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl ProviderSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading provider settings from: {}", path.display());

        if !path.exists() {
            return Err(LblensError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            LblensError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        Self::parse_yaml(&content, Some(path))
    }

    /// Parses settings from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(content: &str, source: Option<&Path>) -> Result<Self> {
        debug!("Parsing YAML provider settings");

        let settings: Self = serde_yaml::from_str(content).map_err(|e| {
            LblensError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location: source.map(|p| p.display().to_string()),
            })
        })?;

        Ok(settings)
    }

    /// Fills unset fields from the environment.
    ///
    /// `LBLENS_REGION`, `LBLENS_SECRET_ID` and `LBLENS_SECRET_KEY` are
    /// consulted only where the file left a field empty.
    #[must_use]
    pub fn with_env(mut self) -> Self {
        if self.region.is_none() {
            if let Ok(region) = std::env::var(ENV_REGION) {
                debug!("Taking region from environment");
                self.region = Some(region);
            }
        }
        if self.secret_id.is_none() {
            if let Ok(secret_id) = std::env::var(ENV_SECRET_ID) {
                self.secret_id = Some(secret_id);
            }
        }
        if self.secret_key.is_none() {
            if let Ok(secret_key) = std::env::var(ENV_SECRET_KEY) {
                self.secret_key = Some(secret_key);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_valid() {
        assert!(QueryParams::new().validate().is_ok());
    }

    #[test]
    fn test_builder_sets_known_values() {
        let mut tags = HashMap::new();
        tags.insert(String::from("env"), String::from("prod"));

        let query = QueryParams::new()
            .with_id("lb-123")
            .with_name("lb-test")
            .with_tags(tags);

        assert_eq!(query.id.as_deref(), Some("lb-123"));
        assert_eq!(query.name.as_deref(), Some("lb-test"));
        assert!(query.tags.is_known());
    }

    #[test]
    fn test_empty_id_rejected() {
        let query = QueryParams::new().with_id("");
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_empty_tag_key_rejected() {
        let mut tags = HashMap::new();
        tags.insert(String::new(), String::from("prod"));
        let query = QueryParams::new().with_tags(tags);
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_overrides_is_empty() {
        assert!(ClientOverrides::default().is_empty());

        let overrides = ClientOverrides {
            zone: ConfigValue::Known(String::from("ap-jakarta-1")),
            ..ClientOverrides::default()
        };
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_settings_parse_yaml() {
        let yaml = "region: ap-jakarta\nsecret_id: AKIDexample\nsecret_key: topsecret\n";
        let settings = ProviderSettings::parse_yaml(yaml, None).unwrap();
        assert_eq!(settings.region.as_deref(), Some("ap-jakarta"));
        assert_eq!(settings.secret_id.as_deref(), Some("AKIDexample"));
    }

    #[test]
    fn test_settings_parse_partial_yaml() {
        let settings = ProviderSettings::parse_yaml("region: ap-jakarta\n", None).unwrap();
        assert_eq!(settings.region.as_deref(), Some("ap-jakarta"));
        assert!(settings.secret_id.is_none());
        assert!(settings.secret_key.is_none());
    }

    #[test]
    fn test_settings_parse_invalid_yaml() {
        assert!(ProviderSettings::parse_yaml("region: [unclosed", None).is_err());
    }
}
