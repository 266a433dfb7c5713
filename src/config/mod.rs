//! Configuration module for the lblens query system.
//!
//! This module handles everything read from configuration before a query
//! runs:
//! - Tri-state configuration values (null / unknown / known)
//! - Query parameters and per-read client overrides
//! - Provider-wide settings loaded from YAML and the environment

mod query;
mod value;

pub use query::{
    ClientOverrides, ENV_REGION, ENV_SECRET_ID, ENV_SECRET_KEY, ProviderSettings, QueryParams,
};
pub use value::ConfigValue;
