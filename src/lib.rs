// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # lblens
//!
//! A declarative, read-only query client for cloud load balancer inventories.
//!
//! ## Overview
//!
//! lblens projects a cloud vendor's load balancer listing API into a
//! declarative result shape, the way an infrastructure-as-code data source
//! does:
//!
//! - Describe *what* to match (id, name, tags) rather than how to fetch it
//! - Get back a stable, ordered result set with verbatim tag maps
//! - Lean on bounded exponential backoff for transient API wobble
//!
//! ## Architecture
//!
//! A read is one linear pass with no state carried between invocations:
//!
//! 1. **Resolve**: merge per-read client overrides over provider defaults
//! 2. **Build**: translate query fields into server-side filters
//! 3. **Fetch**: call the listing API under a 30-second retry budget
//! 4. **Map**: project raw records into the declarative output shape
//!
//! ## Modules
//!
//! - [`config`]: query parameters, overrides, and provider settings
//! - [`api`]: vendor API types, client seam, and retrying fetcher
//! - [`datasource`]: request building, response mapping, and the read
//! - [`cli`]: command-line interface
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lblens::api::{Credential, HttpClbClient, HttpClientFactory};
//! use lblens::config::{ClientOverrides, ProviderSettings, QueryParams};
//! use lblens::datasource::ClbInstancesDataSource;
//!
//! # async fn example() -> lblens::error::Result<()> {
//! let credential = Credential::new("AKIDexample", "secret");
//! let client = Arc::new(HttpClbClient::new(credential, "ap-jakarta")?);
//! let defaults = ProviderSettings {
//!     region: Some("ap-jakarta".into()),
//!     secret_id: Some("AKIDexample".into()),
//!     secret_key: Some("secret".into()),
//! };
//!
//! let source =
//!     ClbInstancesDataSource::new(client, Arc::new(HttpClientFactory::new()), defaults);
//! let query = QueryParams::new().with_name("lb-test");
//! let state = source.read(&query, &ClientOverrides::default()).await?;
//!
//! for lb in &state.load_balancers {
//!     println!("{} {}", lb.id, lb.name);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod api;
pub mod cli;
pub mod config;
pub mod datasource;
pub mod error;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{
    Credential, HttpClbClient, HttpClientFactory, LoadBalancerApi, RetryPolicy,
    retry_with_backoff,
};
pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{ClientOverrides, ConfigValue, ProviderSettings, QueryParams};
pub use datasource::{ClbInstancesDataSource, DataSourceState, LoadBalancerDetail, TagMap};
pub use error::{LblensError, Result};
