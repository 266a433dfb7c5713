//! Error types for the lblens query system.
//!
//! This module provides the error hierarchy for a load balancer inventory
//! read: configuration and client resolution, vendor API calls, and
//! response-to-state mapping. It also hosts the explicit retryability
//! classification that drives the backoff loop.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lblens operations.
#[derive(Debug, Error)]
pub enum LblensError {
    /// Configuration and client resolution errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Vendor CLB API errors.
    #[error("CLB API error: {0}")]
    Api(#[from] ApiError),

    /// Response-to-state mapping errors.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration and client resolution errors.
///
/// These are fatal for the read that raised them and are never retried:
/// they indicate caller or environment misconfiguration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file was not found.
    #[error("Settings file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The settings file could not be parsed.
    #[error("Failed to parse settings: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Query validation failed.
    #[error("Query validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },

    /// A required credential is missing.
    #[error("Missing credential: {name}")]
    MissingCredential {
        /// Name of the missing credential field.
        name: String,
    },

    /// No region configured at provider level or in the override block.
    #[error("No region configured")]
    MissingRegion,

    /// The requested zone could not be resolved to a zone identifier.
    #[error("Unknown zone: {zone}")]
    UnknownZone {
        /// The zone name that failed to resolve.
        zone: String,
    },

    /// The API client could not be constructed.
    #[error("Failed to construct CLB API client: {message}")]
    ClientConstruction {
        /// Description of the construction failure.
        message: String,
    },
}

/// Vendor CLB API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The vendor API rejected or failed the request with a coded error.
    #[error("CLB API returned error {code}: {message}")]
    Service {
        /// Vendor error code (e.g. `InvalidParameter`, `InternalError`).
        code: String,
        /// Error message from the API.
        message: String,
        /// Request identifier, when the API returned one.
        request_id: Option<String>,
    },

    /// The request never produced a vendor response (DNS, TLS, timeouts).
    #[error("Network error communicating with CLB API: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// The API responded with a non-success HTTP status and no coded body.
    #[error("CLB API request failed: HTTP {status} - {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response from CLB API: {message}")]
    InvalidResponse {
        /// Description of the decoding failure.
        message: String,
    },
}

/// Response-to-state mapping errors.
///
/// These indicate a contract violation by the upstream API and are fatal.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A record was returned with an empty required field.
    #[error("Record is missing required field '{field}'")]
    MissingField {
        /// Name of the empty field.
        field: String,
    },

    /// Two tags on the same record carried the same key.
    #[error("Duplicate tag key '{key}' on load balancer {lb_id}")]
    DuplicateTagKey {
        /// The duplicated tag key.
        key: String,
        /// Identifier of the offending record.
        lb_id: String,
    },
}

/// Retryability classification of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transient service condition; retry under backoff.
    Retryable,
    /// Definitive rejection; surface immediately, no retry.
    Permanent,
    /// Not attributable to the service (transport, decoding); retried by default.
    Unknown,
}

/// Vendor error codes considered transient.
///
/// Codes outside this table are permanent: retrying an
/// `InvalidParameter` or an auth failure only burns the backoff budget.
pub const RETRYABLE_ERROR_CODES: &[&str] = &[
    "InternalError",
    "ServiceUnavailable",
    "RequestLimitExceeded",
    "ResourceUnavailable",
    "ClientNetworkError",
];

impl ApiError {
    /// Classifies this error for the retry loop.
    ///
    /// Coded service errors are looked up in [`RETRYABLE_ERROR_CODES`];
    /// everything that never produced a coded vendor response classifies
    /// as [`ErrorClass::Unknown`].
    #[must_use]
    pub fn classify(&self) -> ErrorClass {
        match self {
            Self::Service { code, .. } => {
                if RETRYABLE_ERROR_CODES.contains(&code.as_str()) {
                    ErrorClass::Retryable
                } else {
                    ErrorClass::Permanent
                }
            }
            Self::Network { .. } | Self::Http { .. } | Self::InvalidResponse { .. } => {
                ErrorClass::Unknown
            }
        }
    }

    /// Creates a coded service error.
    #[must_use]
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a validation error without a specific field.
    #[must_use]
    pub fn validation_general(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a client construction error.
    #[must_use]
    pub fn client_construction(message: impl Into<String>) -> Self {
        Self::ClientConstruction {
            message: message.into(),
        }
    }
}

impl LblensError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type alias for lblens operations.
pub type Result<T> = std::result::Result<T, LblensError>;
