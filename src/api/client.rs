//! CLB API client implementation.
//!
//! This module defines the collaborator seam for the two vendor calls a
//! read needs (listing load balancers, listing zones) and a thin HTTP
//! implementation of it. The vendor wraps every response body in a
//! `Response` envelope that carries either the payload or a coded error.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::error::{ApiError, ConfigError, Result};

use super::types::{
    Credential, DescribeLoadBalancersRequest, DescribeLoadBalancersResponse, DescribeZonesResponse,
    ZoneInfo,
};

/// Default CLB API endpoint.
const DEFAULT_API_URL: &str = "https://clb.cloudapi.net";

/// Wire version of the CLB API this client speaks.
const API_VERSION: &str = "2018-03-17";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Result alias for raw API calls, classified by the retry loop.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Interface to the vendor load balancer API.
///
/// The data source only touches these two calls; everything else the
/// vendor offers is out of scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoadBalancerApi: Send + Sync {
    /// Lists load balancers matching the request filters, in API order.
    async fn describe_load_balancers(
        &self,
        request: &DescribeLoadBalancersRequest,
    ) -> ApiResult<DescribeLoadBalancersResponse>;

    /// Lists the availability zones of the client's region.
    async fn describe_zones(&self) -> ApiResult<Vec<ZoneInfo>>;

    /// The region this client was built for.
    fn region(&self) -> &str;

    /// The secret id this client was built with.
    fn secret_id(&self) -> &str;
}

/// Constructs API clients from a credential and region.
///
/// The data source holds a factory so a per-read override block can swap
/// in a fresh client without mutating the shared default.
pub trait ClientFactory: Send + Sync {
    /// Builds a client for the given credential and region.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client cannot be constructed.
    fn build(&self, credential: &Credential, region: &str) -> Result<Arc<dyn LoadBalancerApi>>;
}

/// HTTP implementation of [`LoadBalancerApi`].
#[derive(Debug, Clone)]
pub struct HttpClbClient {
    /// HTTP client.
    client: Client,
    /// API credential.
    credential: Credential,
    /// Region requests are issued against.
    region: String,
    /// API endpoint.
    base_url: String,
}

impl HttpClbClient {
    /// Creates a new CLB API client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credential is incomplete or
    /// the HTTP client cannot be created.
    pub fn new(credential: Credential, region: &str) -> Result<Self> {
        Self::with_base_url(credential, region, DEFAULT_API_URL)
    }

    /// Creates a client against a non-default endpoint.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credential is incomplete or
    /// the HTTP client cannot be created.
    pub fn with_base_url(credential: Credential, region: &str, base_url: &str) -> Result<Self> {
        if credential.secret_id.is_empty() {
            return Err(ConfigError::MissingCredential {
                name: String::from("secret_id"),
            }
            .into());
        }
        if credential.secret_key.is_empty() {
            return Err(ConfigError::MissingCredential {
                name: String::from("secret_key"),
            }
            .into());
        }
        if region.is_empty() {
            return Err(ConfigError::MissingRegion.into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                ConfigError::client_construction(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            credential,
            region: region.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Executes a single API action.
    async fn execute<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        action: &str,
        body: &B,
    ) -> ApiResult<T> {
        trace!("Executing CLB API action: {action}");

        let response = self
            .client
            .post(&self.base_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!(
                    "Bearer {}:{}",
                    self.credential.secret_id, self.credential.secret_key
                ),
            )
            .header("X-LB-Action", action)
            .header("X-LB-Version", API_VERSION)
            .header("X-LB-Region", &self.region)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response body: {e}")))?;

        // Coded errors can ride on any status, so the envelope is checked
        // before the status line.
        if let Ok(envelope) = serde_json::from_str::<Envelope>(&text) {
            if let Some(error) = envelope.response.error {
                debug!("CLB API action {action} failed with code {}", error.code);
                return Err(ApiError::Service {
                    code: error.code,
                    message: error.message,
                    request_id: envelope.response.request_id,
                });
            }
            if status.is_success() {
                return serde_json::from_value(envelope.response.payload).map_err(|e| {
                    ApiError::invalid_response(format!("Failed to decode {action} response: {e}"))
                });
            }
        }

        if status.is_success() {
            Err(ApiError::invalid_response(format!(
                "Malformed {action} response envelope"
            )))
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl LoadBalancerApi for HttpClbClient {
    async fn describe_load_balancers(
        &self,
        request: &DescribeLoadBalancersRequest,
    ) -> ApiResult<DescribeLoadBalancersResponse> {
        self.execute("DescribeLoadBalancers", request).await
    }

    async fn describe_zones(&self) -> ApiResult<Vec<ZoneInfo>> {
        let response: DescribeZonesResponse =
            self.execute("DescribeZones", &serde_json::json!({})).await?;
        Ok(response.zone_set)
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn secret_id(&self) -> &str {
        &self.credential.secret_id
    }
}

/// Factory producing [`HttpClbClient`] instances.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    /// Endpoint override, used by tests.
    base_url: Option<String>,
}

impl HttpClientFactory {
    /// Creates a factory targeting the default endpoint.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_url: None }
    }

    /// Creates a factory targeting a non-default endpoint.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }
}

impl ClientFactory for HttpClientFactory {
    fn build(&self, credential: &Credential, region: &str) -> Result<Arc<dyn LoadBalancerApi>> {
        let client = match &self.base_url {
            Some(url) => HttpClbClient::with_base_url(credential.clone(), region, url)?,
            None => HttpClbClient::new(credential.clone(), region)?,
        };
        Ok(Arc::new(client))
    }
}

/// Vendor response envelope.
#[derive(Debug, serde::Deserialize)]
struct Envelope {
    #[serde(rename = "Response")]
    response: EnvelopeBody,
}

/// Inner envelope body: either a coded error or the action payload.
#[derive(Debug, serde::Deserialize)]
struct EnvelopeBody {
    #[serde(rename = "Error")]
    error: Option<EnvelopeError>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Value,
}

/// Coded error inside the envelope.
#[derive(Debug, serde::Deserialize)]
struct EnvelopeError {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClass;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> HttpClbClient {
        HttpClbClient::with_base_url(
            Credential::new("AKIDexample", "topsecret"),
            "ap-jakarta",
            &server.uri(),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_requires_credential_and_region() {
        assert!(HttpClbClient::new(Credential::new("", "key"), "ap-jakarta").is_err());
        assert!(HttpClbClient::new(Credential::new("id", ""), "ap-jakarta").is_err());
        assert!(HttpClbClient::new(Credential::new("id", "key"), "").is_err());
        assert!(HttpClbClient::new(Credential::new("id", "key"), "ap-jakarta").is_ok());
    }

    #[tokio::test]
    async fn test_describe_load_balancers_decodes_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("X-LB-Action", "DescribeLoadBalancers"))
            .and(header("X-LB-Region", "ap-jakarta"))
            .and(body_partial_json(serde_json::json!({
                "LoadBalancerName": "lb-test"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": {
                    "RequestId": "req-1",
                    "TotalCount": 1,
                    "LoadBalancerSet": [{
                        "LoadBalancerId": "lb-123",
                        "LoadBalancerName": "lb-test",
                        "Tags": [{"TagKey": "env", "TagValue": "prod"}]
                    }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = DescribeLoadBalancersRequest {
            load_balancer_name: Some(String::from("lb-test")),
            ..DescribeLoadBalancersRequest::new()
        };

        let response = client.describe_load_balancers(&request).await.unwrap();
        assert_eq!(response.load_balancer_set.len(), 1);
        assert_eq!(response.load_balancer_set[0].load_balancer_id, "lb-123");
    }

    #[tokio::test]
    async fn test_coded_error_becomes_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": {
                    "RequestId": "req-2",
                    "Error": {"Code": "InvalidParameter", "Message": "bad filter"}
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .describe_load_balancers(&DescribeLoadBalancersRequest::new())
            .await
            .unwrap_err();

        match &err {
            ApiError::Service { code, request_id, .. } => {
                assert_eq!(code, "InvalidParameter");
                assert_eq!(request_id.as_deref(), Some("req-2"));
            }
            other => panic!("expected service error, got {other:?}"),
        }
        assert_eq!(err.classify(), ErrorClass::Permanent);
    }

    #[tokio::test]
    async fn test_http_failure_without_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.describe_zones().await.unwrap_err();

        match err {
            ApiError::Http { status, .. } => assert_eq!(status, 502),
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_describe_zones_decodes_zone_set() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("X-LB-Action", "DescribeZones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": {
                    "RequestId": "req-3",
                    "ZoneSet": [
                        {"Zone": "ap-jakarta-1", "ZoneId": "900001"},
                        {"Zone": "ap-jakarta-2", "ZoneId": "900002"}
                    ]
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let zones = client.describe_zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].zone_id, "900002");
    }
}
