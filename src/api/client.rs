//! Discovery Client
//!
//! Main client for the service discovery backend, combining endpoint URL
//! construction with the HTTP wrapper.

use super::error::ApiError;
use super::http::DiscoveryHttpClient;
use crate::resource::{RegionsResponse, ServicesResponse};
use anyhow::{Context, Result};

/// Shown when the startup health probe fails for any reason
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Backend service is not available. Please ensure the Flask server is running.";

/// Shown when a services fetch fails without a backend-supplied message
pub const SERVICES_FETCH_FAILED_MESSAGE: &str = "Failed to fetch services";

/// Main discovery API client
#[derive(Clone)]
pub struct DiscoveryClient {
    pub http: DiscoveryHttpClient,
    base_url: String,
}

impl DiscoveryClient {
    /// Create a new client for the given base URL (e.g. `http://localhost:5000/api`)
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = url::Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "Unsupported API URL scheme '{}', expected http or https",
                parsed.scheme()
            ));
        }

        let http = DiscoveryHttpClient::new().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Endpoint URLs
    // =========================================================================

    /// Build an endpoint URL below the base
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn health_url(&self) -> String {
        self.endpoint_url("health")
    }

    pub fn regions_url(&self) -> String {
        self.endpoint_url("regions")
    }

    pub fn services_url(&self) -> String {
        self.endpoint_url("services")
    }

    // =========================================================================
    // Calls
    // =========================================================================

    /// Succeeds on any 2xx response; the body is ignored
    pub async fn check_health(&self) -> Result<(), ApiError> {
        self.http.get(&self.health_url()).await.map(|_| ())
    }

    /// Fetch the selectable region identifiers
    pub async fn list_regions(&self) -> Result<RegionsResponse, ApiError> {
        self.http.get_json(&self.regions_url()).await
    }

    /// Fetch discovered resources and the per-service summary
    pub async fn list_services(&self) -> Result<ServicesResponse, ApiError> {
        self.http.get_json(&self.services_url()).await
    }
}

/// Format a services fetch error for display
/// Uses the backend's own message when it sent one, else a generic message
pub fn format_services_error(error: &ApiError) -> String {
    match error.backend_message() {
        Some(message) => message.to_string(),
        None => SERVICES_FETCH_FAILED_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = DiscoveryClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.health_url(), "http://localhost:5000/api/health");
        assert_eq!(client.regions_url(), "http://localhost:5000/api/regions");
        assert_eq!(client.services_url(), "http://localhost:5000/api/services");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = DiscoveryClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.health_url(), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(DiscoveryClient::new("not a url").is_err());
        assert!(DiscoveryClient::new("ftp://example.com/api").is_err());
    }

    #[test]
    fn test_format_services_error_uses_backend_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some("throttled".to_string()),
        };
        assert_eq!(format_services_error(&err), "throttled");
    }

    #[test]
    fn test_format_services_error_generic_fallback() {
        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(format_services_error(&err), SERVICES_FETCH_FAILED_MESSAGE);

        let err = ApiError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(format_services_error(&err), SERVICES_FETCH_FAILED_MESSAGE);
    }
}
