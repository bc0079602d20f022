//! HTTP utilities for discovery API calls

use super::error::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let char_count = body.chars().count();
    let truncated = if char_count > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Pull the `error` string out of a JSON error body, if there is one
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// HTTP client wrapper for discovery API calls
#[derive(Clone)]
pub struct DiscoveryHttpClient {
    client: Client,
}

impl DiscoveryHttpClient {
    /// Create a new HTTP client with no request timeout
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(format!("tdisco/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and return the raw body of a 2xx response
    pub async fn get(&self, url: &str) -> Result<String, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(body)
    }

    /// Make a GET request and decode the 2xx body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.get(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Invalid JSON from {}: {}", url, sanitize_for_log(&body));
            ApiError::Decode(e)
        })
    }
}
