//! HTTP client for the outage API.
//!
//! Wraps a [`reqwest::Client`] with:
//! - `x-api-key` authentication on every request
//! - automatic retries for HTTP 500 responses
//! - JSON decoding of success and error bodies

use outagesync_core::ErrorResponse;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::retry::{is_retriable_status, RetryPolicy};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// User agent for all outage API requests.
const USER_AGENT: &str = concat!("outagesync/", env!("CARGO_PKG_VERSION"));

/// HTTP client with API-key authentication and retry support.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    config: ApiConfig,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Creates a client with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built,
    /// which indicates a broken TLS configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Self::with_retry(config, RetryPolicy::default())
    }

    /// Creates a client with a custom retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_retry(config: ApiConfig, retry: RetryPolicy) -> Result<Self, ApiError> {
        let inner = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner,
            config,
            retry,
        })
    }

    /// Performs a GET request and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status after retries, or the body cannot be decoded.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        decode_json(response).await
    }

    /// Performs a POST request with a JSON body, discarding the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status after retries.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// Joins a request path onto the configured base URL.
    ///
    /// Paths are appended verbatim so a base URL carrying a path prefix
    /// (for example `https://host/v1`) keeps that prefix.
    fn request_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Sends a request, retrying on HTTP 500 per the retry policy.
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path);
        let mut retries = 0;

        loop {
            debug!(method = %method, url = %url, attempt = retries + 1, "Sending API request");

            let mut request = self
                .inner
                .request(method.clone(), &url)
                .header(API_KEY_HEADER, &self.config.api_key);

            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            if is_retriable_status(status) && retries < self.retry.max_retries {
                retries += 1;
                let delay = self.retry.delay_for_retry(retries);
                debug!(
                    status = status.as_u16(),
                    retry = retries,
                    delay_ms = delay.as_millis(),
                    "Server error, retrying"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }
    }
}

/// Decodes a JSON response body into the requested type.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    let value = serde_json::from_str(&body).map_err(|e| {
        debug!(error = %e, "Failed to decode response body");
        e
    })?;
    Ok(value)
}

/// Builds an [`ApiError::Upstream`] from a non-success response.
///
/// The API reports errors as `{"message": "..."}`; when the body does not
/// match that shape the raw body (or the status's canonical reason) is used
/// as the message instead.
fn upstream_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| fallback_message(status, body));

    ApiError::Upstream {
        status: status.as_u16(),
        message,
    }
}

/// Fallback error message for bodies that are not `{"message": "..."}`.
fn fallback_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
