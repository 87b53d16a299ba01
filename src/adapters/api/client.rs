//! Trustless HTTP Client - Single-attempt REST Transport
//!
//! Wraps reqwest with the configured timeout. Each call is one attempt:
//! no retries, no rate limiting, no backoff.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;

/// Maximum number of body characters kept in error summaries.
const SUMMARY_BODY_LIMIT: usize = 2048;

/// Configuration for the Trustless HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL for the API server.
  pub api_server: String,
  /// Per-request timeout.
  pub timeout: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_server: "https://api.ethfinex.com".to_string(),
      timeout: Duration::from_secs_f64(9.5),
    }
  }
}

/// HTTP client for the Trustless API.
#[derive(Debug, Clone)]
pub struct HttpClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: ClientConfig,
}

impl HttpClient {
  /// Create a new client.
  pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
    let http = Client::builder()
      .timeout(config.timeout)
      .build()?;

    Ok(Self { http, config })
  }

  /// Base URL requests are resolved against.
  pub fn api_server(&self) -> &str {
    &self.config.api_server
  }

  fn url(&self, resource: &str) -> String {
    format!("{}{}", self.config.api_server.trim_end_matches('/'), resource)
  }

  /// Execute a GET request without a body.
  pub async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ApiError> {
    let url = self.url(resource);
    let request = self.http.get(&url);
    self.execute(request, "GET", url).await
  }

  /// Execute a POST request. `None` sends no body at all.
  pub async fn post<B, T>(&self, resource: &str, body: Option<&B>) -> Result<T, ApiError>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.url(resource);
    let mut request = self.http.post(&url);
    if let Some(body) = body {
      request = request.json(body);
    }
    self.execute(request, "POST", url).await
  }

  async fn execute<T: DeserializeOwned>(
    &self,
    request: RequestBuilder,
    method: &'static str,
    url: String,
  ) -> Result<T, ApiError> {
    debug!(method, url = %url, "Sending request");

    let response = request.send().await?;
    let value = Self::result(response, method, url.clone()).await?;

    serde_json::from_value(value).map_err(|source| ApiError::Schema { url, source })
  }

  /// Check the status and parse the body as JSON.
  async fn result(
    response: Response,
    method: &'static str,
    url: String,
  ) -> Result<serde_json::Value, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      warn!(method, url = %url, status = status.as_u16(), "Non-success response");
      return Err(ApiError::Http {
        method,
        url,
        status: status.as_u16(),
        summary: response_summary(status, &body),
      });
    }

    serde_json::from_str(&body).map_err(|_| ApiError::InvalidJson {
      method,
      url,
      summary: response_summary(status, &body),
    })
  }
}

/// One-line summary of a response: status and truncated body.
pub fn response_summary(status: reqwest::StatusCode, body: &str) -> String {
  let text: String = body
    .chars()
    .filter(|c| *c != '\n' && *c != '\r')
    .take(SUMMARY_BODY_LIMIT)
    .collect();
  format!("{status} ({text})")
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::StatusCode;

  #[test]
  fn test_response_summary_strips_newlines() {
    let summary = response_summary(StatusCode::BAD_REQUEST, "line one\nline two");
    assert_eq!(summary, "400 Bad Request (line oneline two)");
  }

  #[test]
  fn test_response_summary_truncates() {
    let body = "x".repeat(5000);
    let summary = response_summary(StatusCode::INTERNAL_SERVER_ERROR, &body);
    assert_eq!(summary.matches('x').count(), SUMMARY_BODY_LIMIT);
  }

  #[test]
  fn test_url_join() {
    let client = HttpClient::new(ClientConfig {
      api_server: "http://localhost:8080/".to_string(),
      timeout: Duration::from_secs(1),
    })
    .unwrap();
    assert_eq!(client.url("/v1/symbols"), "http://localhost:8080/v1/symbols");
  }
}
