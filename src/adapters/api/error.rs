//! Trustless API Errors
//!
//! Every failure ends the call; the caller decides whether to retry.

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::ports::signer::SigningError;

/// Errors returned by `TrustlessApi` and `HttpClient`.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Non-success HTTP status.
  #[error("Trustless API invalid HTTP response: {method} {url}: {summary}")]
  Http {
    method: &'static str,
    url: String,
    /// HTTP status code.
    status: u16,
    /// Status plus truncated body.
    summary: String,
  },

  /// Success status but the body is not JSON.
  #[error("Trustless API invalid JSON response: {method} {url}: {summary}")]
  InvalidJson {
    method: &'static str,
    url: String,
    summary: String,
  },

  /// Valid JSON that does not match the endpoint's schema.
  #[error("Trustless API unexpected response shape from {url}: {source}")]
  Schema {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  /// Connection, TLS or timeout failure.
  #[error("Trustless API request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// Only the first page of trade history is available.
  #[error("unsupported page number {0}: only page 1 is available")]
  UnsupportedPage(u32),

  /// An argument was rejected before any request was made.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// The response was well-formed but empty where a value was required.
  #[error("unexpected response: {0}")]
  UnexpectedResponse(String),

  #[error(transparent)]
  Domain(#[from] DomainError),

  #[error(transparent)]
  Signing(#[from] SigningError),

  #[error("failed to encode request: {0}")]
  Encode(#[from] serde_json::Error),
}

impl ApiError {
  /// HTTP status carried by the error, if any.
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::Http { status, .. } => Some(*status),
      _ => None,
    }
  }
}
