//! Trustless API Client - Shared State and Public Endpoints
//!
//! `TrustlessApi` owns the HTTP client, the request signer and the
//! exchange binding. Operations are split by concern:
//! - this module: construction, `/v1/symbols`, `/get/conf`
//! - `orderbook`: live order book per pair
//! - `history`: order history and the public trade tape
//! - `orders`: placement and cancellation
//!
//! Every operation is a single round trip with no client-side state.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;

use super::auth::RequestAuth;
use super::client::{ClientConfig, HttpClient};
use super::error::ApiError;
use crate::ports::exchange::ExchangeContract;
use crate::ports::signer::MessageSigner;

/// Only the first page of any history endpoint is served.
pub const SUPPORTED_PAGE: u32 = 1;

/// Client for the Ethfinex Trustless API.
pub struct TrustlessApi {
    /// Exchange contract binding used to build and sign orders.
    pub(super) exchange: Arc<dyn ExchangeContract>,
    /// Signs nonces and cancellations.
    pub(super) auth: RequestAuth,
    /// Single-attempt HTTP transport.
    pub(super) http: HttpClient,
}

impl TrustlessApi {
    /// Create a client for `config.api_server`.
    pub fn new(
        exchange: Arc<dyn ExchangeContract>,
        signer: Arc<dyn MessageSigner>,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            exchange,
            auth: RequestAuth::new(signer),
            http: HttpClient::new(config)?,
        })
    }

    /// Base URL of the API server.
    pub fn api_server(&self) -> &str {
        self.http.api_server()
    }

    /// List of tradable pair symbols.
    #[instrument(skip(self))]
    pub async fn get_symbols(&self) -> Result<serde_json::Value, ApiError> {
        self.http.get("/v1/symbols").await
    }

    /// Exchange configuration (token registry, fee address, ...).
    #[instrument(skip(self))]
    pub async fn get_config(&self) -> Result<serde_json::Value, ApiError> {
        self.http
            .post::<(), _>("/trustless/v1/r/get/conf", None)
            .await
    }

    /// POST a fresh nonce-stamped signed envelope to `endpoint`.
    pub(super) async fn signed_read<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let envelope = self.auth.envelope()?;
        self.http.post(endpoint, Some(&envelope)).await
    }
}

/// Reject any page other than the first before touching the network.
pub(super) const fn ensure_first_page(page_number: u32) -> Result<(), ApiError> {
    if page_number == SUPPORTED_PAGE {
        Ok(())
    } else {
        Err(ApiError::UnsupportedPage(page_number))
    }
}
