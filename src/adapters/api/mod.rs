//! Ethfinex Trustless API Adapter
//!
//! Implements the HTTP client for the Trustless hybrid order-book API:
//! signed reads, order placement and cancellation, and trade history.
//!
//! Sub-modules:
//! - `auth`: nonce-stamped `eth_sign` envelopes
//! - `client`: single-attempt HTTP transport
//! - `error`: `ApiError`
//! - `history`: order history and public trades
//! - `orderbook`: live orders per pair
//! - `orders`: order placement and cancellation
//! - `trustless`: the `TrustlessApi` client and public endpoints
//! - `types`: API request/response type definitions

pub mod auth;
pub mod client;
pub mod error;
pub mod history;
pub mod orderbook;
pub mod orders;
pub mod trustless;
pub mod types;

pub use client::{ClientConfig, HttpClient};
pub use error::ApiError;
pub use orders::OrderRequest;
pub use trustless::TrustlessApi;
pub use types::OrderReceipt;
