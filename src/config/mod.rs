//! Configuration Module - TOML-based Client Configuration
//!
//! Loads and validates configuration from `config.toml` with
//! environment variable overrides. The signing key is never part of
//! the file; it is read from TETHFINEX_PRIVATE_KEY.

pub mod loader;

use std::time::Duration;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::api::ClientConfig;
use crate::adapters::chain::TokenWrapper;

/// Top-level client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Process-level settings.
  #[serde(default)]
  pub client: ClientSection,
  /// Trustless API endpoint.
  pub api: ApiConfig,
  /// Exchange contract binding.
  pub exchange: ExchangeConfig,
  /// Trustless token wrappers by symbol.
  #[serde(default)]
  pub tokens: Vec<TokenConfig>,
}

/// Process-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for ClientSection {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
    }
  }
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Trustless API base URL.
  pub server: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: f64,
}

/// Exchange contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
  /// 0x exchange contract address.
  pub address: String,
}

/// A trustless wrapper for one token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
  /// Underlying token symbol, e.g. "ETH".
  pub symbol: String,
  /// Wrapper contract address.
  pub wrapper_address: String,
}

impl AppConfig {
  /// HTTP client settings.
  ///
  /// Fails when `timeout_seconds` is negative, not finite or too large
  /// for a `Duration`.
  pub fn client_config(&self) -> Result<ClientConfig> {
    let timeout = Duration::try_from_secs_f64(self.api.timeout_seconds)
      .with_context(|| format!("Invalid timeout_seconds: {}", self.api.timeout_seconds))?;
    Ok(ClientConfig {
      api_server: self.api.server.clone(),
      timeout,
    })
  }

  /// Parsed exchange contract address.
  pub fn exchange_address(&self) -> Result<Address> {
    self
      .exchange
      .address
      .parse()
      .with_context(|| format!("Invalid exchange address: {}", self.exchange.address))
  }

  /// Wrapper binding for `symbol`.
  pub fn token_wrapper(&self, symbol: &str) -> Result<TokenWrapper> {
    let token = self
      .tokens
      .iter()
      .find(|t| t.symbol == symbol)
      .with_context(|| format!("No wrapper configured for token {symbol}"))?;

    let address: Address = token
      .wrapper_address
      .parse()
      .with_context(|| format!("Invalid wrapper address for {symbol}"))?;

    Ok(TokenWrapper::new(address, token.symbol.clone()))
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_timeout() -> f64 {
  9.5
}
