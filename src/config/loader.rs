//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, applying environment overrides,
//! validating all parameters, and providing clear error messages for
//! misconfiguration.

use std::collections::HashSet;
use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};

use super::AppConfig;

/// Overrides `api.server` when set.
pub const API_SERVER_ENV: &str = "TETHFINEX_API_SERVER";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config = parse_config(&content)?;

  if let Ok(server) = std::env::var(API_SERVER_ENV) {
    config.api.server = server;
  }

  validate_config(&config)?;

  Ok(config)
}

/// Parse configuration text without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).with_context(|| "Failed to parse config.toml")
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty API server URL
/// - Positive, finite timeout that fits a `Duration`
/// - Parseable contract addresses
/// - Unique token symbols
pub fn validate_config(config: &AppConfig) -> Result<()> {
  // API validation
  anyhow::ensure!(
    !config.api.server.trim().is_empty(),
    "API server URL must not be empty"
  );
  anyhow::ensure!(
    config.api.timeout_seconds.is_finite() && config.api.timeout_seconds > 0.0,
    "timeout_seconds must be positive, got {}",
    config.api.timeout_seconds
  );
  config.client_config()?;

  // Exchange validation
  config.exchange_address()?;

  // Token validation
  let mut seen = HashSet::new();
  for (i, token) in config.tokens.iter().enumerate() {
    anyhow::ensure!(
      !token.symbol.is_empty(),
      "Token {} has empty symbol",
      i
    );
    anyhow::ensure!(
      seen.insert(token.symbol.as_str()),
      "Token {} is configured more than once",
      token.symbol
    );
    token
      .wrapper_address
      .parse::<Address>()
      .with_context(|| format!("Token {} has invalid wrapper_address", token.symbol))?;
  }

  Ok(())
}
