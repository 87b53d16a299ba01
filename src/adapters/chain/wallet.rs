//! Local Wallet - alloy-rs Private Key Signer
//!
//! Implements the `MessageSigner` port with an in-memory secp256k1 key.
//! The key comes from the TETHFINEX_PRIVATE_KEY environment variable
//! (never from config files, never logged).

use alloy::primitives::Address;
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};

use crate::ports::signer::{EthSignature, MessageSigner, SigningError};

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_ENV: &str = "TETHFINEX_PRIVATE_KEY";

/// Trading wallet backed by a local private key.
pub struct LocalWallet {
    signer: PrivateKeySigner,
}

impl LocalWallet {
    /// Parse a hex private key (with or without `0x`).
    pub fn from_private_key(key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = key
            .trim()
            .parse()
            .context("Invalid private key")?;
        Ok(Self { signer })
    }

    /// Load the signing key from `TETHFINEX_PRIVATE_KEY`.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(PRIVATE_KEY_ENV)
            .with_context(|| format!("{PRIVATE_KEY_ENV} not set"))?;
        Self::from_private_key(&key)
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.signer.address())
            .finish_non_exhaustive()
    }
}

impl MessageSigner for LocalWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn sign_message(&self, message: &[u8]) -> Result<EthSignature, SigningError> {
        let signature = self
            .signer
            .sign_message_sync(message)
            .map_err(|e| SigningError::Backend(e.to_string()))?;
        EthSignature::from_rsv(&signature.as_bytes())
    }
}
