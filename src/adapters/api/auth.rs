//! Trustless Authentication - Signed Request Envelopes
//!
//! Authenticated reads carry `{protocol, nonce, signature}` where the
//! nonce is the current unix time plus a small forward skew and the
//! signature is `eth_sign` over the nonce string.

use std::sync::Arc;

use chrono::Utc;

use super::types::{PROTOCOL, SignedEnvelope};
use crate::ports::signer::{MessageSigner, SigningError};

/// Forward skew added to nonces (seconds).
pub const NONCE_SKEW_SECS: f64 = 3.0;

/// Builds signed envelopes for the Trustless API.
#[derive(Clone)]
pub struct RequestAuth {
    /// Trading account signer.
    signer: Arc<dyn MessageSigner>,
}

impl RequestAuth {
    pub fn new(signer: Arc<dyn MessageSigner>) -> Self {
        Self { signer }
    }

    /// Current unix time in fractional seconds plus the nonce skew.
    pub fn nonce() -> String {
        let micros = Utc::now().timestamp_micros();
        #[allow(clippy::cast_precision_loss)]
        let seconds = micros as f64 / 1_000_000.0;
        (seconds + NONCE_SKEW_SECS).to_string()
    }

    /// Sign `message` and return the hex signature.
    pub fn sign(&self, message: &[u8]) -> Result<String, SigningError> {
        Ok(self.signer.sign_message(message)?.to_hex())
    }

    /// Fresh nonce-stamped envelope for an authenticated read.
    pub fn envelope(&self) -> Result<SignedEnvelope, SigningError> {
        self.envelope_with_nonce(Self::nonce())
    }

    /// Envelope for an explicit nonce.
    pub fn envelope_with_nonce(&self, nonce: String) -> Result<SignedEnvelope, SigningError> {
        let signature = self.sign(nonce.as_bytes())?;
        Ok(SignedEnvelope {
            protocol: PROTOCOL,
            nonce,
            signature,
        })
    }
}
