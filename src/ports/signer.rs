//! Message Signer Port - Ethereum `eth_sign` Capability
//!
//! Signs arbitrary bytes with the account that owns the trading wallet.
//! Used for authenticated request envelopes, cancellations and 0x order
//! hashes.

use alloy::primitives::{Address, B256};
use serde::Serialize;
use thiserror::Error;

/// Failure reported by a signing backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
  /// The backend could not produce a signature.
  #[error("signing failed: {0}")]
  Backend(String),
  /// The signature bytes were not a 65-byte `r || s || v` value.
  #[error("malformed signature of {0} bytes")]
  Malformed(usize),
}

/// A recoverable secp256k1 signature in `r`, `s`, `v` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EthSignature {
  /// Recovery id, 27 or 28.
  pub v: u8,
  #[serde(serialize_with = "serialize_b256")]
  pub r: B256,
  #[serde(serialize_with = "serialize_b256")]
  pub s: B256,
}

impl EthSignature {
  /// Build from the 65-byte `r || s || v` encoding.
  ///
  /// A `v` of 0 or 1 is normalized to 27 or 28.
  pub fn from_rsv(bytes: &[u8]) -> Result<Self, SigningError> {
    if bytes.len() != 65 {
      return Err(SigningError::Malformed(bytes.len()));
    }
    let v = match bytes[64] {
      v @ (0 | 1) => v + 27,
      v => v,
    };
    Ok(Self {
      v,
      r: B256::from_slice(&bytes[..32]),
      s: B256::from_slice(&bytes[32..64]),
    })
  }

  /// Lowercase `0x`-prefixed hex of `r || s || v`.
  pub fn to_hex(&self) -> String {
    let mut bytes = Vec::with_capacity(65);
    bytes.extend_from_slice(self.r.as_slice());
    bytes.extend_from_slice(self.s.as_slice());
    bytes.push(self.v);
    alloy::hex::encode_prefixed(bytes)
  }
}

fn serialize_b256<S>(value: &B256, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&format!("{value:#x}"))
}

/// Trait for `eth_sign` style message signing.
///
/// Implementors hash `"\x19Ethereum Signed Message:\n" + len(message) + message`
/// with keccak256 and sign the digest.
pub trait MessageSigner: Send + Sync + 'static {
  /// Address of the signing account.
  fn address(&self) -> Address;

  /// Sign `message` with the Ethereum message prefix.
  fn sign_message(&self, message: &[u8]) -> Result<EthSignature, SigningError>;
}
