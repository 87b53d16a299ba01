//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the collaborator traits the API client depends on.
//! Adapters implement these traits.
//!
//! Port categories:
//! - `MessageSigner`: `eth_sign` over arbitrary bytes
//! - `ExchangeContract`: the 0x exchange binding (salt + order signing)

pub mod exchange;
pub mod signer;

pub use exchange::{ExchangeContract, SignedOrder, ZrxOrder};
pub use signer::{EthSignature, MessageSigner, SigningError};
