//! Chain Adapters - Ethereum Signing and Contract Calls
//!
//! Provides on-chain collaborators via alloy-rs 0.9 for:
//! - the local signing wallet (`eth_sign`)
//! - the 0x v1 exchange binding (order hashing + signing)
//! - trustless token wrapper deposit calls

pub mod token;
pub mod wallet;
pub mod zrx;

pub use token::{TokenWrapper, Transact};
pub use wallet::LocalWallet;
pub use zrx::ZrxExchange;
