//! Trustless Token Wrapper - Deposit (Lock) Calls
//!
//! Builds `deposit(uint256,uint256)` calls that lock a token into its
//! trustless wrapper for a number of hours. ETH deposits carry the
//! amount as transaction value; ERC-20 deposits carry none.
//!
//! Nothing is sent from here: the returned `Transact` is an unsigned
//! transaction request for whoever executes it.

use alloy::primitives::{Address, Bytes, U256, keccak256};
use alloy::rpc::types::TransactionRequest;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::numeric::to_wad;

/// Symbol of the native chain asset.
pub const NATIVE_TOKEN: &str = "ETH";

/// An unsent contract call.
#[derive(Debug, Clone)]
pub struct Transact {
    /// Contract being called.
    pub contract: Address,
    /// Solidity method name.
    pub method: &'static str,
    /// Ready-to-sign transaction request.
    pub request: TransactionRequest,
}

impl Transact {
    /// Value attached to the call (zero when none).
    pub fn value(&self) -> U256 {
        self.request.value.unwrap_or_default()
    }

    /// ABI-encoded calldata.
    pub fn calldata(&self) -> Option<&Bytes> {
        self.request.input.input()
    }
}

/// A trustless wrapper contract bound to one underlying token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWrapper {
    address: Address,
    token: String,
}

impl TokenWrapper {
    /// Default lock period in hours.
    pub const DEFAULT_LOCK_HOURS: u64 = 500;

    /// Bind the wrapper at `address` for `token` (e.g. `"ETH"`, `"DAI"`).
    pub fn new(address: Address, token: impl Into<String>) -> Self {
        Self {
            address,
            token: token.into(),
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether this wrapper holds the native chain asset.
    pub fn is_native(&self) -> bool {
        self.token == NATIVE_TOKEN
    }

    /// Lock `amount` into the wrapper for `duration_hours`.
    ///
    /// Fails with `InvalidAmount` for negative amounts.
    pub fn deposit(&self, amount: Decimal, duration_hours: u64) -> Result<Transact, DomainError> {
        let units = to_wad(amount)?;

        let selector = &keccak256(b"deposit(uint256,uint256)")[..4];
        let mut calldata = Vec::with_capacity(4 + 2 * 32);
        calldata.extend_from_slice(selector);
        calldata.extend_from_slice(&units.to_be_bytes::<32>());
        calldata.extend_from_slice(&U256::from(duration_hours).to_be_bytes::<32>());

        let mut request = TransactionRequest::default()
            .to(self.address)
            .input(Bytes::from(calldata).into());

        if self.is_native() {
            request = request.value(units);
        }

        debug!(
            token = %self.token,
            wrapper = %self.address,
            amount = %amount,
            duration_hours,
            "Built deposit call"
        );

        Ok(Transact {
            contract: self.address,
            method: "deposit",
            request,
        })
    }

    /// Lock `amount` for the default period.
    pub fn deposit_default(&self, amount: Decimal) -> Result<Transact, DomainError> {
        self.deposit(amount, Self::DEFAULT_LOCK_HOURS)
    }
}

impl std::fmt::Display for TokenWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenWrapper('{}', {})", self.address, self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{TxKind, address};
    use rust_decimal_macros::dec;

    const WRAPPER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

    #[test]
    fn test_eth_deposit_attaches_value() {
        let wrapper = TokenWrapper::new(WRAPPER, "ETH");
        let tx = wrapper.deposit(dec!(1.5), 500).unwrap();
        assert_eq!(tx.value(), U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(tx.request.to, Some(TxKind::Call(WRAPPER)));
        assert_eq!(tx.contract, wrapper.address());
        assert_eq!(tx.method, "deposit");
        assert_eq!(wrapper.token(), "ETH");
    }

    #[test]
    fn test_erc20_deposit_has_no_value() {
        let wrapper = TokenWrapper::new(WRAPPER, "DAI");
        let tx = wrapper.deposit(dec!(1.5), 500).unwrap();
        assert!(tx.request.value.is_none());
        assert_eq!(tx.value(), U256::ZERO);
    }

    #[test]
    fn test_deposit_calldata() {
        let wrapper = TokenWrapper::new(WRAPPER, "DAI");
        let tx = wrapper.deposit_default(dec!(2)).unwrap();
        let data = tx.calldata().unwrap();

        assert_eq!(data.len(), 68);
        assert_eq!(&data[..4], &keccak256(b"deposit(uint256,uint256)")[..4]);
        assert_eq!(
            U256::from_be_slice(&data[4..36]),
            U256::from(2_000_000_000_000_000_000u128)
        );
        assert_eq!(U256::from_be_slice(&data[36..68]), U256::from(500u64));
    }

    #[test]
    fn test_negative_deposit_rejected() {
        let wrapper = TokenWrapper::new(WRAPPER, "ETH");
        assert!(matches!(
            wrapper.deposit(dec!(-1), 10),
            Err(DomainError::InvalidAmount { .. })
        ));
    }
}
