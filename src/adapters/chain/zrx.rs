//! 0x Exchange Binding - v1 Order Hashing and Signing
//!
//! Implements the `ExchangeContract` port for the 0x v1 exchange used by
//! Trustless. The order hash is keccak256 over the packed order fields,
//! and the signature is `eth_sign` over that 32-byte hash.

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256, keccak256};
use tracing::debug;

use crate::ports::exchange::{ExchangeContract, SignedOrder, ZrxOrder};
use crate::ports::signer::{MessageSigner, SigningError};

/// The 0x v1 exchange contract, bound to one signing account.
pub struct ZrxExchange {
    /// Exchange contract address.
    address: Address,
    /// Signer holding the maker account.
    signer: Arc<dyn MessageSigner>,
}

impl ZrxExchange {
    /// Bind the exchange at `address` to `signer`'s account.
    pub fn new(address: Address, signer: Arc<dyn MessageSigner>) -> Self {
        Self { address, signer }
    }

    /// Hash of `order` as computed by the v1 exchange contract.
    ///
    /// Packed layout: six 20-byte addresses (exchange, maker, taker,
    /// maker token, taker token, fee recipient) followed by six 32-byte
    /// words (maker amount, taker amount, maker fee, taker fee,
    /// expiration, salt).
    pub fn order_hash(order: &ZrxOrder) -> B256 {
        let mut packed = Vec::with_capacity(6 * 20 + 6 * 32);

        for address in [
            order.exchange_contract_address,
            order.maker,
            order.taker,
            order.pay_token,
            order.buy_token,
            order.fee_recipient,
        ] {
            packed.extend_from_slice(address.as_slice());
        }

        for word in [
            order.pay_amount,
            order.buy_amount,
            order.maker_fee,
            order.taker_fee,
            U256::from(order.expiration),
            order.salt,
        ] {
            packed.extend_from_slice(&word.to_be_bytes::<32>());
        }

        keccak256(packed)
    }
}

impl ExchangeContract for ZrxExchange {
    fn address(&self) -> Address {
        self.address
    }

    fn account(&self) -> Address {
        self.signer.address()
    }

    fn random_salt(&self) -> U256 {
        let salt = U256::from_be_bytes(rand::random::<[u8; 32]>());
        salt.max(U256::from(1u8))
    }

    fn sign_order(&self, order: &ZrxOrder) -> Result<SignedOrder, SigningError> {
        let hash = Self::order_hash(order);
        debug!(order_hash = %hash, "Signing 0x order");
        let signature = self.signer.sign_message(hash.as_slice())?;
        Ok(SignedOrder::new(order, hash, signature))
    }
}
