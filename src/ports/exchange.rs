//! Exchange Contract Port - 0x Order Binding
//!
//! Defines the trait for the on-chain exchange contract that settles
//! Trustless orders, together with the unsigned and signed 0x (v1) order
//! records it works on.

use alloy::primitives::{Address, U256};
use serde::{Serialize, Serializer};

use super::signer::{EthSignature, SigningError};

/// An unsigned 0x v1 order. Amounts are 18-decimal base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZrxOrder {
  /// Exchange contract that will settle the order.
  pub exchange_contract_address: Address,
  /// Account creating the order.
  pub maker: Address,
  /// Counterparty allowed to fill the order.
  pub taker: Address,
  /// Token the maker pays.
  pub pay_token: Address,
  /// Amount of `pay_token` offered.
  pub pay_amount: U256,
  /// Token the maker receives.
  pub buy_token: Address,
  /// Amount of `buy_token` requested.
  pub buy_amount: U256,
  pub maker_fee: U256,
  pub taker_fee: U256,
  pub fee_recipient: Address,
  /// Expiration in unix seconds.
  pub expiration: u64,
  pub salt: U256,
}

/// A 0x v1 order with its `eth_sign` signature over the order hash.
///
/// Serializes to the wire JSON the Trustless API expects in `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
  #[serde(serialize_with = "lower_hex")]
  pub exchange_contract_address: Address,
  #[serde(serialize_with = "lower_hex")]
  pub maker: Address,
  #[serde(serialize_with = "lower_hex")]
  pub taker: Address,
  #[serde(serialize_with = "lower_hex")]
  pub maker_token_address: Address,
  #[serde(serialize_with = "lower_hex")]
  pub taker_token_address: Address,
  #[serde(serialize_with = "lower_hex")]
  pub fee_recipient: Address,
  #[serde(serialize_with = "decimal_string")]
  pub maker_token_amount: U256,
  #[serde(serialize_with = "decimal_string")]
  pub taker_token_amount: U256,
  #[serde(serialize_with = "decimal_string")]
  pub maker_fee: U256,
  #[serde(serialize_with = "decimal_string")]
  pub taker_fee: U256,
  #[serde(serialize_with = "decimal_string")]
  pub expiration_unix_timestamp_sec: u64,
  #[serde(serialize_with = "decimal_string")]
  pub salt: U256,
  /// Order hash the signature covers (not part of the wire form).
  #[serde(skip)]
  pub order_hash: alloy::primitives::B256,
  pub ec_signature: EthSignature,
}

impl SignedOrder {
  /// Attach a signature to `order`.
  pub fn new(
    order: &ZrxOrder,
    order_hash: alloy::primitives::B256,
    ec_signature: EthSignature,
  ) -> Self {
    Self {
      exchange_contract_address: order.exchange_contract_address,
      maker: order.maker,
      taker: order.taker,
      maker_token_address: order.pay_token,
      taker_token_address: order.buy_token,
      fee_recipient: order.fee_recipient,
      maker_token_amount: order.pay_amount,
      taker_token_amount: order.buy_amount,
      maker_fee: order.maker_fee,
      taker_fee: order.taker_fee,
      expiration_unix_timestamp_sec: order.expiration,
      salt: order.salt,
      order_hash,
      ec_signature,
    }
  }

  /// Wire JSON for the `meta` field of an order placement.
  pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(self)
  }
}

fn lower_hex<S: Serializer>(value: &Address, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&format!("{value:#x}"))
}

fn decimal_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
  T: std::fmt::Display,
  S: Serializer,
{
  serializer.serialize_str(&value.to_string())
}

/// Trait for the exchange contract binding.
///
/// Exposes the contract address, the bound trading account, salt
/// generation and order signing. Settlement itself happens on-chain and
/// is outside this crate.
pub trait ExchangeContract: Send + Sync + 'static {
  /// Address of the exchange contract.
  fn address(&self) -> Address;

  /// Account orders are created for (the maker).
  fn account(&self) -> Address;

  /// Fresh random salt for a new order.
  fn random_salt(&self) -> U256;

  /// Hash and sign `order`.
  fn sign_order(&self, order: &ZrxOrder) -> Result<SignedOrder, SigningError>;
}
