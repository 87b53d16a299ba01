//! Trustless API Request/Response Types
//!
//! Defines the serialization types for communicating with the
//! Trustless REST API. Per-endpoint response records live in
//! `crate::domain`; this module holds the request payloads and the
//! write-endpoint responses.

use serde::{Deserialize, Serialize};

/// Protocol tag sent with every signed request.
pub const PROTOCOL: &str = "0x";

/// Order type used for all placements.
pub const EXCHANGE_LIMIT: &str = "EXCHANGE LIMIT";

/// Authentication envelope for signed reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedEnvelope {
  /// Always `"0x"`.
  pub protocol: &'static str,
  /// Unix time (fractional seconds) plus skew.
  pub nonce: String,
  /// `eth_sign` over the nonce bytes.
  pub signature: String,
}

/// Order placement payload for `/trustless/v1/w/on`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
  /// Always `"EXCHANGE LIMIT"`.
  #[serde(rename = "type")]
  pub order_type: &'static str,
  /// `"t"` + pair, e.g. `"tETHUSD"`.
  pub symbol: String,
  /// Signed amount: positive sells, negative buys.
  pub amount: String,
  pub price: String,
  /// Signed 0x order wire JSON.
  pub meta: serde_json::Value,
  pub protocol: &'static str,
}

/// Cancellation payload for `/trustless/v1/w/oc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelOrderRequest {
  #[serde(rename = "orderId")]
  pub order_id: String,
  pub protocol: &'static str,
  /// `eth_sign` over the order id string.
  pub signature: String,
}

/// Write endpoints answer with a JSON array led by the order id.
pub type WriteResponse = Vec<serde_json::Value>;

/// First element of an order placement response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReceipt(pub serde_json::Value);

impl OrderReceipt {
  /// Exchange order id, when the receipt carries one.
  pub fn order_id(&self) -> Option<i64> {
    json_id(&self.0)
  }
}

impl std::fmt::Display for OrderReceipt {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.order_id() {
      Some(id) => write!(f, "{id}"),
      None => write!(f, "{}", self.0),
    }
  }
}

/// Read an order id from a JSON integer or integer string.
pub fn json_id(value: &serde_json::Value) -> Option<i64> {
  match value {
    serde_json::Value::Number(n) => n.as_i64(),
    serde_json::Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_place_order_request_serialization() {
    let req = PlaceOrderRequest {
      order_type: EXCHANGE_LIMIT,
      symbol: "tETHUSD".to_string(),
      amount: "-10".to_string(),
      price: "0.005".to_string(),
      meta: json!({"salt": "1"}),
      protocol: PROTOCOL,
    };

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["type"], "EXCHANGE LIMIT");
    assert_eq!(json["symbol"], "tETHUSD");
    assert_eq!(json["amount"], "-10");
    assert_eq!(json["meta"]["salt"], "1");
    assert_eq!(json["protocol"], "0x");
  }

  #[test]
  fn test_cancel_request_field_names() {
    let req = CancelOrderRequest {
      order_id: "42".to_string(),
      protocol: PROTOCOL,
      signature: "0xsig".to_string(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, json!({"orderId": "42", "protocol": "0x", "signature": "0xsig"}));
  }

  #[test]
  fn test_receipt_order_id() {
    assert_eq!(OrderReceipt(json!(1187)).order_id(), Some(1187));
    assert_eq!(OrderReceipt(json!("1187")).order_id(), Some(1187));
    assert_eq!(OrderReceipt(json!({"id": 1})).order_id(), None);
    assert_eq!(OrderReceipt(json!(1187)).to_string(), "1187");
  }
}
