//! Executed trades.
//!
//! Two response shapes map into `Trade`:
//! - the authenticated order history, where the price is stored as the
//!   reciprocal of the quoted price (`Trade::to_trade`)
//! - the public trade tape, which reports the price directly
//!   (`Trade::from_public`)
//!
//! The two mappings are intentionally different.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::numeric::{checked_div, checked_mul, decimal_from_any, int_from_any};
use super::order::is_sell_amount;

/// Status marker of history entries that produced fills.
pub const EXECUTED_STATUS: &str = "EXECUTED";

/// Raw order-history record from `/trustless/v1/r/orders/hist`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHistoryOrder {
    #[serde(deserialize_with = "int_from_any")]
    pub id: i64,
    /// Original signed amount (positive = sell).
    #[serde(deserialize_with = "decimal_from_any")]
    pub amount_orig: Decimal,
    #[serde(deserialize_with = "decimal_from_any")]
    pub price: Decimal,
    /// ISO-8601 timestamp without a zone designator (UTC implied).
    pub updated_at: String,
    pub pair: String,
    /// e.g. `"EXECUTED @ 180.5(1.0)"`, `"ACTIVE"`, `"CANCELED"`.
    pub status: String,
}

impl RawHistoryOrder {
    /// Whether this history entry was (at least partly) executed.
    pub fn is_executed(&self) -> bool {
        self.status.contains(EXECUTED_STATUS)
    }

    /// Executed check on an undecoded history entry.
    ///
    /// Only `status` is read, so non-executed entries may omit or null
    /// any other field. A missing status counts as not executed.
    pub fn entry_is_executed(entry: &serde_json::Value) -> bool {
        entry
            .get("status")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|status| status.contains(EXECUTED_STATUS))
    }
}

/// Raw trade from the public `/v1/trades/{pair}` tape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPublicTrade {
    #[serde(deserialize_with = "int_from_any")]
    pub tid: i64,
    #[serde(deserialize_with = "int_from_any")]
    pub timestamp: i64,
    /// `"sell"` or `"buy"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "decimal_from_any")]
    pub price: Decimal,
    #[serde(deserialize_with = "decimal_from_any")]
    pub amount: Decimal,
}

/// A normalized executed trade.
///
/// Equality and hashing cover all six fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trade {
    pub trade_id: i64,
    /// Unix seconds.
    pub timestamp: i64,
    pub is_sell: bool,
    pub pair: String,
    pub price: Decimal,
    pub amount: Decimal,
}

impl Trade {
    /// Normalize an executed order-history entry.
    ///
    /// `price` becomes `amount_orig / (price * amount_orig)` and `amount`
    /// the absolute quote total.
    pub fn to_trade(raw: &RawHistoryOrder) -> Result<Self, DomainError> {
        let amount_orig = raw.amount_orig;
        let total = checked_mul(raw.price, amount_orig, "trade total")?;
        let price = checked_div(amount_orig, total, "trade price")?;

        Ok(Self {
            trade_id: raw.id,
            timestamp: parse_utc_timestamp(&raw.updated_at)?,
            is_sell: is_sell_amount(amount_orig),
            pair: raw.pair.clone(),
            price,
            amount: total.abs(),
        })
    }

    /// Map a public tape entry as reported, without any price transform.
    pub fn from_public(pair: &str, raw: &RawPublicTrade) -> Self {
        Self {
            trade_id: raw.tid,
            timestamp: raw.timestamp,
            is_sell: raw.kind == "sell",
            pair: pair.to_string(),
            price: raw.price,
            amount: raw.amount,
        }
    }
}

/// Parse a zone-less ISO-8601 timestamp as UTC, returning unix seconds.
///
/// A `Z` designator is appended before parsing. Space-separated dates are
/// accepted as well.
pub fn parse_utc_timestamp(value: &str) -> Result<i64, DomainError> {
    let trimmed = value.trim();
    let zoned = format!("{trimmed}Z");

    if let Ok(instant) = DateTime::parse_from_rfc3339(&zoned) {
        return Ok(instant.timestamp());
    }

    // chrono's RFC 3339 parser needs seconds; fall back to looser layouts
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(naive.and_utc().timestamp());
        }
    }

    Err(DomainError::InvalidTimestamp {
        value: value.to_string(),
    })
}
