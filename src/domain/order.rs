//! Order-book entries.
//!
//! The Trustless order book reports each resting order with a signed
//! base amount. Normalized orders keep the magnitude, the side flag and
//! the reciprocal of the quoted price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::numeric::{checked_div, checked_mul, decimal_from_any, int_from_any};

/// Side convention of the exchange: a POSITIVE signed amount is a sell.
///
/// This is the reverse of what most venues use. Every normalization path
/// goes through here so the convention cannot flip in one place only.
pub fn is_sell_amount(signed_amount: Decimal) -> bool {
    signed_amount > Decimal::ZERO
}

/// Raw order record from `/trustless/v1/r/orders/t{PAIR}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBookOrder {
    /// Exchange order ID.
    #[serde(deserialize_with = "int_from_any")]
    pub id: i64,
    /// Signed base amount (positive = sell).
    #[serde(deserialize_with = "decimal_from_any")]
    pub amount: Decimal,
    /// Quoted price.
    #[serde(deserialize_with = "decimal_from_any")]
    pub price: Decimal,
}

/// A normalized order-book entry.
///
/// `price` holds the reciprocal of the quoted price and `amount` is
/// denominated in the quote token. Both are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_id: i64,
    pub pair: String,
    pub is_sell: bool,
    pub price: Decimal,
    pub amount: Decimal,
}

impl Order {
    /// Normalize a raw book entry for `pair`.
    ///
    /// Fails with `DivisionByZero` when the amount or the price is zero.
    pub fn to_order(pair: &str, raw: &RawBookOrder) -> Result<Self, DomainError> {
        let is_sell = is_sell_amount(raw.amount);
        let amount = raw.amount.abs();
        let quote_amount = checked_mul(amount, raw.price, "order quote amount")?;
        let price = checked_div(amount, quote_amount, "order price")?;

        Ok(Self {
            order_id: raw.id,
            pair: pair.to_string(),
            is_sell,
            price,
            amount: quote_amount,
        })
    }

    pub const fn sell_to_buy_price(&self) -> Decimal {
        self.price
    }

    pub const fn buy_to_sell_price(&self) -> Decimal {
        self.price
    }

    /// Amount still to be received if the order fills.
    pub fn remaining_buy_amount(&self) -> Decimal {
        if self.is_sell {
            self.amount * self.price
        } else {
            self.amount
        }
    }

    /// Amount still to be paid if the order fills.
    pub fn remaining_sell_amount(&self) -> Decimal {
        if self.is_sell {
            self.amount
        } else {
            self.amount * self.price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(id: i64, amount: Decimal, price: Decimal) -> RawBookOrder {
        RawBookOrder { id, amount, price }
    }

    #[test]
    fn test_positive_amount_is_sell() {
        let order = Order::to_order("ETHUSD", &raw(1, dec!(2), dec!(100))).unwrap();
        assert!(order.is_sell);
        assert_eq!(order.amount, dec!(200));
        assert_eq!(order.price, dec!(0.01));
        assert_eq!(order.pair, "ETHUSD");
        assert_eq!(order.order_id, 1);
    }

    #[test]
    fn test_negative_amount_is_buy() {
        let order = Order::to_order("ETHUSD", &raw(2, dec!(-0.5), dec!(200))).unwrap();
        assert!(!order.is_sell);
        assert_eq!(order.amount, dec!(100));
        assert_eq!(order.price, dec!(0.005));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = Order::to_order("ETHUSD", &raw(3, Decimal::ZERO, dec!(200)));
        assert!(matches!(result, Err(DomainError::DivisionByZero { .. })));
    }

    #[test]
    fn test_zero_price_rejected() {
        let result = Order::to_order("ETHUSD", &raw(4, dec!(1), Decimal::ZERO));
        assert!(matches!(result, Err(DomainError::DivisionByZero { .. })));
    }

    #[test]
    fn test_remaining_amounts() {
        let sell = Order {
            order_id: 1,
            pair: "ETHDAI".to_string(),
            is_sell: true,
            price: dec!(0.01),
            amount: dec!(200),
        };
        assert_eq!(sell.remaining_sell_amount(), dec!(200));
        assert_eq!(sell.remaining_buy_amount(), dec!(2));

        let buy = Order { is_sell: false, ..sell };
        assert_eq!(buy.remaining_buy_amount(), dec!(200));
        assert_eq!(buy.remaining_sell_amount(), dec!(2));
        assert_eq!(buy.sell_to_buy_price(), buy.buy_to_sell_price());
    }

    #[test]
    fn test_raw_book_order_deserialization() {
        let json = r#"{"id": 1234, "amount": "-1.25", "price": 180.5, "status": "ACTIVE"}"#;
        let raw: RawBookOrder = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 1234);
        assert_eq!(raw.amount, dec!(-1.25));
        assert_eq!(raw.price, dec!(180.5));
    }
}
