//! Trustless Order Writes - Placement and Cancellation
//!
//! Placement builds a 0x v1 order, signs it through the exchange binding
//! and submits it as an `EXCHANGE LIMIT` order. Cancellation signs the
//! order id. Neither call retries.

use alloy::primitives::{Address, U256};
use chrono::{TimeDelta, Utc};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use super::error::ApiError;
use super::trustless::TrustlessApi;
use super::types::{
    CancelOrderRequest, EXCHANGE_LIMIT, OrderReceipt, PROTOCOL, PlaceOrderRequest,
    WriteResponse, json_id,
};
use crate::domain::numeric::{format_wad, to_wad, wad_div, wad_mul};
use crate::ports::exchange::{ExchangeContract, ZrxOrder};

/// Lifetime of a placed order.
pub const ORDER_TTL_HOURS: i64 = 6;

/// Parameters of a limit order placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub is_sell: bool,
    /// Token the maker pays.
    pub pay_token: Address,
    pub pay_amount: Decimal,
    /// Token the maker receives.
    pub buy_token: Address,
    pub buy_amount: Decimal,
    /// Taker and fee recipient of the 0x order.
    pub fee_address: Address,
    /// Pair symbol without the `t` prefix, e.g. `"ETHUSD"`.
    pub pair: String,
}

impl OrderRequest {
    const fn side(&self) -> &'static str {
        if self.is_sell { "SELL" } else { "BUY" }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.pay_amount <= Decimal::ZERO || self.buy_amount <= Decimal::ZERO {
            return Err(ApiError::InvalidArgument(format!(
                "pay and buy amounts must be positive (pay {}, buy {})",
                self.pay_amount, self.buy_amount
            )));
        }
        if self.pair.is_empty() {
            return Err(ApiError::InvalidArgument("pair must not be empty".to_string()));
        }
        Ok(())
    }

    /// Wad ratio quoted on the wire: pay/buy when selling, buy/pay when
    /// buying. Truncated at 18 decimals.
    fn wad_price(&self) -> Result<U256, ApiError> {
        let pay = to_wad(self.pay_amount)?;
        let buy = to_wad(self.buy_amount)?;
        let price = if self.is_sell {
            wad_div(pay, buy, "sell price")?
        } else {
            wad_div(buy, pay, "buy price")?
        };
        Ok(price)
    }

    /// Wad amounts written into the 0x order as `(pay, buy)`.
    ///
    /// The counter side is recomputed as `price * fixed side` in wad
    /// arithmetic so both amounts express exactly the wire price.
    pub fn order_amounts(&self) -> Result<(U256, U256), ApiError> {
        let pay = to_wad(self.pay_amount)?;
        let buy = to_wad(self.buy_amount)?;
        let price = self.wad_price()?;
        if self.is_sell {
            Ok((wad_mul(price, buy, "sell pay amount")?, buy))
        } else {
            Ok((pay, wad_mul(price, pay, "buy amount")?))
        }
    }

    /// Signed wire amount: positive sells, negative buys.
    pub fn wire_amount(&self) -> String {
        if self.is_sell {
            self.buy_amount.normalize().to_string()
        } else {
            format!("-{}", self.pay_amount.normalize())
        }
    }

    /// Wire price at 18-decimal precision.
    pub fn wire_price(&self) -> Result<String, ApiError> {
        Ok(format_wad(self.wad_price()?))
    }

    /// Unsigned 0x order for `exchange`, expiring at `expiration`.
    pub fn to_zrx_order(
        &self,
        exchange: &dyn ExchangeContract,
        expiration: u64,
    ) -> Result<ZrxOrder, ApiError> {
        let (pay_amount, buy_amount) = self.order_amounts()?;

        Ok(ZrxOrder {
            exchange_contract_address: exchange.address(),
            maker: exchange.account(),
            taker: self.fee_address,
            pay_token: self.pay_token,
            pay_amount,
            buy_token: self.buy_token,
            buy_amount,
            maker_fee: U256::ZERO,
            taker_fee: U256::ZERO,
            fee_recipient: self.fee_address,
            expiration,
            salt: exchange.random_salt(),
        })
    }
}

/// Unix time `ORDER_TTL_HOURS` from now.
pub fn order_expiration() -> u64 {
    (Utc::now() + TimeDelta::hours(ORDER_TTL_HOURS))
        .timestamp()
        .unsigned_abs()
}

impl TrustlessApi {
    /// Build the signed placement payload without sending it.
    pub fn placement_payload(&self, request: &OrderRequest) -> Result<PlaceOrderRequest, ApiError> {
        request.validate()?;

        let order = request.to_zrx_order(self.exchange.as_ref(), order_expiration())?;
        let signed = self.exchange.sign_order(&order)?;

        Ok(PlaceOrderRequest {
            order_type: EXCHANGE_LIMIT,
            symbol: format!("t{}", request.pair),
            amount: request.wire_amount(),
            price: request.wire_price()?,
            meta: signed.to_json()?,
            protocol: PROTOCOL,
        })
    }

    /// Place a limit order and return the first element of the response.
    #[instrument(skip(self, request), fields(pair = %request.pair, side = request.side()))]
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let payload = self.placement_payload(request)?;

        info!(
            side = request.side(),
            amount = %payload.amount,
            pair = %request.pair,
            price = %payload.price,
            "Placing order"
        );

        let response: WriteResponse = self
            .http
            .post("/trustless/v1/w/on", Some(&payload))
            .await?;

        let receipt = response
            .into_iter()
            .next()
            .map(OrderReceipt)
            .ok_or_else(|| ApiError::UnexpectedResponse("empty order placement response".to_string()))?;

        info!(order = %receipt, "Placed order");
        Ok(receipt)
    }

    /// Build the signed cancellation payload without sending it.
    pub fn cancel_payload(&self, order_id: i64) -> Result<CancelOrderRequest, ApiError> {
        let order_id = order_id.to_string();
        let signature = self.auth.sign(order_id.as_bytes())?;
        Ok(CancelOrderRequest {
            order_id,
            protocol: PROTOCOL,
            signature,
        })
    }

    /// Cancel an order.
    ///
    /// Returns `true` iff the exchange echoes `order_id` back. A rejected
    /// cancel (e.g. already filled) is `Ok(false)`, not an error.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: i64) -> Result<bool, ApiError> {
        info!(order_id, "Cancelling order");

        let payload = self.cancel_payload(order_id)?;
        let response: WriteResponse = self
            .http
            .post("/trustless/v1/w/oc", Some(&payload))
            .await?;

        let success = response.first().and_then(json_id) == Some(order_id);

        if success {
            info!(order_id, "Cancelled order");
        } else {
            warn!(order_id, echoed = ?response.first(), "Failed to cancel order");
        }

        Ok(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use rust_decimal_macros::dec;

    fn request(is_sell: bool) -> OrderRequest {
        OrderRequest {
            is_sell,
            pay_token: address!("3333333333333333333333333333333333333333"),
            pay_amount: dec!(1),
            buy_token: address!("4444444444444444444444444444444444444444"),
            buy_amount: dec!(150),
            fee_address: address!("2222222222222222222222222222222222222222"),
            pair: "ETHUSD".to_string(),
        }
    }

    fn wei(units: u128) -> U256 {
        U256::from(units)
    }

    #[test]
    fn test_sell_wire_fields() {
        let req = request(true);
        assert_eq!(req.wire_amount(), "150");
        assert_eq!(req.wire_price().unwrap(), "0.006666666666666666");
    }

    #[test]
    fn test_buy_wire_fields() {
        let req = request(false);
        assert_eq!(req.wire_amount(), "-1");
        assert_eq!(req.wire_price().unwrap(), "150");
    }

    #[test]
    fn test_sell_amounts_follow_truncated_price() {
        let (pay, buy) = request(true).order_amounts().unwrap();
        assert_eq!(buy, wei(150_000_000_000_000_000_000));
        assert_eq!(pay, wei(999_999_999_999_999_900));
    }

    #[test]
    fn test_buy_amounts_follow_truncated_price() {
        let (pay, buy) = request(false).order_amounts().unwrap();
        assert_eq!(pay, wei(1_000_000_000_000_000_000));
        assert_eq!(buy, wei(150_000_000_000_000_000_000));

        let req = OrderRequest {
            pay_amount: dec!(3),
            buy_amount: dec!(1),
            ..request(false)
        };
        assert_eq!(req.wire_price().unwrap(), "0.333333333333333333");
        let (pay, buy) = req.order_amounts().unwrap();
        assert_eq!(pay, wei(3_000_000_000_000_000_000));
        assert_eq!(buy, wei(999_999_999_999_999_999));
    }

    #[test]
    fn test_validate_rejects_zero_amounts() {
        let req = OrderRequest { buy_amount: Decimal::ZERO, ..request(true) };
        assert!(matches!(req.validate(), Err(ApiError::InvalidArgument(_))));
    }

    #[test]
    fn test_expiration_six_hours_ahead() {
        let now = Utc::now().timestamp().unsigned_abs();
        let expiration = order_expiration();
        assert!(expiration >= now + 6 * 3600);
        assert!(expiration <= now + 6 * 3600 + 5);
    }
}
