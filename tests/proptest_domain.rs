//! Property-Based Tests - Domain Layer Invariants
//!
//! Uses `proptest` to verify that normalization of book orders and
//! trades keeps its sign and reciprocal-price invariants across random
//! inputs.

use std::collections::HashSet;

use alloy::primitives::U256;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tethfinex_client::domain::numeric::to_wad;
use tethfinex_client::domain::{Order, RawBookOrder, RawHistoryOrder, Trade, is_sell_amount};

const TOLERANCE: Decimal = dec!(0.000000000001);

fn positive_decimal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000, 0u32..8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn signed_decimal() -> impl Strategy<Value = Decimal> {
    (positive_decimal(), any::<bool>()).prop_map(|(d, negative)| if negative { -d } else { d })
}

fn history(id: i64, amount_orig: Decimal, price: Decimal) -> RawHistoryOrder {
    RawHistoryOrder {
        id,
        amount_orig,
        price,
        updated_at: "2019-02-20T10:15:30".to_string(),
        pair: "ETHUSD".to_string(),
        status: "EXECUTED @ 1.0(1.0)".to_string(),
    }
}

// ── Book Order Properties ───────────────────────────────────

proptest! {
    /// Side follows the sign of the raw amount.
    #[test]
    fn order_side_follows_amount_sign(amount in signed_decimal(), price in positive_decimal()) {
        let order = Order::to_order("ETHUSD", &RawBookOrder { id: 1, amount, price }).unwrap();
        prop_assert_eq!(order.is_sell, amount > Decimal::ZERO);
        prop_assert_eq!(order.is_sell, is_sell_amount(amount));
    }

    /// Amount is the absolute quote amount, never negative.
    #[test]
    fn order_amount_is_quote_amount(amount in signed_decimal(), price in positive_decimal()) {
        let order = Order::to_order("ETHUSD", &RawBookOrder { id: 1, amount, price }).unwrap();
        prop_assert!(order.amount > Decimal::ZERO);
        prop_assert_eq!(order.amount, amount.abs() * price);
    }

    /// The normalized price is the reciprocal of the quoted price.
    #[test]
    fn order_price_is_reciprocal(amount in signed_decimal(), price in positive_decimal()) {
        let order = Order::to_order("ETHUSD", &RawBookOrder { id: 7, amount, price }).unwrap();
        let product = order.price * price;
        prop_assert!(
            (product - Decimal::ONE).abs() < TOLERANCE,
            "price {} * quoted {} = {}", order.price, price, product
        );
    }

    /// A zero raw amount is always rejected.
    #[test]
    fn order_zero_amount_rejected(price in positive_decimal()) {
        let raw = RawBookOrder { id: 1, amount: Decimal::ZERO, price };
        prop_assert!(Order::to_order("ETHUSD", &raw).is_err());
    }
}

// ── Trade Properties ────────────────────────────────────────

proptest! {
    /// Trade price inverts the history price and amount is the total.
    #[test]
    fn trade_price_round_trips(amount in signed_decimal(), price in positive_decimal()) {
        let trade = Trade::to_trade(&history(3, amount, price)).unwrap();

        prop_assert_eq!(trade.is_sell, amount > Decimal::ZERO);
        prop_assert_eq!(trade.amount, (price * amount).abs());
        prop_assert!((trade.price * price - Decimal::ONE).abs() < TOLERANCE);
        prop_assert_eq!(trade.timestamp, 1_550_657_730);
    }

    /// Equal trades collapse in a set; distinct ids do not.
    #[test]
    fn trade_identity_is_structural(
        amount in signed_decimal(),
        price in positive_decimal(),
        id in 1i64..1_000_000,
    ) {
        let trade = Trade::to_trade(&history(id, amount, price)).unwrap();
        let again = Trade::to_trade(&history(id, amount, price)).unwrap();
        let other = Trade::to_trade(&history(id + 1, amount, price)).unwrap();

        prop_assert_eq!(&trade, &again);
        prop_assert_ne!(&trade, &other);

        let set: HashSet<Trade> = [trade, again, other].into_iter().collect();
        prop_assert_eq!(set.len(), 2);
    }

    /// Changing any single field yields a distinct trade.
    #[test]
    fn trade_differs_on_every_field(
        amount in signed_decimal(),
        price in positive_decimal(),
        field in 0usize..6,
    ) {
        let trade = Trade::to_trade(&history(5, amount, price)).unwrap();
        let mut changed = trade.clone();
        match field {
            0 => changed.trade_id += 1,
            1 => changed.timestamp += 1,
            2 => changed.is_sell = !changed.is_sell,
            3 => changed.pair.push('X'),
            4 => changed.price += Decimal::ONE,
            _ => changed.amount += Decimal::ONE,
        }

        prop_assert_ne!(&trade, &changed);
        let set: HashSet<Trade> = [trade, changed].into_iter().collect();
        prop_assert_eq!(set.len(), 2);
    }
}

// ── Wad Conversion Properties ───────────────────────────────

proptest! {
    /// Whole token amounts scale by exactly 10^18.
    #[test]
    fn wad_scales_whole_amounts(units in 0u64..1_000_000_000) {
        let wad = to_wad(Decimal::from(units)).unwrap();
        prop_assert_eq!(wad, U256::from(units) * U256::from(10u64).pow(U256::from(18u8)));
    }
}
