//! Domain layer - exchange value objects and normalization.
//!
//! Pure conversions from raw Trustless API records into `Order` and
//! `Trade`, plus the fixed-point helpers they rely on. No I/O here.

pub mod error;
pub mod numeric;
pub mod order;
pub mod trade;

pub use error::DomainError;
pub use order::{Order, RawBookOrder, is_sell_amount};
pub use trade::{RawHistoryOrder, RawPublicTrade, Trade};
