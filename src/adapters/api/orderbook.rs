//! Order Book Adapter - Live Orders per Pair
//!
//! Fetches the account's live orders for a pair from the Trustless API
//! and normalizes them into `Order` values. Results keep the server's
//! ordering.

use tracing::{debug, instrument};

use super::error::ApiError;
use super::trustless::TrustlessApi;
use crate::domain::order::{Order, RawBookOrder};

impl TrustlessApi {
    /// Live orders for `pair` (e.g. `"ETHUSD"`).
    ///
    /// Signed read of `/trustless/v1/r/orders/t{pair}`.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, pair: &str) -> Result<Vec<Order>, ApiError> {
        let endpoint = format!("/trustless/v1/r/orders/t{pair}");
        let raw: Vec<RawBookOrder> = self.signed_read(&endpoint).await?;

        let orders = raw
            .iter()
            .map(|entry| Order::to_order(pair, entry))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(pair, orders = orders.len(), "Order book fetched");
        Ok(orders)
    }
}
