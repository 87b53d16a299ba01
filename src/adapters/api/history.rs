//! Trade History Adapter - Executed Orders and Public Tape
//!
//! `get_trades` reads the account's order history and keeps executed
//! entries. `get_all_trades` reads the public tape for a pair. The two
//! responses have different shapes and map into `Trade` differently.

use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::ApiError;
use super::trustless::{TrustlessApi, ensure_first_page};
use crate::domain::trade::{RawHistoryOrder, RawPublicTrade, Trade};

const HISTORY_ENDPOINT: &str = "/trustless/v1/r/orders/hist";

impl TrustlessApi {
    /// Own executed trades. Only `page_number == 1` is supported.
    ///
    /// The history endpoint is not scoped by pair: every executed entry
    /// of the account is returned regardless of `pair`. Entries are
    /// filtered on `status` before the rest of their fields are decoded.
    #[instrument(skip(self))]
    pub async fn get_trades(&self, pair: &str, page_number: u32) -> Result<Vec<Trade>, ApiError> {
        ensure_first_page(page_number)?;

        let history: Vec<serde_json::Value> = self.signed_read(HISTORY_ENDPOINT).await?;

        let trades = history
            .iter()
            .filter(|entry| RawHistoryOrder::entry_is_executed(entry))
            .map(|entry| -> Result<Trade, ApiError> {
                let raw = RawHistoryOrder::deserialize(entry).map_err(|source| ApiError::Schema {
                    url: format!("{}{HISTORY_ENDPOINT}", self.api_server().trim_end_matches('/')),
                    source,
                })?;
                Ok(Trade::to_trade(&raw)?)
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        debug!(
            history = history.len(),
            executed = trades.len(),
            "Order history fetched"
        );
        Ok(trades)
    }

    /// Public trades for `pair`. Only `page_number == 1` is supported.
    #[instrument(skip(self))]
    pub async fn get_all_trades(
        &self,
        pair: &str,
        page_number: u32,
    ) -> Result<Vec<Trade>, ApiError> {
        ensure_first_page(page_number)?;

        let tape: Vec<RawPublicTrade> = self.http.get(&format!("/v1/trades/{pair}")).await?;

        Ok(tape
            .iter()
            .map(|entry| Trade::from_public(pair, entry))
            .collect())
    }
}
