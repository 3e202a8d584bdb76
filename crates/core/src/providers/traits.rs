use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::portfolio::Portfolio;
use crate::models::price::{Price, TimeSeriesPricePoint};

/// Source of the four collections the dashboard values.
///
/// Implementations own all transport concerns; the valuation services only
/// ever see the fetched values. The four fetches are independent and may be
/// awaited concurrently.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Static asset reference data.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, CoreError>;

    /// The portfolio snapshot to value.
    async fn fetch_portfolio(&self) -> Result<Portfolio, CoreError>;

    /// Latest price snapshot per asset.
    async fn fetch_current_prices(&self) -> Result<Vec<Price>, CoreError>;

    /// Daily price history, in no particular order.
    async fn fetch_historical_prices(&self) -> Result<Vec<TimeSeriesPricePoint>, CoreError>;
}
