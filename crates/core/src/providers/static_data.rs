use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::portfolio::Portfolio;
use crate::models::price::{Price, TimeSeriesPricePoint};

use super::traits::DataProvider;

/// In-memory provider serving fixed collections.
///
/// Useful for embedding fixtures and for tests. Every fetch returns a fresh
/// clone, so callers can never observe each other's mutations.
#[derive(Debug, Clone)]
pub struct StaticDataProvider {
    assets: Vec<Asset>,
    portfolio: Portfolio,
    current_prices: Vec<Price>,
    historical_prices: Vec<TimeSeriesPricePoint>,
}

impl StaticDataProvider {
    /// Start from an empty portfolio with the given id and timestamp.
    pub fn new(portfolio_id: impl Into<String>, as_of: DateTime<Utc>) -> Self {
        Self {
            assets: Vec::new(),
            portfolio: Portfolio::new(portfolio_id, as_of, Vec::new()),
            current_prices: Vec::new(),
            historical_prices: Vec::new(),
        }
    }

    pub fn with_assets(mut self, assets: Vec<Asset>) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_portfolio(mut self, portfolio: Portfolio) -> Self {
        self.portfolio = portfolio;
        self
    }

    pub fn with_current_prices(mut self, prices: Vec<Price>) -> Self {
        self.current_prices = prices;
        self
    }

    pub fn with_historical_prices(mut self, points: Vec<TimeSeriesPricePoint>) -> Self {
        self.historical_prices = points;
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataProvider for StaticDataProvider {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>, CoreError> {
        Ok(self.assets.clone())
    }

    async fn fetch_portfolio(&self) -> Result<Portfolio, CoreError> {
        Ok(self.portfolio.clone())
    }

    async fn fetch_current_prices(&self) -> Result<Vec<Price>, CoreError> {
        Ok(self.current_prices.clone())
    }

    async fn fetch_historical_prices(&self) -> Result<Vec<TimeSeriesPricePoint>, CoreError> {
        Ok(self.historical_prices.clone())
    }
}
