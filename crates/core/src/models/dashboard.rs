use serde::{Deserialize, Serialize};

use super::analytics::PortfolioOverview;
use super::asset::Asset;
use super::chart::PortfolioValuePoint;
use super::portfolio::Portfolio;
use super::price::{Price, TimeSeriesPricePoint};

/// The four collections fetched from a data provider, all resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub assets: Vec<Asset>,
    pub portfolio: Portfolio,
    pub current_prices: Vec<Price>,
    pub historical_prices: Vec<TimeSeriesPricePoint>,
}

/// Everything the dashboard page renders: the current snapshot and the
/// historical value chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub overview: PortfolioOverview,
    pub history: Vec<PortfolioValuePoint>,
}
