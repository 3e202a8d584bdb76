use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::AssetType;

/// A position joined with its asset metadata and current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPosition {
    /// Id of the source position
    pub position_id: u64,

    pub asset_id: String,

    /// Asset display name
    pub asset_name: String,

    pub asset_type: AssetType,

    /// Units held
    pub quantity: f64,

    /// Current unit price
    pub price: f64,

    /// Market value: quantity × price, unrounded
    pub value: f64,

    /// Share of total portfolio value, 0..=1
    pub allocation_pct: f64,
}

/// Output of the enrich step: surviving positions plus their summed value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPositions {
    pub positions: Vec<EnrichedPosition>,
    pub total_value: f64,
}

/// One slice of an allocation breakdown (per asset or per asset class).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationItem {
    /// Asset id or asset class key ("stock", "crypto", "fiat")
    pub key: String,

    /// Asset name or class label ("AAPL", "Stocks")
    pub label: String,

    /// Aggregated market value
    pub value: f64,

    /// Share of total portfolio value, 0..=1
    pub allocation_pct: f64,
}

/// Everything the dashboard renders for the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    /// Copied from the source portfolio
    pub as_of: DateTime<Utc>,

    pub total_value: f64,

    pub positions: Vec<EnrichedPosition>,

    /// Sorted by value, largest first
    pub allocation_by_asset: Vec<AllocationItem>,

    /// Sorted by value, largest first
    pub allocation_by_class: Vec<AllocationItem>,
}
