use serde::{Deserialize, Serialize};

/// How the current price of an asset is chosen when the price feed carries
/// several entries for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceSelection {
    /// The entry appearing last in the feed wins.
    #[default]
    LastInCollection,
    /// The entry with the greatest `asOf` wins; equal timestamps fall back
    /// to last-in-collection.
    LatestAsOf,
}

/// Valuation settings, passed explicitly to the services and the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub price_selection: PriceSelection,

    /// Reject non-finite quantities and prices before valuation instead of
    /// letting them propagate through the arithmetic.
    pub strict_validation: bool,
}
