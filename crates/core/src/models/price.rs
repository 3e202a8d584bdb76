use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current (latest) price snapshot for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: String,

    /// Id of the priced asset (matches `Asset::id`)
    #[serde(rename = "asset")]
    pub asset_id: String,

    /// Unit price in USD
    pub price: f64,

    pub as_of: DateTime<Utc>,
}

impl Price {
    pub fn new(
        id: impl Into<String>,
        asset_id: impl Into<String>,
        price: f64,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            asset_id: asset_id.into(),
            price,
            as_of,
        }
    }
}

/// One historical price for one asset on one date.
///
/// `date` is kept as the ISO 8601 string received from the provider. Dates
/// are compared lexicographically, which is chronological for ISO dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPricePoint {
    pub date: String,

    #[serde(rename = "asset")]
    pub asset_id: String,

    pub price: f64,
}

impl TimeSeriesPricePoint {
    pub fn new(date: impl Into<String>, asset_id: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            asset_id: asset_id.into(),
            price,
        }
    }
}
