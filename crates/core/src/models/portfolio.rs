use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A holding of one asset inside a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Position id, unique within its portfolio
    pub id: u64,

    /// Id of the held asset (matches `Asset::id`)
    #[serde(rename = "asset")]
    pub asset_id: String,

    /// Units held
    pub quantity: f64,

    /// When this position snapshot was taken
    pub as_of: DateTime<Utc>,
}

impl Position {
    pub fn new(id: u64, asset_id: impl Into<String>, quantity: f64, as_of: DateTime<Utc>) -> Self {
        Self {
            id,
            asset_id: asset_id.into(),
            quantity,
            as_of,
        }
    }
}

/// A snapshot of positions valid as of a single timestamp.
///
/// Position order is significant: enriched positions are reported in the
/// same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,

    pub as_of: DateTime<Utc>,

    #[serde(default)]
    pub positions: Vec<Position>,
}

impl Portfolio {
    pub fn new(id: impl Into<String>, as_of: DateTime<Utc>, positions: Vec<Position>) -> Self {
        Self {
            id: id.into(),
            as_of,
            positions,
        }
    }
}
