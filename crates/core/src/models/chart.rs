use serde::{Deserialize, Serialize};

/// A single data point for the historical value chart.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuePoint {
    /// ISO date, as it appeared in the price series
    pub date: String,

    /// Total portfolio value on this date
    pub value: f64,
}
