use tracing::{debug, trace};

use crate::models::chart::PortfolioValuePoint;
use crate::models::portfolio::Position;
use crate::models::price::TimeSeriesPricePoint;
use crate::services::price_service::PriceService;

/// Generates chart-ready data sets from positions and price history.
///
/// The core computes all the numbers; the frontend only renders.
pub struct ChartService {
    price_service: PriceService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            price_service: PriceService::new(),
        }
    }

    /// Value the given positions on every date present in `price_series`.
    ///
    /// Quantities are taken as constant over time: today's composition is
    /// projected backwards onto historical prices. On each date, a position
    /// without a price for that date is left out of that date's sum only.
    ///
    /// Returns one point per distinct date in the series, ascending by date
    /// string. A date where no position resolves still appears with value 0.
    pub fn compute_portfolio_value_series(
        &self,
        positions: &[Position],
        price_series: &[TimeSeriesPricePoint],
    ) -> Vec<PortfolioValuePoint> {
        let prices_by_date = self.price_service.index_price_series(price_series);
        let mut series = Vec::with_capacity(prices_by_date.len());

        for (date, prices) in prices_by_date {
            let mut value = 0.0;
            let mut resolved = 0usize;

            for pos in positions {
                match prices.get(pos.asset_id.as_str()) {
                    Some(price) => {
                        value += pos.quantity * price;
                        resolved += 1;
                    }
                    None => {
                        debug!(date, asset_id = %pos.asset_id, "No historical price, skipping for this date");
                    }
                }
            }

            trace!(date, resolved, value, "Valued portfolio for date");

            series.push(PortfolioValuePoint {
                date: date.to_string(),
                value,
            });
        }

        series
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
