use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::errors::CoreError;
use crate::models::analytics::{
    AllocationItem, EnrichedPosition, EnrichedPositions, PortfolioOverview,
};
use crate::models::asset::Asset;
use crate::models::portfolio::Portfolio;
use crate::models::price::{Price, TimeSeriesPricePoint};
use crate::models::settings::Settings;
use crate::services::price_service::PriceService;

/// Values a portfolio snapshot: joins positions with asset metadata and
/// current prices, then breaks the result down by asset and by asset class.
///
/// Pure business logic: no I/O, no caching. Every call recomputes from the
/// inputs, and none of the operations can fail.
pub struct ValuationService {
    price_service: PriceService,
}

impl ValuationService {
    pub fn new() -> Self {
        Self {
            price_service: PriceService::new(),
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            price_service: PriceService::with_selection(settings.price_selection),
        }
    }

    /// Join every position with its asset and current price.
    ///
    /// Positions whose asset or price cannot be resolved are dropped: they
    /// appear nowhere in the output and add nothing to `total_value`.
    /// Survivors keep the portfolio's position order.
    pub fn enrich_positions(
        &self,
        portfolio: &Portfolio,
        assets: &[Asset],
        prices: &[Price],
    ) -> EnrichedPositions {
        let asset_index = self.price_service.index_assets(assets);
        let price_index = self.price_service.index_current_prices(prices);

        let mut positions = Vec::with_capacity(portfolio.positions.len());
        let mut total_value = 0.0;

        for pos in &portfolio.positions {
            let asset_id = pos.asset_id.as_str();
            let (Some(asset), Some(price)) = (asset_index.get(asset_id), price_index.get(asset_id))
            else {
                debug!(
                    position_id = pos.id,
                    asset_id,
                    "Skipping position without a matching asset or price"
                );
                continue;
            };

            let value = pos.quantity * price.price;
            total_value += value;

            positions.push(EnrichedPosition {
                position_id: pos.id,
                asset_id: asset.id.clone(),
                asset_name: asset.name.clone(),
                asset_type: asset.asset_type,
                quantity: pos.quantity,
                price: price.price,
                value,
                allocation_pct: 0.0, // filled below
            });
        }

        // Second pass: allocation needs the final total
        for position in &mut positions {
            position.allocation_pct = allocation_pct(position.value, total_value);
        }

        EnrichedPositions {
            positions,
            total_value,
        }
    }

    /// Allocation per asset id, largest value first.
    ///
    /// Positions sharing an asset id are summed; the label is the asset name
    /// of the first position seen for that id.
    pub fn aggregate_by_asset(
        &self,
        positions: &[EnrichedPosition],
        total_value: f64,
    ) -> Vec<AllocationItem> {
        aggregate(positions, total_value, |pos| {
            (pos.asset_id.clone(), pos.asset_name.clone())
        })
    }

    /// Allocation per asset class, largest value first.
    ///
    /// Keys are the class wire names ("stock", "crypto", "fiat"), labels
    /// come from `AssetType::label`.
    pub fn aggregate_by_asset_class(
        &self,
        positions: &[EnrichedPosition],
        total_value: f64,
    ) -> Vec<AllocationItem> {
        aggregate(positions, total_value, |pos| {
            (
                pos.asset_type.as_str().to_string(),
                pos.asset_type.label().to_string(),
            )
        })
    }

    /// Build the full dashboard snapshot for a portfolio.
    pub fn build_portfolio_overview(
        &self,
        portfolio: &Portfolio,
        assets: &[Asset],
        prices: &[Price],
    ) -> PortfolioOverview {
        let EnrichedPositions {
            positions,
            total_value,
        } = self.enrich_positions(portfolio, assets, prices);

        let allocation_by_asset = self.aggregate_by_asset(&positions, total_value);
        let allocation_by_class = self.aggregate_by_asset_class(&positions, total_value);

        trace!(
            portfolio_id = %portfolio.id,
            positions = positions.len(),
            total_value,
            "Built portfolio overview"
        );

        PortfolioOverview {
            as_of: portfolio.as_of,
            total_value,
            positions,
            allocation_by_asset,
            allocation_by_class,
        }
    }

    /// Reject non-finite quantities and prices.
    ///
    /// Only used in strict mode; the valuation operations themselves accept
    /// any numbers and let NaN/infinity flow through the arithmetic.
    pub fn validate_inputs(
        &self,
        portfolio: &Portfolio,
        prices: &[Price],
        price_series: &[TimeSeriesPricePoint],
    ) -> Result<(), CoreError> {
        if let Some(pos) = portfolio.positions.iter().find(|p| !p.quantity.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "position {} ({}) has non-finite quantity {}",
                pos.id, pos.asset_id, pos.quantity
            )));
        }
        if let Some(price) = prices.iter().find(|p| !p.price.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "price {} ({}) is non-finite: {}",
                price.id, price.asset_id, price.price
            )));
        }
        if let Some(point) = price_series.iter().find(|p| !p.price.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "historical price for {} on {} is non-finite: {}",
                point.asset_id, point.date, point.price
            )));
        }
        Ok(())
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}

/// `value / total_value`, or 0 when there is no positive total to divide by.
pub(crate) fn allocation_pct(value: f64, total_value: f64) -> f64 {
    if total_value > 0.0 {
        value / total_value
    } else {
        0.0
    }
}

/// Group positions by the `(key, label)` returned from `key_of`, summing
/// values. Groups keep first-seen order until the final sort, which is
/// stable, so equal values stay in first-seen order.
fn aggregate<F>(positions: &[EnrichedPosition], total_value: f64, key_of: F) -> Vec<AllocationItem>
where
    F: Fn(&EnrichedPosition) -> (String, String),
{
    let mut items: Vec<AllocationItem> = Vec::new();
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();

    for pos in positions {
        let (key, label) = key_of(pos);
        match slot_by_key.get(&key) {
            Some(&slot) => items[slot].value += pos.value,
            None => {
                slot_by_key.insert(key.clone(), items.len());
                items.push(AllocationItem {
                    key,
                    label,
                    value: pos.value,
                    allocation_pct: 0.0,
                });
            }
        }
    }

    for item in &mut items {
        item.allocation_pct = allocation_pct(item.value, total_value);
    }

    items.sort_by(|a, b| by_value_desc(a.value, b.value));
    items
}

/// Largest first, NaN after every number. A total order, so `sort_by`
/// stays well-defined when non-finite values reach the aggregation.
fn by_value_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
