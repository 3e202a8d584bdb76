use std::collections::{BTreeMap, HashMap};

use crate::models::asset::Asset;
use crate::models::price::{Price, TimeSeriesPricePoint};
use crate::models::settings::PriceSelection;

/// Builds the id-keyed lookup tables the valuation engine joins against.
///
/// All tables are built by ordered insertion: when a feed carries several
/// entries for the same key, the later entry overwrites the earlier one.
/// `PriceSelection::LatestAsOf` narrows this for current prices by only
/// letting an entry overwrite when its `as_of` is not older.
pub struct PriceService {
    selection: PriceSelection,
}

impl PriceService {
    pub fn new() -> Self {
        Self::with_selection(PriceSelection::default())
    }

    pub fn with_selection(selection: PriceSelection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> PriceSelection {
        self.selection
    }

    /// Map asset id → asset. Last entry wins.
    pub fn index_assets<'a>(&self, assets: &'a [Asset]) -> HashMap<&'a str, &'a Asset> {
        let mut index = HashMap::with_capacity(assets.len());
        for asset in assets {
            index.insert(asset.id.as_str(), asset);
        }
        index
    }

    /// Map asset id → current price, according to the configured selection.
    pub fn index_current_prices<'a>(&self, prices: &'a [Price]) -> HashMap<&'a str, &'a Price> {
        let mut index: HashMap<&str, &Price> = HashMap::with_capacity(prices.len());
        for price in prices {
            match self.selection {
                PriceSelection::LastInCollection => {
                    index.insert(price.asset_id.as_str(), price);
                }
                PriceSelection::LatestAsOf => {
                    let replace = index
                        .get(price.asset_id.as_str())
                        .map_or(true, |current| price.as_of >= current.as_of);
                    if replace {
                        index.insert(price.asset_id.as_str(), price);
                    }
                }
            }
        }
        index
    }

    /// Group a price series by date, then map asset id → price within each date.
    ///
    /// The outer map iterates in ascending lexicographic date order. Duplicate
    /// `(date, asset)` entries resolve to the last one seen.
    pub fn index_price_series<'a>(
        &self,
        series: &'a [TimeSeriesPricePoint],
    ) -> BTreeMap<&'a str, HashMap<&'a str, f64>> {
        let mut by_date: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
        for point in series {
            by_date
                .entry(point.date.as_str())
                .or_default()
                .insert(point.asset_id.as_str(), point.price);
        }
        by_date
    }
}

impl Default for PriceService {
    fn default() -> Self {
        Self::new()
    }
}
