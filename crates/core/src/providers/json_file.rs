use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::portfolio::Portfolio;
use crate::models::price::{Price, TimeSeriesPricePoint};

use super::traits::DataProvider;

pub const ASSETS_FILE: &str = "assets.json";
pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const CURRENT_PRICES_FILE: &str = "prices-current.json";
pub const HISTORICAL_PRICES_FILE: &str = "prices-history.json";

/// Reads the dashboard's mock-data JSON documents from a directory.
///
/// - `assets.json`: `Asset[]`
/// - `portfolio.json`: `Portfolio`
/// - `prices-current.json`: `Price[]`
/// - `prices-history.json`: `TimeSeriesPricePoint[]`
///
/// A missing document is reported like a missing endpoint: `CoreError::Api`
/// with status 404. Any other read failure is `CoreError::FileIO`, and a
/// document that does not match its shape is `CoreError::Deserialization`.
///
/// Documents are read with blocking `std::fs` calls, so the fetches never
/// yield and a concurrent `Dashboard::fetch_all` reads them one after
/// another. Meant for small fixture files, not for large data sets.
pub struct JsonFileProvider {
    root: PathBuf,
}

impl JsonFileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, CoreError> {
        let path = self.root.join(file_name);
        debug!("Reading {}", path.display());

        let bytes = match std::fs::read(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CoreError::Api {
                    provider: self.name().to_string(),
                    status: 404,
                    message: format!("{file_name} not found in {}", self.root.display()),
                });
            }
            read => read?,
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::Deserialization(format!("{file_name}: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "JsonFile"
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>, CoreError> {
        self.read_json(ASSETS_FILE)
    }

    async fn fetch_portfolio(&self) -> Result<Portfolio, CoreError> {
        self.read_json(PORTFOLIO_FILE)
    }

    async fn fetch_current_prices(&self) -> Result<Vec<Price>, CoreError> {
        self.read_json(CURRENT_PRICES_FILE)
    }

    async fn fetch_historical_prices(&self) -> Result<Vec<TimeSeriesPricePoint>, CoreError> {
        self.read_json(HISTORICAL_PRICES_FILE)
    }
}
