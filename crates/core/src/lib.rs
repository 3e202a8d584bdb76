pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    analytics::{EnrichedPositions, PortfolioOverview},
    chart::PortfolioValuePoint,
    dashboard::{DashboardData, DashboardView},
    settings::Settings,
};
use providers::traits::DataProvider;
use services::{chart_service::ChartService, valuation_service::ValuationService};
use tracing::{info, warn};

use errors::CoreError;

/// Main entry point for the portfolio dashboard core library.
/// Holds the data provider, the valuation settings and the services that
/// turn fetched data into dashboard views.
#[must_use]
pub struct Dashboard {
    provider: Box<dyn DataProvider>,
    settings: Settings,
    valuation_service: ValuationService,
    chart_service: ChartService,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard over `provider` with default settings.
    pub fn new(provider: Box<dyn DataProvider>) -> Self {
        Self::with_settings(provider, Settings::default())
    }

    pub fn with_settings(provider: Box<dyn DataProvider>, settings: Settings) -> Self {
        Self {
            provider,
            valuation_service: ValuationService::with_settings(&settings),
            chart_service: ChartService::new(),
            settings,
        }
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. Takes effect on the next valuation.
    pub fn set_settings(&mut self, settings: Settings) {
        self.valuation_service = ValuationService::with_settings(&settings);
        self.settings = settings;
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    // ── Data Loading ────────────────────────────────────────────────

    /// Fetch assets, portfolio, current prices and price history concurrently.
    ///
    /// All four must succeed; the first error aborts the load.
    pub async fn fetch_all(&self) -> Result<DashboardData, CoreError> {
        let provider = self.provider.as_ref();
        info!(provider = provider.name(), "Fetching dashboard data");

        let (assets, portfolio, current_prices, historical_prices) = futures::try_join!(
            provider.fetch_assets(),
            provider.fetch_portfolio(),
            provider.fetch_current_prices(),
            provider.fetch_historical_prices(),
        )
        .inspect_err(|e| warn!(provider = provider.name(), error = %e, "Dashboard fetch failed"))?;

        Ok(DashboardData {
            assets,
            portfolio,
            current_prices,
            historical_prices,
        })
    }

    /// Fetch everything and build the dashboard view.
    pub async fn load(&self) -> Result<DashboardView, CoreError> {
        let data = self.fetch_all().await?;
        self.build_view(&data)
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Build the overview and the historical value series from fetched data.
    ///
    /// Fails only in strict mode, when an input carries a non-finite number.
    pub fn build_view(&self, data: &DashboardData) -> Result<DashboardView, CoreError> {
        if self.settings.strict_validation {
            self.valuation_service.validate_inputs(
                &data.portfolio,
                &data.current_prices,
                &data.historical_prices,
            )?;
        }

        let overview = self.valuation_service.build_portfolio_overview(
            &data.portfolio,
            &data.assets,
            &data.current_prices,
        );
        let history = self.portfolio_value_series(data);

        info!(
            portfolio_id = %data.portfolio.id,
            positions = overview.positions.len(),
            total_value = overview.total_value,
            history_points = history.len(),
            "Built dashboard view"
        );

        Ok(DashboardView { overview, history })
    }

    /// Join positions with assets and current prices, without aggregation.
    #[must_use]
    pub fn enrich_positions(&self, data: &DashboardData) -> EnrichedPositions {
        self.valuation_service
            .enrich_positions(&data.portfolio, &data.assets, &data.current_prices)
    }

    /// Build just the current snapshot.
    #[must_use]
    pub fn portfolio_overview(&self, data: &DashboardData) -> PortfolioOverview {
        self.valuation_service.build_portfolio_overview(
            &data.portfolio,
            &data.assets,
            &data.current_prices,
        )
    }

    /// Build just the historical value series for the current positions.
    #[must_use]
    pub fn portfolio_value_series(&self, data: &DashboardData) -> Vec<PortfolioValuePoint> {
        self.chart_service
            .compute_portfolio_value_series(&data.portfolio.positions, &data.historical_prices)
    }
}
