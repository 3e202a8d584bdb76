pub mod analytics;
pub mod asset;
pub mod chart;
pub mod dashboard;
pub mod portfolio;
pub mod price;
pub mod settings;
