use chrono::{DateTime, TimeZone, Utc};
use portfolio_dashboard_core::models::analytics::{AllocationItem, EnrichedPosition, PortfolioOverview};
use portfolio_dashboard_core::models::asset::{Asset, AssetType};
use portfolio_dashboard_core::models::chart::PortfolioValuePoint;
use portfolio_dashboard_core::models::portfolio::{Portfolio, Position};
use portfolio_dashboard_core::models::price::{Price, TimeSeriesPricePoint};
use portfolio_dashboard_core::models::settings::{PriceSelection, Settings};

fn ts(y: i32, m: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, day, 0, 0, 0).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  AssetType
// ═══════════════════════════════════════════════════════════════════

mod asset_type {
    use super::*;

    #[test]
    fn keys_match_wire_names() {
        assert_eq!(AssetType::Stock.as_str(), "stock");
        assert_eq!(AssetType::Crypto.as_str(), "crypto");
        assert_eq!(AssetType::Fiat.as_str(), "fiat");
    }

    #[test]
    fn labels() {
        assert_eq!(AssetType::Stock.label(), "Stocks");
        assert_eq!(AssetType::Crypto.label(), "Crypto");
        assert_eq!(AssetType::Fiat.label(), "Fiat");
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(AssetType::Crypto.to_string(), "crypto");
    }

    #[test]
    fn all_lists_every_class_once() {
        assert_eq!(AssetType::ALL.len(), 3);
        assert!(AssetType::ALL.contains(&AssetType::Stock));
        assert!(AssetType::ALL.contains(&AssetType::Crypto));
        assert!(AssetType::ALL.contains(&AssetType::Fiat));
    }

    #[test]
    fn deserializes_lowercase() {
        let at: AssetType = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(at, AssetType::Crypto);
    }

    #[test]
    fn unknown_class_is_rejected() {
        let result: Result<AssetType, _> = serde_json::from_str("\"metal\"");
        assert!(result.is_err());
    }

    #[test]
    fn capitalized_class_is_rejected() {
        let result: Result<AssetType, _> = serde_json::from_str("\"Stock\"");
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Asset
// ═══════════════════════════════════════════════════════════════════

mod asset {
    use super::*;

    #[test]
    fn convenience_constructors() {
        assert_eq!(Asset::stock("aapl", "AAPL").asset_type, AssetType::Stock);
        assert_eq!(Asset::crypto("btc", "BTC").asset_type, AssetType::Crypto);
        assert_eq!(Asset::fiat("gbp", "GBP").asset_type, AssetType::Fiat);
    }

    #[test]
    fn ids_are_kept_verbatim() {
        let asset = Asset::stock("aapl", "Apple");
        assert_eq!(asset.id, "aapl");
        assert_eq!(asset.name, "Apple");
    }

    #[test]
    fn deserializes_type_field() {
        let json = r#"{ "id": "btc", "name": "BTC", "type": "crypto" }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset, Asset::crypto("btc", "BTC"));
    }

    #[test]
    fn serializes_type_field() {
        let value = serde_json::to_value(Asset::fiat("gbp", "GBP")).unwrap();
        assert_eq!(value["type"], "fiat");
        assert!(value.get("asset_type").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio / Position
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": "pf1",
            "asOf": "2023-01-01T00:00:00Z",
            "positions": [
                { "id": 1, "asset": "aapl", "quantity": 2, "asOf": "2023-01-01T00:00:00Z" },
                { "id": 2, "asset": "btc", "quantity": 0.1, "asOf": "2023-01-01T00:00:00Z" }
            ]
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.id, "pf1");
        assert_eq!(portfolio.as_of, ts(2023, 1, 1));
        assert_eq!(portfolio.positions.len(), 2);
        assert_eq!(portfolio.positions[0].asset_id, "aapl");
        assert_eq!(portfolio.positions[1].quantity, 0.1);
    }

    #[test]
    fn positions_default_to_empty() {
        let json = r#"{ "id": "pf1", "asOf": "2023-01-01T00:00:00Z" }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert!(portfolio.positions.is_empty());
    }

    #[test]
    fn position_serializes_asset_reference_as_asset() {
        let pos = Position::new(7, "eth", 1.5, ts(2023, 1, 1));
        let value = serde_json::to_value(&pos).unwrap();
        assert_eq!(value["asset"], "eth");
        assert_eq!(value["id"], 7);
        assert!(value.get("asOf").is_some());
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let json = r#"{ "id": 1, "asset": "aapl", "quantity": "two", "asOf": "2023-01-01T00:00:00Z" }"#;
        let result: Result<Position, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Price / TimeSeriesPricePoint
// ═══════════════════════════════════════════════════════════════════

mod price {
    use super::*;

    #[test]
    fn price_deserializes_wire_shape() {
        let json = r#"{ "id": "p1", "asset": "aapl", "price": 150, "asOf": "2023-01-01T00:00:00Z" }"#;
        let price: Price = serde_json::from_str(json).unwrap();
        assert_eq!(price, Price::new("p1", "aapl", 150.0, ts(2023, 1, 1)));
    }

    #[test]
    fn price_point_keeps_date_string() {
        let json = r#"{ "date": "2023-01-02", "asset": "btc", "price": 20000 }"#;
        let point: TimeSeriesPricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, "2023-01-02");
        assert_eq!(point.asset_id, "btc");
        assert_eq!(point.price, 20000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Derived views
// ═══════════════════════════════════════════════════════════════════

mod derived {
    use super::*;

    #[test]
    fn enriched_position_serializes_camel_case() {
        let pos = EnrichedPosition {
            position_id: 1,
            asset_id: "aapl".into(),
            asset_name: "AAPL".into(),
            asset_type: AssetType::Stock,
            quantity: 2.0,
            price: 150.0,
            value: 300.0,
            allocation_pct: 0.5,
        };
        let value = serde_json::to_value(&pos).unwrap();
        assert_eq!(value["positionId"], 1);
        assert_eq!(value["assetName"], "AAPL");
        assert_eq!(value["assetType"], "stock");
        assert_eq!(value["allocationPct"], 0.5);
    }

    #[test]
    fn overview_serializes_camel_case() {
        let overview = PortfolioOverview {
            as_of: ts(2023, 1, 3),
            total_value: 100.0,
            positions: Vec::new(),
            allocation_by_asset: vec![AllocationItem {
                key: "aapl".into(),
                label: "AAPL".into(),
                value: 100.0,
                allocation_pct: 1.0,
            }],
            allocation_by_class: Vec::new(),
        };
        let value = serde_json::to_value(&overview).unwrap();
        assert_eq!(value["totalValue"], 100.0);
        assert_eq!(value["allocationByAsset"][0]["key"], "aapl");
        assert!(value["allocationByClass"].as_array().unwrap().is_empty());
    }

    #[test]
    fn value_point_shape() {
        let point = PortfolioValuePoint {
            date: "2023-01-01".into(),
            value: 2300.0,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["date"], "2023-01-01");
        assert_eq!(value["value"], 2300.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.price_selection, PriceSelection::LastInCollection);
        assert!(!settings.strict_validation);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{ "priceSelection": "latestAsOf", "strictValidation": true }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.price_selection, PriceSelection::LatestAsOf);
        assert!(settings.strict_validation);
    }
}
