use serde::{Deserialize, Serialize};

/// The class of a tracked asset.
///
/// Closed set: anything other than `"stock"`, `"crypto"` or `"fiat"` on the
/// wire is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Stocks / equities (AAPL, MSFT, etc.)
    Stock,
    /// Cryptocurrencies (BTC, ETH, etc.)
    Crypto,
    /// Fiat currencies (USD, GBP, etc.)
    Fiat,
}

impl AssetType {
    /// Every asset class, in declaration order.
    pub const ALL: [AssetType; 3] = [AssetType::Stock, AssetType::Crypto, AssetType::Fiat];

    /// Grouping key, identical to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
            AssetType::Fiat => "fiat",
        }
    }

    /// Display label used by the allocation-by-class view.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stocks",
            AssetType::Crypto => "Crypto",
            AssetType::Fiat => "Fiat",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference data for a tradable asset. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset id referenced by positions and prices (e.g., "aapl", "btc")
    pub id: String,

    /// Human-readable name (e.g., "AAPL", "BTC", "GBP")
    pub name: String,

    /// Asset class
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Asset {
    pub fn new(id: impl Into<String>, name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_type,
        }
    }

    /// Convenience constructors for each asset class
    pub fn stock(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, AssetType::Stock)
    }

    pub fn crypto(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, AssetType::Crypto)
    }

    pub fn fiat(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, AssetType::Fiat)
    }
}
