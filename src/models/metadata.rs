use serde::{Deserialize, Serialize};

/// Precision assumed when the API has no `decimals` for a contract.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Result of `alchemy_getTokenMetadata`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TokenMetadata {
    pub fn new(symbol: &str, decimals: u8) -> Self {
        Self {
            name: None,
            symbol: Some(symbol.to_string()),
            decimals: Some(decimals),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = Some(logo.to_string());
        self
    }

    pub fn decimals_or_default(&self) -> u8 {
        self.decimals.unwrap_or(DEFAULT_DECIMALS)
    }
}
