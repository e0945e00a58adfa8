use serde::Serialize;

use crate::errors::QueryError;
use crate::models::{BalanceRecord, TokenMetadata};
use crate::utils::format_balance;

/// One card of the result grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayRow {
    pub contract_address: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub raw_balance: String,
    pub decimals: u8,
    /// Human readable balance, four fractional digits
    pub balance: String,
}

impl DisplayRow {
    pub fn from_parts(record: &BalanceRecord, metadata: &TokenMetadata) -> Result<Self, QueryError> {
        let amount = record.raw_balance()?;
        let decimals = metadata.decimals_or_default();
        let balance = format_balance(amount, decimals).map_err(|reason| QueryError::Format {
            contract: record.contract_address.clone(),
            reason,
        })?;

        Ok(Self {
            contract_address: record.contract_address.clone(),
            symbol: metadata.symbol.clone(),
            name: metadata.name.clone(),
            logo: metadata.logo.clone(),
            raw_balance: amount.to_string(),
            decimals,
            balance,
        })
    }

    pub fn symbol_or_unknown(&self) -> &str {
        self.symbol.as_deref().unwrap_or("Unknown")
    }
}
