use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::errors::QueryError;
use crate::utils::parse_raw_balance;

/// Result of `alchemy_getTokenBalances`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalances {
    pub address: String,
    pub token_balances: Vec<BalanceRecord>,
}

/// One held token contract. `token_balance` is the raw integer amount,
/// hex encoded by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub contract_address: String,
    #[serde(default)]
    pub token_balance: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BalanceRecord {
    pub fn new(contract_address: impl Into<String>, token_balance: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            token_balance: Some(token_balance.into()),
            error: None,
        }
    }

    pub fn raw_balance(&self) -> Result<U256, QueryError> {
        if let Some(reason) = &self.error {
            return Err(QueryError::Format {
                contract: self.contract_address.clone(),
                reason: reason.clone(),
            });
        }

        let raw = self
            .token_balance
            .as_deref()
            .ok_or_else(|| QueryError::Format {
                contract: self.contract_address.clone(),
                reason: "missing token balance".to_string(),
            })?;

        parse_raw_balance(raw).map_err(|reason| QueryError::Format {
            contract: self.contract_address.clone(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let payload = r#"{
            "address": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
            "tokenBalances": [
                {
                    "contractAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                    "tokenBalance": "0x0000000000000000000000000000000000000000000000000000000005f5e100",
                    "error": null
                },
                {
                    "contractAddress": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                    "tokenBalance": null,
                    "error": "execution reverted"
                }
            ]
        }"#;

        let balances: TokenBalances = serde_json::from_str(payload).unwrap();
        assert_eq!(balances.token_balances.len(), 2);
        assert_eq!(
            balances.token_balances[0].raw_balance().unwrap(),
            U256::from(100_000_000u64)
        );
        assert!(matches!(
            balances.token_balances[1].raw_balance(),
            Err(QueryError::Format { .. })
        ));
    }

    #[test]
    fn test_decimal_balance_accepted() {
        let record = BalanceRecord::new("0xabc", "1234500000000000000");
        assert_eq!(
            record.raw_balance().unwrap(),
            U256::from(1_234_500_000_000_000_000u64)
        );
    }
}
