use async_trait::async_trait;

use crate::errors::QueryError;
use crate::models::{TokenBalances, TokenMetadata};

/// Remote source of balances and token metadata
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    /// Every ERC-20 contract the address holds, with raw balances
    async fn get_token_balances(&self, address: &str) -> Result<TokenBalances, QueryError>;

    async fn get_token_metadata(&self, contract_address: &str)
        -> Result<TokenMetadata, QueryError>;
}
