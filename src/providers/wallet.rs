use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use url::Url;

use crate::config::WalletConfig;
use crate::errors::QueryError;
use crate::providers::rpc::{JsonRpcClient, RpcCallError};

/// An injected wallet able to hand out the user's accounts
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet to authorize this page. Fails with
    /// [`QueryError::WalletUnavailable`] when no wallet is present and
    /// [`QueryError::WalletRejected`] when the user declines.
    async fn request_accounts(&self) -> Result<Vec<String>, QueryError>;
}

/// Wallet reachable through an EIP-1193 style JSON-RPC endpoint
/// (for example a desktop wallet listening on localhost).
#[derive(Debug)]
pub struct RpcWalletProvider {
    rpc: Option<JsonRpcClient>,
}

const WALLET_TIMEOUT_SECS: u64 = 120;

impl RpcWalletProvider {
    pub fn new(provider_url: Option<Url>) -> anyhow::Result<Self> {
        let rpc = match provider_url {
            Some(url) => Some(JsonRpcClient::new(
                url,
                Some(Duration::from_secs(WALLET_TIMEOUT_SECS)),
            )?),
            None => None,
        };

        Ok(Self { rpc })
    }

    pub fn from_config(config: &WalletConfig) -> anyhow::Result<Self> {
        let url = match &config.provider_url {
            Some(url) => Some(Url::parse(url)?),
            None => {
                warn!("No wallet provider configured, wallet connections will fail");
                None
            }
        };
        Self::new(url)
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, QueryError> {
        let rpc = self.rpc.as_ref().ok_or(QueryError::WalletUnavailable)?;
        debug!("Requesting wallet accounts");

        rpc.call::<_, Vec<String>>("eth_requestAccounts", Vec::<String>::new())
            .await
            .map_err(|e| match e {
                RpcCallError::Rpc { code, message } => {
                    QueryError::WalletRejected(format!("{} ({})", message, code))
                }
                other => {
                    debug!("Wallet provider unreachable: {}", other);
                    QueryError::WalletUnavailable
                }
            })
    }
}
