use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use url::Url;

use crate::config::AlchemyConfig;
use crate::errors::QueryError;
use crate::models::{TokenBalances, TokenMetadata};
use crate::providers::rpc::JsonRpcClient;
use crate::providers::token_data::TokenDataProvider;

/// Alchemy Token API over JSON-RPC
#[derive(Debug)]
pub struct AlchemyClient {
    rpc: JsonRpcClient,
}

impl AlchemyClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> anyhow::Result<Self> {
        Ok(Self {
            rpc: JsonRpcClient::new(endpoint, timeout)?,
        })
    }

    pub fn from_config(config: &AlchemyConfig) -> anyhow::Result<Self> {
        let endpoint = config.endpoint()?;
        Self::new(endpoint, config.request_timeout_secs.map(Duration::from_secs))
    }
}

#[async_trait]
impl TokenDataProvider for AlchemyClient {
    async fn get_token_balances(&self, address: &str) -> Result<TokenBalances, QueryError> {
        debug!("Fetching token balances for {}", address);

        self.rpc
            .call("alchemy_getTokenBalances", (address, "erc20"))
            .await
            .map_err(|e| QueryError::Balance {
                address: address.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, QueryError> {
        debug!("Fetching token metadata for {}", contract_address);

        self.rpc
            .call("alchemy_getTokenMetadata", [contract_address])
            .await
            .map_err(|e| QueryError::Metadata {
                contract: contract_address.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use serde_json::{json, Value};

    async fn mock_alchemy(body: web::Json<Value>) -> HttpResponse {
        let id = body["id"].clone();
        let method = body["method"].as_str().unwrap_or_default();
        let params = &body["params"];

        let payload = match method {
            "alchemy_getTokenBalances" => {
                assert_eq!(params[1], "erc20");
                json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": {
                        "address": params[0],
                        "tokenBalances": [
                            {"contractAddress": "0xa0b8", "tokenBalance": "0x05f5e100", "error": null}
                        ]
                    }
                })
            }
            "alchemy_getTokenMetadata" if params[0] == "0xa0b8" => json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {"name": "USD Coin", "symbol": "USDC", "decimals": 6, "logo": null}
            }),
            _ => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32602, "message": "invalid contract address"}
            }),
        };

        HttpResponse::Ok().json(payload)
    }

    async fn start_mock() -> Url {
        let server = HttpServer::new(|| App::new().route("/v2/{key}", web::post().to(mock_alchemy)))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Url::parse(&format!("http://{}/v2/test-key", addr)).unwrap()
    }

    #[actix_web::test]
    async fn test_balances_and_metadata_roundtrip() {
        let client = AlchemyClient::new(start_mock().await, Some(Duration::from_secs(5))).unwrap();

        let balances = client.get_token_balances("0xowner").await.unwrap();
        assert_eq!(balances.address, "0xowner");
        assert_eq!(balances.token_balances.len(), 1);

        let metadata = client.get_token_metadata("0xa0b8").await.unwrap();
        assert_eq!(metadata.symbol.as_deref(), Some("USDC"));
        assert_eq!(metadata.decimals, Some(6));
    }

    #[actix_web::test]
    async fn test_rpc_error_maps_to_metadata_error() {
        let client = AlchemyClient::new(start_mock().await, None).unwrap();

        let err = client.get_token_metadata("0xbad").await.unwrap_err();
        assert!(matches!(err, QueryError::Metadata { ref contract, .. } if contract == "0xbad"));
    }

    #[actix_web::test]
    async fn test_unreachable_endpoint_maps_to_balance_error() {
        let url = Url::parse("http://127.0.0.1:9/v2/key").unwrap();
        let client = AlchemyClient::new(url, Some(Duration::from_secs(2))).unwrap();

        let err = client.get_token_balances("0xowner").await.unwrap_err();
        assert!(matches!(err, QueryError::Balance { .. }));
    }
}
