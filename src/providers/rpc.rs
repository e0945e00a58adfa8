use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RpcCallError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Response has neither result nor error")]
    EmptyResponse,
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC 2.0 client over HTTP POST
#[derive(Debug)]
pub struct JsonRpcClient {
    http: Client,
    url: Url,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    pub async fn call<P, T>(&self, method: &str, params: P) -> Result<T, RpcCallError>
    where
        P: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("JSON-RPC call #{} {}", id, method);

        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcCallError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| RpcCallError::Transport(e.to_string()))?;

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| RpcCallError::Transport(format!("invalid response body: {}", e)))?;

        if let Some(error) = body.error {
            return Err(RpcCallError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result.ok_or(RpcCallError::EmptyResponse)
    }
}
