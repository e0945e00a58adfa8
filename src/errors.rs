use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use serde_json::json;
use thiserror::Error;

/// Failures inside a balance query. None of these details reach the page;
/// they collapse into a single error state at the flow boundary.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Balance request failed for {address}: {reason}")]
    Balance { address: String, reason: String },

    #[error("Metadata request failed for {contract}: {reason}")]
    Metadata { contract: String, reason: String },

    #[error("Invalid balance for {contract}: {reason}")]
    Format { contract: String, reason: String },

    #[error("No wallet provider available")]
    WalletUnavailable,

    #[error("Wallet rejected the connection: {0}")]
    WalletRejected(String),

    #[error("Wallet returned no accounts")]
    NoAccounts,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Alchemy API key not configured (set alchemy.api_key or ALCHEMY_API_KEY)")]
    MissingApiKey,

    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, String),
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Internal server error")]
    InternalError,

    #[display(fmt = "Bad request: {}", _0)]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError => HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            })),
            ApiError::BadRequest(ref message) => HttpResponse::BadRequest().json(json!({
                "error": message
            })),
        }
    }
}
