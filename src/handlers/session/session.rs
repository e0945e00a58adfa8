use actix_web::{web, HttpResponse};
use log::info;

use crate::{
    errors::ApiError,
    handlers::session::dto::{QueryRequest, SessionResponse, SetInputRequest},
    services::BalanceQueryFlow,
};

/// GET /session - Returns the current session snapshot
pub async fn get_session_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    let state = flow.snapshot().await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}

/// PUT /session/input - Records the text typed in the address field
pub async fn set_input_handler(
    flow: web::Data<BalanceQueryFlow>,
    body: web::Json<SetInputRequest>,
) -> Result<HttpResponse, ApiError> {
    let state = flow.set_input(body.into_inner().address).await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}

/// POST /query - Queries token balances for an address
///
/// # Arguments
/// * `flow` - Session flow
/// * `body` - QueryRequest; when `address` is absent the typed input is queried
///
/// # Returns
/// The session after the query finished. A failed query is reported through
/// the session's error state, not the HTTP status.
pub async fn query_handler(
    flow: web::Data<BalanceQueryFlow>,
    body: web::Json<QueryRequest>,
) -> Result<HttpResponse, ApiError> {
    let address = match body.into_inner().address {
        Some(address) => flow.set_input(address).await.input,
        None => flow.snapshot().await.input,
    };
    info!("Handling POST /query request for '{}'", address);

    let state = flow.query_by_address(&address).await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}

/// POST /session/reset - Clears results, keeps the typed address
pub async fn reset_handler(flow: web::Data<BalanceQueryFlow>) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /session/reset request");
    let state = flow.reset_for_new_query().await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}
