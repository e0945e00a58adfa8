use actix_web::{web, HttpResponse};
use log::info;

use crate::{
    errors::ApiError, handlers::session::dto::SessionResponse, services::BalanceQueryFlow,
};

/// POST /wallet/connect - Connects the wallet and queries its first account
pub async fn connect_wallet_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /wallet/connect request");
    let state = flow.query_by_connected_wallet().await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}

/// POST /wallet/disconnect - Drops the connected account and its results
pub async fn disconnect_wallet_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /wallet/disconnect request");
    let state = flow.disconnect().await;
    Ok(HttpResponse::Ok().json(SessionResponse::from(state)))
}
