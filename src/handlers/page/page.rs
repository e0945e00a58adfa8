use actix_web::{http::header, web, HttpResponse};
use log::{error, info};

use crate::{
    errors::ApiError,
    handlers::page::{dto::QueryForm, render::render_page},
    services::BalanceQueryFlow,
};

fn see_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET / - Renders the page for the current session
pub async fn page_handler(flow: web::Data<BalanceQueryFlow>) -> Result<HttpResponse, ApiError> {
    let state = flow.snapshot().await;
    let html = render_page(&state).map_err(|e| {
        error!("Failed to render page: {}", e);
        ApiError::InternalError
    })?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// POST /page/query - Form submit of the address field
pub async fn page_query_handler(
    flow: web::Data<BalanceQueryFlow>,
    form: web::Form<QueryForm>,
) -> Result<HttpResponse, ApiError> {
    let address = form.into_inner().address;
    info!("Handling POST /page/query request for '{}'", address);

    flow.set_input(address.clone()).await;
    flow.query_by_address(&address).await;
    Ok(see_page())
}

/// POST /page/connect - "Connect your Wallet" button
pub async fn page_connect_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /page/connect request");
    flow.query_by_connected_wallet().await;
    Ok(see_page())
}

/// POST /page/disconnect - "Disconnect" button of the account badge
pub async fn page_disconnect_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /page/disconnect request");
    flow.disconnect().await;
    Ok(see_page())
}

/// POST /page/reset - "New Query" button
pub async fn page_reset_handler(
    flow: web::Data<BalanceQueryFlow>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /page/reset request");
    flow.reset_for_new_query().await;
    Ok(see_page())
}
