use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse, Result};

use crate::errors::ApiError;
use crate::routes::{
    page::configure_page_routes, session::configure_session_routes,
    wallet::configure_wallet_routes,
};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload: {}", err);
    ApiError::BadRequest(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(health_check))
                .configure(configure_session_routes)
                .configure(configure_wallet_routes),
        );
    configure_page_routes(cfg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenMetadata;
    use crate::services::BalanceQueryFlow;
    use crate::test::mocks::{MockTokenData, MockWallet};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    const OWNER: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    fn flow(wallet: MockWallet) -> web::Data<BalanceQueryFlow> {
        let data = MockTokenData::new()
            .with_token(OWNER, "0xaaa", "1234500000000000000", TokenMetadata::new("LINK", 18))
            .with_token(OWNER, "0xbbb", "0", TokenMetadata::new("DAI", 18));
        web::Data::new(BalanceQueryFlow::new(Arc::new(data), Arc::new(wallet), false))
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_query_then_reset_keeps_input() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/query")
            .set_json(json!({ "address": OWNER }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["has_result"], true);
        assert_eq!(body["rows"][0]["balance"], "1.2345");
        assert_eq!(body["rows"][1]["balance"], "0.0000");

        let req = test::TestRequest::post()
            .uri("/api/v1/session/reset")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(body["input"], OWNER);
        assert_eq!(body["rows"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_query_uses_typed_input() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/session/input")
            .set_json(json!({ "address": OWNER }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/query")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");
    }

    #[actix_web::test]
    async fn test_failed_query_reports_generic_error() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/query")
            .set_json(json!({ "address": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Unable to fetch token balances"));
        assert!(!body["error"].as_str().unwrap().contains("unknown address"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/session/input")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"address\": 12")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_wallet_connect_and_disconnect() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Accounts(vec![OWNER.to_string()])))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/session/input")
            .set_json(json!({ "address": "typed" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/wallet/connect")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["connected_account"], OWNER);
        assert_eq!(body["connected_badge"], "0xd8da...6045");
        assert_eq!(body["status"], "success");

        let req = test::TestRequest::post()
            .uri("/api/v1/wallet/disconnect")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["connected_account"].is_null());
        assert_eq!(body["status"], "idle");
        assert_eq!(body["input"], "typed");
    }

    #[actix_web::test]
    async fn test_wallet_absent_is_silent() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/wallet/connect")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(body["is_loading"], false);
        assert!(body["error"].is_null());
    }

    #[actix_web::test]
    async fn test_page_form_flow() {
        let app = test::init_service(
            App::new()
                .app_data(flow(MockWallet::Absent))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/page/query")
            .set_form([("address", OWNER)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("location").unwrap(), "/");

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<b>Symbol:</b> LINK"));
        assert!(html.contains("New Query"));

        let req = test::TestRequest::post().uri("/page/reset").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(&format!("value=\"{}\"", OWNER)));
        assert!(html.contains("Please make a query!"));
    }
}
