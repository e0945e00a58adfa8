use actix_web::web;

use crate::handlers::wallet::{connect_wallet_handler, disconnect_wallet_handler};

pub fn configure_wallet_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/wallet/connect", web::post().to(connect_wallet_handler))
        .route(
            "/wallet/disconnect",
            web::post().to(disconnect_wallet_handler),
        );
}
