use actix_web::web;

use crate::handlers::page::{
    page_connect_handler, page_disconnect_handler, page_handler, page_query_handler,
    page_reset_handler,
};

pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page_handler))
        .route("/page/query", web::post().to(page_query_handler))
        .route("/page/connect", web::post().to(page_connect_handler))
        .route("/page/disconnect", web::post().to(page_disconnect_handler))
        .route("/page/reset", web::post().to(page_reset_handler));
}
