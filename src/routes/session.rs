use actix_web::web;

use crate::handlers::session::{
    get_session_handler, query_handler, reset_handler, set_input_handler,
};

pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(get_session_handler))
        .route("/session/input", web::put().to(set_input_handler))
        .route("/session/reset", web::post().to(reset_handler))
        .route("/query", web::post().to(query_handler));
}
