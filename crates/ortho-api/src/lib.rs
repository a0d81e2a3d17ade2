//! ortho-api
//!
//! HTTP surface over the intake normalization: the wizard posts a session
//! and gets back the export map, a filled template, or a DOCX summary.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Static contract data
        .route("/intakes", get(routes::intakes::list_intakes))
        .route("/intakes/{id}", get(routes::intakes::get_intake_detail))
        .route("/options", get(routes::intakes::list_options))
        // Session exports
        .route("/normalize", post(routes::normalize::normalize))
        .route("/render", post(routes::render::render))
        .route("/summary", post(routes::summary::summary))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
