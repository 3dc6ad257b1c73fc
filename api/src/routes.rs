use axum::{routing::get, Router};

use crate::{handlers, metrics_handler, state::AppState};

pub fn barcode_routes() -> Router<AppState> {
    Router::new().route("/generate", get(handlers::generate_barcode))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

pub fn observability_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler::metrics_endpoint))
}
