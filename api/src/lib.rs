pub mod error;
pub mod handlers;
pub mod metrics;
pub mod metrics_handler;
pub mod observability;
pub mod routes;
pub mod state;
pub mod validation;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the full application router.
///
/// Kept separate from `main` so the integration tests can drive the exact
/// router the binary serves.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::barcode_routes())
        .merge(routes::health_routes())
        .merge(routes::observability_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(request_logger))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();
    metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), uri.path(), &status.to_string()])
        .inc();
    tracing::info!("{method} {uri} {status} {elapsed}ms");

    response
}
