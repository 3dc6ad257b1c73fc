use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;
use crate::validation::BarcodeParams;

/// The barcode pipeline: raw query → validated request → rendered image.
///
/// Validation failures are client problems (400, all field errors at once);
/// encoder and serializer failures are render problems (500, underlying
/// message). A failure never outlives the request.
pub async fn generate_barcode(
    State(state): State<AppState>,
    params: Result<Query<BarcodeParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(err) => {
            metrics::VALIDATION_FAILURES.inc();
            return ApiError::bad_request(format!("Invalid query string: {}", err.body_text()))
                .into_response();
        }
    };

    let request = match params.into_request(&state.symbologies) {
        Ok(request) => request,
        Err(err) => {
            metrics::VALIDATION_FAILURES.inc();
            tracing::debug!(error = %err, "barcode request rejected");
            return err.into_response();
        }
    };

    let timer = metrics::RENDER_DURATION.start_timer();
    let rendered = shared::render::render(&request);
    timer.observe_duration();

    match rendered {
        Ok(result) => {
            metrics::BARCODES_RENDERED
                .with_label_values(&[request.symbology.key(), request.image_type.key()])
                .inc();
            tracing::debug!(
                symbology = %request.symbology,
                image_type = %request.image_type,
                bytes = result.bytes.len(),
                "barcode rendered"
            );
            ([(header::CONTENT_TYPE, result.content_type)], result.bytes).into_response()
        }
        Err(err) => {
            metrics::RENDER_FAILURES
                .with_label_values(&[request.symbology.key()])
                .inc();
            tracing::warn!(symbology = %request.symbology, error = %err, "barcode render failed");
            ApiError::render(err).into_response()
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": now,
            "uptime_secs": uptime,
            "default_symbology": state.symbologies.default_key(),
        })),
    )
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}
