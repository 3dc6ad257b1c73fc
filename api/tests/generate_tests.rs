//! Integration tests for the barcode endpoint, driving the real router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use api::state::AppState;
use shared::symbology::SymbologyRegistry;

fn test_app() -> Router {
    let metrics = prometheus::Registry::new_custom(Some("test".into()), None).unwrap();
    api::metrics::register_all(&metrics).unwrap();
    api::app(AppState::new(SymbologyRegistry::new(), metrics))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

#[tokio::test]
async fn default_generate_ean8_barcode_from_code() {
    let (status, content_type, body) = get("/generate?code=1234567").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn default_generate_barcode_from_invalid_code() {
    let (status, _, body) = get("/generate?code=123456").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(&body).contains("Error generating barcode"));
}

#[tokio::test]
async fn non_float_height() {
    let (status, _, body) = get("/generate?code=1234567&height=one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_text(&body).contains("Height and width must be valid numbers."));
}

#[tokio::test]
async fn zero_width() {
    let (status, _, body) = get("/generate?code=1234567&width=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_text(&body).contains("Height and width must be numbers greater than zero"));
}

#[tokio::test]
async fn negative_height() {
    let (status, _, body) = get("/generate?code=1234567&height=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_text(&body).contains("Height and width must be numbers greater than zero"));
}

#[tokio::test]
async fn non_hex_colour_entry() {
    let (status, _, body) = get("/generate?code=1234567&foreground=004AAD7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_text(&body)
        .contains("Foreground and background colors must be valid hex RRGGBB or CCMMYYKK values"));
}

#[tokio::test]
async fn bad_color_and_bad_dimension_are_both_reported() {
    let (status, _, body) = get("/generate?code=1234567&foreground=xyz&height=tall").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let text = body_text(&body);
    assert!(text.contains("foreground:"));
    assert!(text.contains("height:"));
    assert!(text.contains("valid hex RRGGBB"));
    assert!(text.contains("valid numbers"));
}

#[tokio::test]
async fn both_invalid_colors_are_both_reported() {
    let (status, _, body) = get("/generate?code=1234567&foreground=bad&background=worse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let text = body_text(&body);
    assert!(text.contains("foreground:"));
    assert!(text.contains("background:"));
}

#[tokio::test]
async fn unsupported_image_type() {
    let (status, _, body) = get("/generate?code=1234567&image_type=gif").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body_text(&body).contains("Image type must be either png or svg."));
}

#[tokio::test]
async fn svg_output_has_svg_content_type() {
    let (status, content_type, body) = get("/generate?code=1234567&image_type=svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(body_text(&body).contains("<svg"));
}

#[tokio::test]
async fn all_parameters_defined() {
    let (status, content_type, _) = get(
        "/generate?code=1234567&image_type=png&height=21.38&width=17.05&foreground=004AAD&background=FF0000CC",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn identical_requests_are_byte_identical() {
    let uri = "/generate?code=1234567&image_type=png&height=21.38&width=17.05";
    let (_, _, first) = get(uri).await;
    let (_, _, second) = get(uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn huge_dimensions_fail_as_render_error_not_a_crash() {
    let (status, _, body) = get("/generate?code=1234567&width=1e9&height=1e9").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(&body).contains("Error generating barcode"));
}

#[tokio::test]
async fn unknown_code_type_falls_back_to_default() {
    let (status, content_type, _) = get("/generate?code=1234567&code_type=datamatrix").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn qrcode_accepts_free_text() {
    let (status, content_type, _) =
        get("/generate?code=hello%20world&code_type=qrcode").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn explicit_ean8_seven_digit_code_renders_png() {
    let (status, content_type, _) = get("/generate?code=1234567&code_type=ean8&image_type=png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn ean13_renders_twelve_digit_code() {
    let (status, _, _) = get("/generate?code=123456789012&code_type=ean13").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn ean5_truncates_oversupplied_digits() {
    // seven digits normalize to the low-order five, so this renders
    let (status, _, _) = get("/generate?code=1234567&code_type=ean5").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn code_with_separators_is_normalized_before_encoding() {
    let (status, content_type, _) = get("/generate?code=12-34-567").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn missing_code_uses_symbology_default() {
    let (status, content_type, _) = get("/generate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn validation_errors_carry_a_correlation_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/generate?code=1234567&width=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-correlation-id"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["default_symbology"], "ean8");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_text() {
    let (status, content_type, body) = get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert!(body_text(&body).contains("barcode_validation_failures"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _, body) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body_text(&body).contains("Route not found"));
}
