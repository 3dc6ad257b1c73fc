use once_cell::sync::Lazy;
use prometheus::{
    opts, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Registry, TextEncoder,
};

const LATENCY_BUCKETS: [f64; 10] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

// ── HTTP ────────────────────────────────────────────────────────────────────
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        opts!("http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

// ── Barcode pipeline ────────────────────────────────────────────────────────
pub static BARCODES_RENDERED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        opts!("barcodes_rendered_total", "Successfully rendered barcodes"),
        &["symbology", "image_type"],
    )
    .unwrap()
});
pub static RENDER_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        opts!("barcode_render_failures_total", "Encoder or serializer failures"),
        &["symbology"],
    )
    .unwrap()
});
pub static VALIDATION_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "barcode_validation_failures_total",
        "Requests rejected during validation",
    )
    .unwrap()
});
pub static RENDER_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new("barcode_render_duration_seconds", "Render latency")
            .buckets(LATENCY_BUCKETS.to_vec()),
    )
    .unwrap()
});

pub fn register_all(registry: &Registry) -> prometheus::Result<()> {
    registry.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    registry.register(Box::new(BARCODES_RENDERED.clone()))?;
    registry.register(Box::new(RENDER_FAILURES.clone()))?;
    registry.register(Box::new(VALIDATION_FAILURES.clone()))?;
    registry.register(Box::new(RENDER_DURATION.clone()))?;
    Ok(())
}

pub fn gather_metrics(registry: &Registry) -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&registry.gather(), &mut buffer) {
        tracing::warn!(error = %err, "failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
