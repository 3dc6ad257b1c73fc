use prometheus::Registry;
use shared::symbology::SymbologyRegistry;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup; per-request work owns no
/// shared mutable data.
#[derive(Clone)]
pub struct AppState {
    pub symbologies: Arc<SymbologyRegistry>,
    pub started_at: Instant,
    pub metrics: Registry,
}

impl AppState {
    pub fn new(symbologies: SymbologyRegistry, metrics: Registry) -> Self {
        Self {
            symbologies: Arc::new(symbologies),
            started_at: Instant::now(),
            metrics,
        }
    }
}
