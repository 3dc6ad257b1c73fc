use anyhow::Result;
use prometheus::Registry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::metrics;

pub struct Observability {
    pub registry: Registry,
}

impl Observability {
    pub fn init() -> Result<Self> {
        let registry = Registry::new_custom(Some("barcode".into()), None)?;
        metrics::register_all(&registry)?;

        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "api=debug,tower_http=debug".into());

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();

        tracing::info!("observability stack initialized");
        Ok(Self { registry })
    }
}
