use anyhow::Result;
use dotenv::dotenv;
use std::net::SocketAddr;

use api::observability::Observability;
use api::state::AppState;
use shared::symbology::SymbologyRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let obs = Observability::init()?;

    let symbologies = SymbologyRegistry::from_env();
    tracing::info!(
        default = symbologies.default_key(),
        "symbology registry initialized"
    );

    let state = AppState::new(symbologies, obs.registry);
    let app = api::app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("barcode API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
