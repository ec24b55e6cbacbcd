use mr_bukkan::{api, config::RelayConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Config / shared state
    // -----------------------------
    let config = RelayConfig::from_env();
    let addr = config.listen_addr();
    if !config.api_configured() {
        warn!("GOOGLE_API_KEY is not set, generation requests will fail");
    }
    let configured = config.api_configured();

    let state = api::AppState::new(config)?;
    let app = api::router(state);

    println!("✅ Server running on http://{addr}");
    println!("✅ API Key configured: {configured}");
    info!(%addr, "relay listening");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
