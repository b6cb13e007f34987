//! TURSA Web Server
//!
//! Run with: cargo run -p tursa-web

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tursa_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tursa=debug,info")),
        )
        .init();

    info!("Starting TURSA site server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    if config.contact.endpoint.contains("your-form-id") {
        warn!("contact.endpoint is still the placeholder; submissions will fail until it is set in tursa.toml");
    }

    let state = tursa_web::state::AppState::from_config(&config)?;
    let home = state.base.href(tursa_ui::Route::Home);
    let app = tursa_web::router::build_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}{}", addr, home);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
