//! # dvp-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the verification portal gateway.
//! Binds to a configurable port (default 8080).

use dvp_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Attempt to create the Dholakpur client from environment. A missing
    // token is not fatal at startup: the proxy routes report it per request.
    let client = match dvp_dholakpur_client::DholakpurConfig::from_env() {
        Ok(dholakpur_config) => {
            tracing::info!(api_url = %dholakpur_config.api_url, "Dholakpur API client configured");
            match dvp_dholakpur_client::DholakpurClient::new(dholakpur_config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!("Failed to create Dholakpur API client: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "Dholakpur API client not configured: {e}. Proxy routes will return 500."
            );
            None
        }
    };

    let state = AppState::with_config(config, client);
    let app = dvp_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("DVP gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
