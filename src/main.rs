use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use effitube_api::{
    config::Config, routes::create_router, services::providers::youtube::YouTubeProvider,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // All initialization is explicit and ordered here: config first, then the
    // provider built from it. No module configures itself on import.
    let config = Config::from_env()?;
    let provider = Arc::new(YouTubeProvider::from_config(&config));
    let state = AppState::new(provider);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
