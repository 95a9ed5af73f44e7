use std::sync::Arc;

use log::{info, warn};
use recipe_muse::config::AppConfig;
use recipe_muse::providers::OpenAiProvider;
use recipe_muse::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;

    if config.provider.resolve_api_key().is_none() {
        warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }

    let provider = OpenAiProvider::new(&config.provider);
    let state = AppState::new(Arc::new(provider));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
