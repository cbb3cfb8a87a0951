//! Composition root: wires configuration, the upstream client and the HTTP
//! router, then serves until shutdown.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::http::{self, AppState};
use crate::adapter::outbound::llm::OpenAiCompatible;
use crate::application::ReviewService;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::llm::Llm;

/// Build the upstream LLM client from configuration.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client cannot be
/// built.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let client: Arc<dyn Llm> = Arc::new(OpenAiCompatible::from_config(&config.llm)?);
    info!(
        provider = client.name(),
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        timeout_secs = config.llm.timeout_secs,
        "LLM client initialized"
    );
    Ok(client)
}

/// Build the full application router around a given LLM client.
pub fn build_router(llm: Arc<dyn Llm>) -> Router {
    http::router(AppState::new(ReviewService::new(llm)))
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the listener fails.
pub async fn serve(config: Config) -> Result<()> {
    let app = build_router(build_llm_client(&config)?);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!(address = %listener.local_addr()?, "roast-my-book listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("roast-my-book stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
