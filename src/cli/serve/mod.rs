//! Serve command - runs the summarization and spell-check gateway

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router_with_state;
use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::domain::{builtin_specs, spellcheck_spec};
use crate::infrastructure::backend::{HfBackend, HfBackendConfig, HttpClient};
use crate::infrastructure::{
    logging, ModelBackend, ModelRegistry, SpellCheckService, SummaryService,
};

/// Run the gateway server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = create_app_state(&config);
    let app = create_router_with_state(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wire the registry, dispatcher, and spell pipeline over the hub backend.
/// No model is loaded here; the registry materializes each one on first use.
fn create_app_state(config: &AppConfig) -> AppState {
    let http = Arc::new(HttpClient::with_timeout(Duration::from_secs(
        config.inference.request_timeout_secs,
    )));

    let backend: Arc<dyn ModelBackend> = Arc::new(HfBackend::new(
        http,
        HfBackendConfig {
            endpoint: config.inference.endpoint.clone(),
            cache_dir: config.inference.cache_dir.clone().into(),
            api_token: config.inference.api_token.clone(),
        },
    ));

    let registry = Arc::new(ModelRegistry::new(builtin_specs(), Arc::clone(&backend)));
    let summaries = Arc::new(SummaryService::new(Arc::clone(&registry)));
    let spell = Arc::new(SpellCheckService::new(backend, spellcheck_spec()));

    AppState::new(summaries, spell, registry)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
