use axum::{
    Router,
    routing::{delete, get},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::{
    services::{
        add_custom_bang, get_settings, health, list_custom_bangs, multibang, remove_custom_bang,
        resolve, search, update_settings,
    },
    state::AppState,
};
use crate::config::Config;
use crate::store;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All routes, with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search))
        .route("/multibang", get(multibang))
        .route("/health", get(health))
        .route("/api/settings", get(get_settings).put(update_settings))
        .route(
            "/api/bangs/custom",
            get(list_custom_bangs).post(add_custom_bang),
        )
        .route("/api/bangs/custom/{trigger}", delete(remove_custom_bang))
        .route("/api/resolve", get(resolve))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<(), AnyError> {
    info!(
        backend = ?config.storage.backend,
        path = %config.storage.path.display(),
        "Opening settings store"
    );
    let store = store::open(&config.storage)
        .map_err(|e| format!("Failed to open settings store: {}", e))?;

    let address = config.server.bind_addr;
    let state = AppState::new(config, store.clone());
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Quackly listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.flush()?;
    info!("Settings store flushed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
