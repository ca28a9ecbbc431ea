//! pizza-restaurants server entry point.
//!
//! Opens the SQLite store, applies migrations, and serves the REST API.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pizza_restaurants::api;
use pizza_restaurants::app_state::AppState;
use pizza_restaurants::config::AppConfig;
use pizza_restaurants::persistence::SqliteStore;
use pizza_restaurants::service::CatalogService;
use pizza_restaurants::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting pizza-restaurants");

    // Open the store
    let store = SqliteStore::connect(&config).await?;
    store.migrate().await?;
    tracing::info!(url = %config.database_url, "database ready");

    // Build application state
    let app_state = AppState::new(CatalogService::new(store));

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        () = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
