use anyhow::Context;
use shopping_list_api::api::AppState;
use shopping_list_api::config::AppConfig;
use shopping_list_api::storage::ItemStore;
use shopping_list_api::{build_router, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_tracing().context("Failed to set tracing subscriber")?;

    info!("🚀 Starting Shopping List API Server");

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    let state = AppState::new(ItemStore::new());
    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server running on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /health        - Health check");
    info!("   GET    /items         - List items");
    info!("   POST   /items         - Add item");
    info!("   GET    /items/:name   - Show item");
    info!("   PATCH  /items/:name   - Modify item");
    info!("   DELETE /items/:name   - Delete item");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
