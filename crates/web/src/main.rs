use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_web::common::CommonStore;
use catalog_web::config::ServerConfig;
use catalog_web::router::build_app_router;
use catalog_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    // The pool is built lazily: a database that is down right now must not
    // keep the process from serving, so only the URL itself can fail here.
    let pool = catalog_db::connect_lazy(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_acquire_timeout_secs),
    )
    .expect("Invalid DATABASE_URL");

    match catalog_db::health_check(&pool).await {
        Ok(()) => tracing::info!("Database reachable"),
        Err(err) => tracing::error!(
            error = %err,
            "Database unreachable at startup, continuing in degraded mode"
        ),
    }

    // --- Common display metadata ---
    let common = Arc::new(CommonStore::new(&config.common_data_path));
    match common.load() {
        Ok(()) => tracing::info!(path = %config.common_data_path, "Common data loaded"),
        Err(err) => tracing::error!(
            error = %err,
            path = %config.common_data_path,
            "Common data unavailable at startup, routes will answer 500 until a reload succeeds"
        ),
    }

    #[cfg(unix)]
    spawn_reload_on_hangup(Arc::clone(&common));

    // --- App state / router ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        common,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Re-read the common metadata document whenever the process receives
/// SIGHUP. Reload failures keep the previously loaded data.
#[cfg(unix)]
fn spawn_reload_on_hangup(common: Arc<CommonStore>) {
    tokio::spawn(async move {
        let mut hangup =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) {
                Ok(signal) => signal,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to install SIGHUP handler");
                    return;
                }
            };

        while hangup.recv().await.is_some() {
            match common.load() {
                Ok(()) => tracing::info!("Common data reloaded"),
                Err(err) => tracing::error!(error = %err, "Common data reload failed"),
            }
        }
    });
}
