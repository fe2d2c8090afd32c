//! Router construction and server lifecycle.
//!
//! The store is connected before the listener is bound and released only
//! after axum has drained in-flight requests.

use crate::app::{handlers, AppState};
use crate::domain::WhiskyStore;
use crate::utils::error::Result;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn create_router(store: Arc<dyn WhiskyStore>) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/hello/", get(handlers::hello))
        .route(
            "/whiskies",
            get(handlers::list_whiskies).post(handlers::create_whisky),
        )
        .route(
            "/whiskies/",
            get(handlers::list_whiskies).post(handlers::create_whisky),
        )
        .route(
            "/whiskies/{whisky_id}",
            get(handlers::get_whisky).delete(handlers::delete_whisky),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

/// Serves on an already bound listener until `shutdown` resolves, then
/// releases the store.
pub async fn serve<F>(listener: TcpListener, store: Arc<dyn WhiskyStore>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(Arc::clone(&store));
    info!("HTTP server listening on {}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    // Release the store even if the server loop failed.
    store.shutdown().await?;
    served?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

pub async fn start_server(store: Arc<dyn WhiskyStore>, addr: SocketAddr) -> Result<()> {
    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, store, shutdown_signal()).await
}

/// Resolves on CTRL+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received CTRL+C, starting graceful shutdown"),
        () = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }

    warn!("Waiting for in-flight requests to complete");
}
