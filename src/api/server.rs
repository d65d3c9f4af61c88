//! API server lifecycle.
//!
//! `serve` binds and runs the router until a shutdown future resolves.
//! `serve_on` does the same on a listener the caller already bound.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::router::api_router;
use crate::core_state::CoreState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Full application: API router plus CORS and response hardening headers.
pub fn app(core: Arc<CoreState>) -> Router {
    api_router(core)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CorsLayer::permissive())
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(core: Arc<CoreState>, addr: SocketAddr, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(addr).await?;
    serve_on(listener, core, shutdown).await
}

/// Serve on an already bound listener (port 0 picks an ephemeral port).
pub async fn serve_on<F>(listener: TcpListener, core: Arc<CoreState>, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "API server started");

    axum::serve(listener, app(core))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    use crate::core_state::tests::test_state;

    fn localhost() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 0))
    }

    struct Running {
        addr: SocketAddr,
        shutdown_tx: oneshot::Sender<()>,
        task: JoinHandle<Result<(), ServerError>>,
    }

    async fn start() -> Running {
        let listener = bind(localhost()).await.expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve_on(listener, Arc::new(test_state()), async move {
            let _ = shutdown_rx.await;
        }));
        Running { addr, shutdown_tx, task }
    }

    async fn stop(server: Running) {
        server.shutdown_tx.send(()).unwrap();
        server.task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn health_over_http() {
        let server = start().await;
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/api/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(resp.headers().get("x-content-type-options").unwrap(), "nosniff");
        assert!(resp.headers().contains_key("x-request-id"));

        stop(server).await;
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let server = start().await;

        let url = format!("http://{}/nonexistent", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        stop(server).await;
    }

    #[tokio::test]
    async fn shutdown_future_stops_serving() {
        let server = start().await;
        let addr = server.addr;
        stop(server).await;

        assert!(reqwest::get(format!("http://{addr}/api/health")).await.is_err());
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let held = TcpListener::bind(localhost()).await.unwrap();
        let taken = held.local_addr().unwrap();
        let err = serve(Arc::new(test_state()), taken, std::future::pending())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
