//! Server setup and lifecycle management

use crate::error::{Error, Result};
use crate::router::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Soiree site server
pub struct Server {
    addr: SocketAddr,
    state: AppState,
    public_dir: PathBuf,
}

impl Server {
    /// Create a new server for the given state and static asset directory
    pub fn new(addr: SocketAddr, state: AppState, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            addr,
            state,
            public_dir: public_dir.into(),
        }
    }

    /// Run the server until ctrl-c or SIGTERM
    pub async fn run(self) -> Result<()> {
        let app = create_router(self.state, &self.public_dir);

        let listener = TcpListener::bind(self.addr).await?;
        log::info!("Soiree listening on http://{}", self.addr);
        log::info!("Serving static assets from {}", self.public_dir.display());

        // Connect info feeds the access log's remote address column.
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| Error::Server(err.to_string()))?;

        log::info!("Soiree shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            log::info!("Received terminate signal, shutting down");
        }
    }
}
