//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port
//! and to stop it gracefully on Ctrl-C.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone());

        Self { config, router }
    }

    /// Get the socket address the server will bind to
    ///
    /// # Errors
    /// Returns an `InvalidInput` I/O error when host and port do not form a
    /// valid socket address.
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })
    }

    /// Run the server until Ctrl-C is received
    ///
    /// Binds to the configured host/port and serves requests. In-flight
    /// requests get `shutdown_timeout_secs` to complete after the signal.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        let grace = Duration::from_secs(self.config.shutdown_timeout_secs);

        self.run_until(listener, ctrl_c(), grace).await
    }

    /// Run the server with a specific listener until the process exits
    ///
    /// This is useful for testing where you want to use a listener bound to port 0
    /// to get a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }

    /// Serve on `listener` until `signal` resolves, then drain for at most `grace`.
    pub async fn run_until<S>(
        self,
        listener: TcpListener,
        signal: S,
        grace: Duration,
    ) -> Result<(), std::io::Error>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        let (fired_tx, fired_rx) = tokio::sync::oneshot::channel::<()>();
        let signal = async move {
            signal.await;
            let _ = fired_tx.send(());
        };
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .into_future();

        // Connections still open `grace` after the signal are abandoned
        let deadline = async move {
            match fired_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        let result = tokio::select! {
            result = serve => result,
            () = deadline => {
                tracing::warn!(grace_secs = grace.as_secs(), "Shutdown grace period elapsed");
                Ok(())
            }
        };

        tracing::info!("Server stopped");
        result
    }

    /// Create a test server and return the bound address
    ///
    /// This binds to port 0 to get a random available port, starts the server
    /// in a background task, and returns the actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(config: ServerConfig) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::new(config);
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        (addr, handle)
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
