mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use sideline_config::Config;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Provider clients are constructed once here and injected into the
    /// handlers through shared state, so tests can stand up the same
    /// router against substitute endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider client fails to initialize
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let max_upload = config.extraction.max_upload_bytes;
        let health = if config.server.health.enabled {
            Some(config.server.health.path.clone())
        } else {
            None
        };

        let state = AppState::from_config(config)?;

        let mut app = Router::new()
            .route("/upload", post(routes::transcribe::upload_audio))
            .route("/upload-schedule", post(routes::schedule::upload_schedule))
            .route("/query-schedule", post(routes::schedule::query_schedule))
            .route("/translate", post(routes::translate::translate_recap))
            .route(
                "/create-checkout-session",
                post(routes::checkout::create_checkout_session),
            )
            .route("/webhook", post(routes::webhook::stripe_webhook))
            .layer(DefaultBodyLimit::max(max_upload))
            .with_state(state);

        if let Some(path) = health {
            app = app.route(&path, get(routes::health::health));
        }

        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
