//! Application startup and lifecycle management.

use crate::config::AdminConfig;
use crate::handlers::admin::get_admin;
use crate::services::{FirestoreClient, ServiceAccountKey, TokenProvider};
use axum::{routing::get, Router};
use service_core::error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AdminConfig,
    pub store: FirestoreClient,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Loads the credential bundle, initializes the store client, and
    /// binds the listener. Any failure here aborts startup.
    pub async fn build(config: AdminConfig) -> Result<Self, AppError> {
        let key = ServiceAccountKey::from_file(&config.store.credentials_path).map_err(|e| {
            tracing::error!("Failed to load service account credentials: {}", e);
            AppError::ConfigError(e)
        })?;

        let token_provider = TokenProvider::new(&key).map_err(|e| {
            tracing::error!("Failed to initialize token provider: {}", e);
            AppError::ConfigError(e)
        })?;

        let store = FirestoreClient::new(token_provider, &config.store.api_base_url, &key.project_id);

        tracing::info!(
            project_id = %key.project_id,
            collection = %config.store.collection,
            "Initialized document store client"
        );

        let state = AppState {
            config: config.clone(),
            store,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/admin", get(get_admin))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .with_state(self.state);

        tracing::info!("Admin service listening on port {}", self.port);

        axum::serve(self.listener, router).await
    }
}
