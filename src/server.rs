//! HTTP server for the image listing service.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::router::{create_router, AppState};
use crate::storage::{AzureBlobLister, BlobLister};

/// Image listing server.
pub struct ImageServer {
    config: Arc<Config>,
    lister: Arc<dyn BlobLister>,
}

impl ImageServer {
    /// Creates a server backed by Azure Blob Storage.
    pub fn new(config: Config) -> Self {
        let lister: Arc<dyn BlobLister> = Arc::new(AzureBlobLister::new(&config));

        Self {
            config: Arc::new(config),
            lister,
        }
    }

    /// Creates a server with a custom blob lister.
    pub fn with_lister(config: Config, lister: Arc<dyn BlobLister>) -> Self {
        Self {
            config: Arc::new(config),
            lister,
        }
    }

    /// Runs the server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;

        let state = AppState {
            config: self.config.clone(),
            lister: self.lister.clone(),
        };

        let app = create_router(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http());

        info!("Image listing service is starting at http://{}", addr);
        info!("Serving container: {}", self.config.container);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL for the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

/// Builder for creating a server, mainly for tests and embedding.
pub struct ImageServerBuilder {
    config: Config,
    lister: Option<Arc<dyn BlobLister>>,
}

impl ImageServerBuilder {
    /// Creates a new builder from a configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lister: None,
        }
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the service port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the blob lister.
    pub fn lister(mut self, lister: Arc<dyn BlobLister>) -> Self {
        self.lister = Some(lister);
        self
    }

    /// Builds the server.
    pub fn build(self) -> ImageServer {
        match self.lister {
            Some(lister) => ImageServer::with_lister(self.config, lister),
            None => ImageServer::new(self.config),
        }
    }
}
