//! Blob-image-api: an HTTP endpoint over Azure Blob Storage.
//!
//! Serves `GET /api/getFromAzure`, which enumerates one container and
//! returns the URLs of every blob whose name carries an image extension,
//! as `{ "images": [...] }`.
//!
//! # Example
//!
//! ```no_run
//! use blob_image_api::{Config, ImageServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config {
//!         host: "127.0.0.1".to_string(),
//!         port: 3000,
//!         connection_string: std::env::var("AZURE_STORAGE_CONNECTION_STRING").unwrap(),
//!         container: "public".to_string(),
//!         debug: false,
//!     };
//!     ImageServer::new(config).run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod images;
pub mod router;
pub mod server;
pub mod storage;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_PORT};
pub use error::{ApiError, ApiResult};
pub use server::{ImageServer, ImageServerBuilder};
pub use storage::{AzureBlobLister, BlobEntry, BlobLister};
