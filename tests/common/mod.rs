//! Common test utilities.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::TcpListener;
use url::Url;

use blob_image_api::{ApiError, ApiResult, BlobEntry, BlobLister, Config, ImageServerBuilder};

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Starts a server on a random port with the given lister.
    pub async fn start(lister: Arc<dyn BlobLister>) -> Self {
        // Find an available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            connection_string:
                "DefaultEndpointsProtocol=https;AccountName=testaccount;AccountKey=dGVzdGtleQ=="
                    .to_string(),
            container: "public".to_string(),
            debug: false,
        };

        let base_url = format!("http://127.0.0.1:{}", port);
        let server = ImageServerBuilder::new(config).lister(lister).build();

        // Start server in background
        tokio::spawn(async move {
            server.run().await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self { base_url }
    }

    /// Returns the URL of the image listing endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/getFromAzure", self.base_url)
    }
}

/// Lister that serves a fixed set of object names.
pub struct FakeLister {
    entries: Vec<BlobEntry>,
}

impl FakeLister {
    pub fn new(names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| BlobEntry {
                name: (*name).to_string(),
                url: Url::parse(&format!(
                    "https://testaccount.blob.core.windows.net/public/{name}"
                ))
                .unwrap(),
            })
            .collect();

        Self { entries }
    }
}

#[async_trait]
impl BlobLister for FakeLister {
    async fn list_blobs(&self) -> ApiResult<Vec<BlobEntry>> {
        Ok(self.entries.clone())
    }
}

/// Lister that fails every call, like a bad credential or a missing container.
pub struct FailingLister;

#[async_trait]
impl BlobLister for FailingLister {
    async fn list_blobs(&self) -> ApiResult<Vec<BlobEntry>> {
        Err(ApiError::Storage(azure_core::error::Error::message(
            azure_core::error::ErrorKind::Credential,
            "server failed to authenticate the request",
        )))
    }
}
