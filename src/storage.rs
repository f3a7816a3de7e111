//! Blob enumeration against Azure Blob Storage.

use async_trait::async_trait;
use azure_storage::{CloudLocation, StorageCredentials};
use azure_storage_blobs::prelude::*;
use futures::StreamExt;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// One object descriptor from a container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobEntry {
    /// Object name within the container.
    pub name: String,
    /// Canonical URL of the object.
    pub url: Url,
}

/// Narrow view of the storage collaborator: open a session from a
/// credential, enumerate one container flat, yield names and URLs.
///
/// Tests substitute a fake implementation behind this trait.
#[async_trait]
pub trait BlobLister: Send + Sync {
    /// Enumerates every object in the configured container, in listing order.
    async fn list_blobs(&self) -> ApiResult<Vec<BlobEntry>>;
}

/// Lister backed by the Azure Blob Storage SDK.
///
/// The client is built per invocation, so a credential rotated in the
/// environment takes effect without a restart and a malformed credential
/// fails the request before any listing occurs.
pub struct AzureBlobLister {
    connection_string: String,
    container: String,
}

impl AzureBlobLister {
    /// Creates a lister for the container named in the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            connection_string: config.connection_string.clone(),
            container: config.container.clone(),
        }
    }

    /// Builds a container client from the connection string.
    ///
    /// Local operation; does not verify that the container exists.
    fn container_client(&self) -> ApiResult<ContainerClient> {
        let account = connection_field(&self.connection_string, "AccountName")
            .ok_or_else(|| ApiError::Config("connection string is missing AccountName".into()))?;
        let key = connection_field(&self.connection_string, "AccountKey")
            .ok_or_else(|| ApiError::Config("connection string is missing AccountKey".into()))?;

        let credentials = StorageCredentials::access_key(account.clone(), key);

        // BlobEndpoint shows up in emulator and custom-domain connection strings.
        let builder = match connection_field(&self.connection_string, "BlobEndpoint") {
            Some(endpoint) => ClientBuilder::with_location(
                CloudLocation::Custom {
                    account,
                    uri: endpoint.trim_end_matches('/').to_string(),
                },
                credentials,
            ),
            None => ClientBuilder::new(account, credentials),
        };

        Ok(builder.container_client(&self.container))
    }
}

#[async_trait]
impl BlobLister for AzureBlobLister {
    async fn list_blobs(&self) -> ApiResult<Vec<BlobEntry>> {
        let container = self.container_client()?;

        // Flat listing; the SDK paginates internally and the stream is
        // drained fully before the response is built.
        let mut entries = Vec::new();
        let mut stream = container.list_blobs().into_stream();
        while let Some(page) = stream.next().await {
            let page = page?;
            for blob in page.blobs.blobs() {
                let url = container.blob_client(&blob.name).url()?;
                entries.push(BlobEntry {
                    name: blob.name.clone(),
                    url,
                });
            }
        }

        Ok(entries)
    }
}

/// Extracts one `Key=Value` field from a `;`-separated connection string.
fn connection_field(connection_string: &str, key: &str) -> Option<String> {
    connection_string
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            part.strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
}
