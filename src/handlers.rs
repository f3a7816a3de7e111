//! Request handlers.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::images::image_urls;
use crate::router::AppState;

/// Response body for the image listing endpoint.
#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<String>,
}

/// GET /api/getFromAzure - URLs of every image blob in the container.
pub async fn list_images(State(state): State<AppState>) -> ApiResult<Json<ImageListResponse>> {
    let entries = state.lister.list_blobs().await?;
    let images = image_urls(entries);

    debug!(
        container = %state.config.container,
        count = images.len(),
        "listed image blobs"
    );

    Ok(Json(ImageListResponse { images }))
}
