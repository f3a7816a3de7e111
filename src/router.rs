//! Request routing.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::config::Config;
use crate::handlers::list_images;
use crate::storage::BlobLister;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub lister: Arc<dyn BlobLister>,
}

/// Creates the router for the image listing service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/getFromAzure", get(list_images))
        .with_state(state)
}
