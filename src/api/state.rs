use std::sync::Arc;

use crate::{db::UserStore, services::providers::CatalogProvider};

/// Shared application state
///
/// Both collaborators sit behind trait objects so the HTTP surface and the
/// tests can swap in stub implementations.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>, store: Arc<dyn UserStore>) -> Self {
        Self { provider, store }
    }
}
