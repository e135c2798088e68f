//! Shared application state for axum handlers.

use std::sync::Arc;

use fruithub_app::ports::{FruitRepository, ProviderRepository};
use fruithub_app::services::fruit_service::FruitService;
use fruithub_app::services::provider_service::ProviderService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<FR, PR> {
    /// Fruit CRUD service.
    pub fruit_service: Arc<FruitService<FR, PR>>,
    /// Provider CRUD service.
    pub provider_service: Arc<ProviderService<PR, FR>>,
}

impl<FR, PR> Clone for AppState<FR, PR> {
    fn clone(&self) -> Self {
        Self {
            fruit_service: Arc::clone(&self.fruit_service),
            provider_service: Arc::clone(&self.provider_service),
        }
    }
}

impl<FR, PR> AppState<FR, PR>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        fruit_service: FruitService<FR, PR>,
        provider_service: ProviderService<PR, FR>,
    ) -> Self {
        Self {
            fruit_service: Arc::new(fruit_service),
            provider_service: Arc::new(provider_service),
        }
    }
}
