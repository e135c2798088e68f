//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use fruithub_app::ports::{FruitRepository, ProviderRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the fruit and provider API at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<FR, PR>(state: AppState<FR, PR>) -> Router
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
