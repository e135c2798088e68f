//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod fruits;
#[allow(clippy::missing_errors_doc)]
pub mod providers;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use fruithub_app::ports::{FruitRepository, ProviderRepository};
use fruithub_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the fruit and provider routes.
pub fn routes<FR, PR>() -> Router<AppState<FR, PR>>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    Router::new()
        // Fruits
        .route(
            "/fruits",
            get(fruits::list::<FR, PR>).post(fruits::create::<FR, PR>),
        )
        .route(
            "/fruits/{id}",
            get(fruits::get::<FR, PR>)
                .put(fruits::update::<FR, PR>)
                .delete(fruits::delete::<FR, PR>),
        )
        // Providers
        .route(
            "/providers",
            get(providers::list::<FR, PR>).post(providers::create::<FR, PR>),
        )
        .route(
            "/providers/{id}",
            get(providers::get::<FR, PR>)
                .put(providers::update::<FR, PR>)
                .delete(providers::delete::<FR, PR>),
        )
}

/// Parse a path or query identifier, rejecting anything non-numeric.
fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}
