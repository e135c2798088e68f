//! Storage port — repository traits for persistence.
//!
//! Repositories are plain CRUD primitives. They never enforce uniqueness or
//! referential integrity; that is the job of the services.

use std::future::Future;

use fruithub_domain::error::FruitHubError;
use fruithub_domain::fruit::{Fruit, NewFruit};
use fruithub_domain::id::{FruitId, ProviderId};
use fruithub_domain::provider::{NewProvider, Provider};

/// Durable keyed storage of [`Fruit`] records.
pub trait FruitRepository {
    /// Persist a new fruit and return it with its store-assigned id.
    fn create(&self, fruit: NewFruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send;

    fn get_by_id(
        &self,
        id: FruitId,
    ) -> impl Future<Output = Result<Option<Fruit>, FruitHubError>> + Send;

    /// All fruits, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send;

    /// Fruits referencing `provider_id`, in insertion order.
    fn find_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send;

    fn exists_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send;

    /// Replace every mutable field of an existing fruit in one write.
    fn update(&self, fruit: Fruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send;

    fn delete(&self, id: FruitId) -> impl Future<Output = Result<(), FruitHubError>> + Send;
}

/// Durable keyed storage of [`Provider`] records.
pub trait ProviderRepository {
    /// Persist a new provider and return it with its store-assigned id.
    fn create(
        &self,
        provider: NewProvider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send;

    fn get_by_id(
        &self,
        id: ProviderId,
    ) -> impl Future<Output = Result<Option<Provider>, FruitHubError>> + Send;

    /// All providers, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Provider>, FruitHubError>> + Send;

    /// Exact, case-sensitive name match.
    fn exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send;

    /// Exact name match against every provider except `id`.
    fn exists_by_name_excluding_id(
        &self,
        name: &str,
        id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send;

    /// Replace every mutable field of an existing provider in one write.
    fn update(
        &self,
        provider: Provider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send;

    fn delete(&self, id: ProviderId) -> impl Future<Output = Result<(), FruitHubError>> + Send;
}
