//! Fruit service — use-cases for managing fruits.
//!
//! Owns the referential-integrity rule: a fruit may only be stored while
//! its `provider_id` resolves to a live provider.

use fruithub_domain::error::{FruitHubError, NotFoundError};
use fruithub_domain::fruit::{Fruit, NewFruit};
use fruithub_domain::id::{FruitId, ProviderId};

use crate::ports::{FruitRepository, ProviderRepository};
use crate::write_lock::WriteLock;

/// Application service for fruit CRUD operations.
pub struct FruitService<FR, PR> {
    fruits: FR,
    providers: PR,
    lock: WriteLock,
}

impl<FR, PR> FruitService<FR, PR>
where
    FR: FruitRepository,
    PR: ProviderRepository,
{
    /// Create a new service backed by the given repositories.
    ///
    /// `lock` must be the same instance handed to the provider service so
    /// that fruit writes and provider deletes exclude each other.
    pub fn new(fruits: FR, providers: PR, lock: WriteLock) -> Self {
        Self {
            fruits,
            providers,
            lock,
        }
    }

    /// Store a new fruit after checking that its provider exists.
    ///
    /// # Errors
    ///
    /// Returns [`FruitHubError::Validation`] for malformed input,
    /// [`NotFoundError::Provider`] when `provider_id` does not resolve, or a
    /// storage error propagated from the repositories.
    #[tracing::instrument(skip(self, fruit), fields(fruit_name = %fruit.name, provider_id = %fruit.provider_id))]
    pub async fn create_fruit(&self, fruit: NewFruit) -> Result<Fruit, FruitHubError> {
        fruit.validate()?;

        let _guard = self.lock.acquire().await;
        self.require_provider(fruit.provider_id).await?;
        let created = self.fruits.create(fruit).await?;

        tracing::info!(fruit_id = %created.id, "fruit created");
        Ok(created)
    }

    /// Look up a fruit by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Fruit`] when no fruit with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_fruit(&self, id: FruitId) -> Result<Fruit, FruitHubError> {
        self.fruits
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Fruit(id).into())
    }

    /// List all fruits in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_fruits(&self) -> Result<Vec<Fruit>, FruitHubError> {
        self.fruits.get_all().await
    }

    /// List the fruits supplied by one provider, in insertion order.
    ///
    /// An existing provider with no fruits yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Provider`] when `provider_id` does not
    /// resolve, or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_fruits_by_provider(
        &self,
        provider_id: ProviderId,
    ) -> Result<Vec<Fruit>, FruitHubError> {
        self.require_provider(provider_id).await?;
        self.fruits.find_by_provider_id(provider_id).await
    }

    /// Replace the name, weight and provider of an existing fruit.
    ///
    /// The fruit is looked up first, then the new provider; nothing is
    /// written unless both resolve.
    ///
    /// # Errors
    ///
    /// Returns [`FruitHubError::Validation`] for malformed input,
    /// [`NotFoundError::Fruit`] when `id` does not exist,
    /// [`NotFoundError::Provider`] when the new provider does not resolve,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self, changes), fields(provider_id = %changes.provider_id))]
    pub async fn update_fruit(&self, id: FruitId, changes: NewFruit) -> Result<Fruit, FruitHubError> {
        changes.validate()?;

        let _guard = self.lock.acquire().await;
        let existing = self
            .fruits
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Fruit(id))?;
        self.require_provider(changes.provider_id).await?;

        let updated = self.fruits.update(changes.into_fruit(existing.id)).await?;

        tracing::info!("fruit updated");
        Ok(updated)
    }

    /// Delete a fruit by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Fruit`] when `id` does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_fruit(&self, id: FruitId) -> Result<(), FruitHubError> {
        let _guard = self.lock.acquire().await;
        if self.fruits.get_by_id(id).await?.is_none() {
            return Err(NotFoundError::Fruit(id).into());
        }
        self.fruits.delete(id).await?;

        tracing::info!("fruit deleted");
        Ok(())
    }

    async fn require_provider(&self, provider_id: ProviderId) -> Result<(), FruitHubError> {
        if self.providers.get_by_id(provider_id).await?.is_none() {
            tracing::debug!(%provider_id, "provider does not resolve");
            return Err(NotFoundError::Provider(provider_id).into());
        }
        Ok(())
    }
}
