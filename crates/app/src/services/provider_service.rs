//! Provider service — use-cases for managing providers.
//!
//! Owns the uniqueness rule on provider names and refuses to delete a
//! provider that still has fruits pointing at it.

use fruithub_domain::error::{ConflictError, FruitHubError, NotFoundError};
use fruithub_domain::id::ProviderId;
use fruithub_domain::provider::{NewProvider, Provider};

use crate::ports::{FruitRepository, ProviderRepository};
use crate::write_lock::WriteLock;

/// Application service for provider CRUD operations.
pub struct ProviderService<PR, FR> {
    providers: PR,
    fruits: FR,
    lock: WriteLock,
}

impl<PR, FR> ProviderService<PR, FR>
where
    PR: ProviderRepository,
    FR: FruitRepository,
{
    /// Create a new service backed by the given repositories.
    ///
    /// The fruit repository is only read, to guard deletes.
    pub fn new(providers: PR, fruits: FR, lock: WriteLock) -> Self {
        Self {
            providers,
            fruits,
            lock,
        }
    }

    /// Store a new provider unless its name is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`FruitHubError::Validation`] for malformed input,
    /// [`ConflictError::DuplicateName`] when a provider already uses the
    /// name, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, provider), fields(provider_name = %provider.name))]
    pub async fn create_provider(&self, provider: NewProvider) -> Result<Provider, FruitHubError> {
        provider.validate()?;

        let _guard = self.lock.acquire().await;
        if self.providers.exists_by_name(&provider.name).await? {
            tracing::debug!("provider name already taken");
            return Err(ConflictError::DuplicateName(provider.name).into());
        }
        let created = self.providers.create(provider).await?;

        tracing::info!(provider_id = %created.id, "provider created");
        Ok(created)
    }

    /// Look up a provider by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Provider`] when no provider with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_provider(&self, id: ProviderId) -> Result<Provider, FruitHubError> {
        self.providers
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Provider(id).into())
    }

    /// List all providers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_providers(&self) -> Result<Vec<Provider>, FruitHubError> {
        self.providers.get_all().await
    }

    /// Replace the name and country of an existing provider.
    ///
    /// Keeping the current name is always allowed: the uniqueness check
    /// ignores the provider being updated, compared by id only.
    ///
    /// # Errors
    ///
    /// Returns [`FruitHubError::Validation`] for malformed input,
    /// [`NotFoundError::Provider`] when `id` does not exist,
    /// [`ConflictError::DuplicateName`] when another provider uses the new
    /// name, or a storage error from the repository.
    #[tracing::instrument(skip(self, changes), fields(provider_name = %changes.name))]
    pub async fn update_provider(
        &self,
        id: ProviderId,
        changes: NewProvider,
    ) -> Result<Provider, FruitHubError> {
        changes.validate()?;

        let _guard = self.lock.acquire().await;
        let existing = self
            .providers
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Provider(id))?;
        if self
            .providers
            .exists_by_name_excluding_id(&changes.name, existing.id)
            .await?
        {
            tracing::debug!("provider name already taken");
            return Err(ConflictError::DuplicateName(changes.name).into());
        }

        let updated = self
            .providers
            .update(changes.into_provider(existing.id))
            .await?;

        tracing::info!("provider updated");
        Ok(updated)
    }

    /// Delete a provider that no fruit references.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Provider`] when `id` does not exist,
    /// [`ConflictError::ProviderInUse`] while any fruit references it, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn delete_provider(&self, id: ProviderId) -> Result<(), FruitHubError> {
        let _guard = self.lock.acquire().await;
        if self.providers.get_by_id(id).await?.is_none() {
            return Err(NotFoundError::Provider(id).into());
        }
        if self.fruits.exists_by_provider_id(id).await? {
            tracing::warn!("refusing to delete provider with fruits");
            return Err(ConflictError::ProviderInUse(id).into());
        }
        self.providers.delete(id).await?;

        tracing::info!("provider deleted");
        Ok(())
    }
}
