//! `SQLite` implementation of [`ProviderRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fruithub_app::ports::ProviderRepository;
use fruithub_domain::error::FruitHubError;
use fruithub_domain::id::ProviderId;
use fruithub_domain::provider::{NewProvider, Provider};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Provider`].
struct Wrapper(Provider);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Provider> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Provider {
            id: ProviderId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            country: row.try_get("country")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO providers (name, country) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, country FROM providers WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, country FROM providers ORDER BY id";
const EXISTS_BY_NAME: &str = "SELECT EXISTS(SELECT 1 FROM providers WHERE name = ?)";
const EXISTS_BY_NAME_EXCLUDING_ID: &str =
    "SELECT EXISTS(SELECT 1 FROM providers WHERE name = ? AND id <> ?)";
const UPDATE: &str = "UPDATE providers SET name = ?, country = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM providers WHERE id = ?";

/// `SQLite`-backed provider repository.
#[derive(Clone)]
pub struct SqliteProviderRepository {
    pool: SqlitePool,
}

impl SqliteProviderRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProviderRepository for SqliteProviderRepository {
    fn create(
        &self,
        provider: NewProvider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&provider.name)
                .bind(&provider.country)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(provider.into_provider(ProviderId::from_i64(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: ProviderId,
    ) -> impl Future<Output = Result<Option<Provider>, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Provider>, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_owned();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS_BY_NAME)
                .bind(name)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn exists_by_name_excluding_id(
        &self,
        name: &str,
        id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_owned();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS_BY_NAME_EXCLUDING_ID)
                .bind(name)
                .bind(id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn update(
        &self,
        provider: Provider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&provider.name)
                .bind(&provider.country)
                .bind(provider.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(provider)
        }
    }

    fn delete(&self, id: ProviderId) -> impl Future<Output = Result<(), FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteProviderRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteProviderRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_on_create() {
        let repo = setup().await;

        let first = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();
        let second = repo.create(NewProvider::new("Provider-B", "France")).await.unwrap();

        assert_eq!(first.id, ProviderId::from_i64(1));
        assert_eq!(second.id, ProviderId::from_i64(2));
    }

    #[tokio::test]
    async fn should_create_and_retrieve_provider() {
        let repo = setup().await;
        let created = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_provider_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ProviderId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_providers_in_insertion_order() {
        let repo = setup().await;
        repo.create(NewProvider::new("Zeta", "Spain")).await.unwrap();
        repo.create(NewProvider::new("Alpha", "Spain")).await.unwrap();

        let all = repo.get_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn should_match_names_exactly() {
        let repo = setup().await;
        repo.create(NewProvider::new("Provider", "Spain")).await.unwrap();

        assert!(repo.exists_by_name("Provider").await.unwrap());
        assert!(!repo.exists_by_name("provider").await.unwrap());
        assert!(!repo.exists_by_name("Provider ").await.unwrap());
    }

    #[tokio::test]
    async fn should_ignore_own_row_when_excluding_id() {
        let repo = setup().await;
        let a = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();
        let b = repo.create(NewProvider::new("Provider-B", "France")).await.unwrap();

        assert!(!repo.exists_by_name_excluding_id("Provider-A", a.id).await.unwrap());
        assert!(repo.exists_by_name_excluding_id("Provider-A", b.id).await.unwrap());
    }

    #[tokio::test]
    async fn should_update_provider_when_exists() {
        let repo = setup().await;
        let mut provider = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();

        provider.name = "Provider-A-Updated".to_string();
        provider.country = "France".to_string();
        repo.update(provider.clone()).await.unwrap();

        let fetched = repo.get_by_id(provider.id).await.unwrap().unwrap();
        assert_eq!(fetched, provider);
    }

    #[tokio::test]
    async fn should_delete_provider_when_exists() {
        let repo = setup().await;
        let provider = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();

        repo.delete(provider.id).await.unwrap();

        assert!(repo.get_by_id(provider.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = setup().await;
        let first = repo.create(NewProvider::new("Provider-A", "Spain")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(NewProvider::new("Provider-B", "Spain")).await.unwrap();

        assert!(second.id > first.id);
    }
}
