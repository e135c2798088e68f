//! `SQLite` implementation of [`FruitRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fruithub_app::ports::FruitRepository;
use fruithub_domain::error::FruitHubError;
use fruithub_domain::fruit::{Fruit, NewFruit};
use fruithub_domain::id::{FruitId, ProviderId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Fruit`].
struct Wrapper(Fruit);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Fruit> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Fruit {
            id: FruitId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            weight_in_kilos: row.try_get("weight_in_kilos")?,
            provider_id: ProviderId::from_i64(row.try_get("provider_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO fruits (name, weight_in_kilos, provider_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, weight_in_kilos, provider_id FROM fruits WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, weight_in_kilos, provider_id FROM fruits ORDER BY id";
const SELECT_BY_PROVIDER: &str = "SELECT id, name, weight_in_kilos, provider_id FROM fruits WHERE provider_id = ? ORDER BY id";
const EXISTS_BY_PROVIDER: &str = "SELECT EXISTS(SELECT 1 FROM fruits WHERE provider_id = ?)";
const UPDATE: &str =
    "UPDATE fruits SET name = ?, weight_in_kilos = ?, provider_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM fruits WHERE id = ?";

/// `SQLite`-backed fruit repository.
#[derive(Clone)]
pub struct SqliteFruitRepository {
    pool: SqlitePool,
}

impl SqliteFruitRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FruitRepository for SqliteFruitRepository {
    fn create(&self, fruit: NewFruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&fruit.name)
                .bind(fruit.weight_in_kilos)
                .bind(fruit.provider_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(fruit.into_fruit(FruitId::from_i64(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: FruitId,
    ) -> impl Future<Output = Result<Option<Fruit>, FruitHubError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PROVIDER)
                .bind(provider_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn exists_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS_BY_PROVIDER)
                .bind(provider_id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn update(&self, fruit: Fruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&fruit.name)
                .bind(fruit.weight_in_kilos)
                .bind(fruit.provider_id.as_i64())
                .bind(fruit.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(fruit)
        }
    }

    fn delete(&self, id: FruitId) -> impl Future<Output = Result<(), FruitHubError>> + Send {
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

    async fn setup() -> SqliteFruitRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteFruitRepository::new(db.pool().clone())
    }

    fn provider(id: i64) -> ProviderId {
        ProviderId::from_i64(id)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_fruit() {
        let repo = setup().await;
        let created = repo.create(NewFruit::new("Orange", 9, provider(1))).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Orange");
        assert_eq!(fetched.weight_in_kilos, 9);
        assert_eq!(fetched.provider_id, provider(1));
    }

    #[tokio::test]
    async fn should_return_none_when_fruit_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(FruitId::from_i64(222)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_fruits_in_insertion_order() {
        let repo = setup().await;
        repo.create(NewFruit::new("Banana", 3, provider(1))).await.unwrap();
        repo.create(NewFruit::new("Lemon", 4, provider(2))).await.unwrap();

        let all = repo.get_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Banana", "Lemon"]);
    }

    #[tokio::test]
    async fn should_filter_fruits_by_provider() {
        let repo = setup().await;
        repo.create(NewFruit::new("Apple", 3, provider(1))).await.unwrap();
        repo.create(NewFruit::new("Orange", 4, provider(2))).await.unwrap();
        repo.create(NewFruit::new("Banana", 5, provider(1))).await.unwrap();

        let listed = repo.find_by_provider_id(provider(1)).await.unwrap();

        let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Banana"]);
        assert!(repo.find_by_provider_id(provider(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_whether_provider_has_fruits() {
        let repo = setup().await;
        let fruit = repo.create(NewFruit::new("Apple", 3, provider(1))).await.unwrap();

        assert!(repo.exists_by_provider_id(provider(1)).await.unwrap());
        assert!(!repo.exists_by_provider_id(provider(2)).await.unwrap());

        repo.delete(fruit.id).await.unwrap();
        assert!(!repo.exists_by_provider_id(provider(1)).await.unwrap());
    }

    #[tokio::test]
    async fn should_update_every_field_when_exists() {
        let repo = setup().await;
        let mut fruit = repo.create(NewFruit::new("Apple", 3, provider(1))).await.unwrap();

        fruit.name = "Green Apple".to_string();
        fruit.weight_in_kilos = 4;
        fruit.provider_id = provider(2);
        repo.update(fruit.clone()).await.unwrap();

        let fetched = repo.get_by_id(fruit.id).await.unwrap().unwrap();
        assert_eq!(fetched, fruit);
    }

    #[tokio::test]
    async fn should_delete_fruit_when_exists() {
        let repo = setup().await;
        let fruit = repo.create(NewFruit::new("Apple", 3, provider(1))).await.unwrap();

        repo.delete(fruit.id).await.unwrap();

        assert!(repo.get_by_id(fruit.id).await.unwrap().is_none());
    }
}
