//! In-memory repository fakes shared by the service tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use fruithub_domain::error::FruitHubError;
use fruithub_domain::fruit::{Fruit, NewFruit};
use fruithub_domain::id::{FruitId, ProviderId};
use fruithub_domain::provider::{NewProvider, Provider};

use crate::ports::{FruitRepository, ProviderRepository};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
    writes: usize,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
            writes: 0,
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Clones share the same rows, so one instance can be handed to both services.
#[derive(Clone, Default)]
pub struct InMemoryFruitRepo {
    table: Arc<Mutex<Table<Fruit>>>,
}

impl InMemoryFruitRepo {
    /// Number of successful create/update/delete calls so far.
    pub fn writes(&self) -> usize {
        self.table.lock().unwrap().writes
    }

    pub fn snapshot(&self) -> Vec<Fruit> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }
}

impl FruitRepository for InMemoryFruitRepo {
    fn create(&self, fruit: NewFruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        let id = table.allocate();
        let fruit = fruit.into_fruit(FruitId::from_i64(id));
        table.rows.insert(id, fruit.clone());
        table.writes += 1;
        async move { Ok(fruit) }
    }

    fn get_by_id(
        &self,
        id: FruitId,
    ) -> impl Future<Output = Result<Option<Fruit>, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result = table.rows.get(&id.as_i64()).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send {
        let result = self.snapshot();
        async move { Ok(result) }
    }

    fn find_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<Vec<Fruit>, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result: Vec<Fruit> = table
            .rows
            .values()
            .filter(|f| f.provider_id == provider_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }

    fn exists_by_provider_id(
        &self,
        provider_id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result = table.rows.values().any(|f| f.provider_id == provider_id);
        async move {
            tokio::task::yield_now().await;
            Ok(result)
        }
    }

    fn update(&self, fruit: Fruit) -> impl Future<Output = Result<Fruit, FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        table.rows.insert(fruit.id.as_i64(), fruit.clone());
        table.writes += 1;
        async move { Ok(fruit) }
    }

    fn delete(&self, id: FruitId) -> impl Future<Output = Result<(), FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        table.rows.remove(&id.as_i64());
        table.writes += 1;
        async move { Ok(()) }
    }
}

/// Clones share the same rows, so one instance can be handed to both services.
#[derive(Clone, Default)]
pub struct InMemoryProviderRepo {
    table: Arc<Mutex<Table<Provider>>>,
}

impl InMemoryProviderRepo {
    /// Number of successful create/update/delete calls so far.
    pub fn writes(&self) -> usize {
        self.table.lock().unwrap().writes
    }

    pub fn snapshot(&self) -> Vec<Provider> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }
}

impl ProviderRepository for InMemoryProviderRepo {
    fn create(
        &self,
        provider: NewProvider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        let id = table.allocate();
        let provider = provider.into_provider(ProviderId::from_i64(id));
        table.rows.insert(id, provider.clone());
        table.writes += 1;
        async move { Ok(provider) }
    }

    fn get_by_id(
        &self,
        id: ProviderId,
    ) -> impl Future<Output = Result<Option<Provider>, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result = table.rows.get(&id.as_i64()).cloned();
        async move {
            tokio::task::yield_now().await;
            Ok(result)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Provider>, FruitHubError>> + Send {
        let result = self.snapshot();
        async move { Ok(result) }
    }

    // The yields below let concurrent callers interleave between a check
    // and the write that follows it.
    fn exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result = table.rows.values().any(|p| p.name == name);
        async move {
            tokio::task::yield_now().await;
            Ok(result)
        }
    }

    fn exists_by_name_excluding_id(
        &self,
        name: &str,
        id: ProviderId,
    ) -> impl Future<Output = Result<bool, FruitHubError>> + Send {
        let table = self.table.lock().unwrap();
        let result = table.rows.values().any(|p| p.name == name && p.id != id);
        async move {
            tokio::task::yield_now().await;
            Ok(result)
        }
    }

    fn update(
        &self,
        provider: Provider,
    ) -> impl Future<Output = Result<Provider, FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        table.rows.insert(provider.id.as_i64(), provider.clone());
        table.writes += 1;
        async move { Ok(provider) }
    }

    fn delete(&self, id: ProviderId) -> impl Future<Output = Result<(), FruitHubError>> + Send {
        let mut table = self.table.lock().unwrap();
        table.rows.remove(&id.as_i64());
        table.writes += 1;
        async move { Ok(()) }
    }
}
