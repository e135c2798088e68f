//! # fruithub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `fruithub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `fruithub-app` (for port traits) and `fruithub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod fruit_repo;
mod pool;
mod provider_repo;

pub use error::StorageError;
pub use fruit_repo::SqliteFruitRepository;
pub use pool::{Config, Database};
pub use provider_repo::SqliteProviderRepository;
