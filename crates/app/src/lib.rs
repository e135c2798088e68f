//! # fruithub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FruitRepository` — CRUD plus provider-reference queries for fruits
//!   - `ProviderRepository` — CRUD plus name-existence queries for providers
//! - Define **driving/inbound ports** as use-case structs:
//!   - `FruitService` — create, get, list, list by provider, update, delete
//!   - `ProviderService` — create, get, list, update, delete
//! - Enforce the catalogue invariants: unique provider names, no fruit
//!   pointing at a missing provider, no deleting a provider still in use
//! - Serialize every check-then-act sequence through a shared [`WriteLock`]
//!
//! ## Dependency rule
//! Depends on `fruithub-domain` only (plus `tokio::sync` for the lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod write_lock;

pub use write_lock::WriteLock;
