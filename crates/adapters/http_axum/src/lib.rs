//! # fruithub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for fruits and providers
//!   (`/fruits`, `/fruits/{id}`, `/providers`, `/providers/{id}`)
//! - Reject malformed request bodies and identifiers before they reach
//!   the application services
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and error kinds into HTTP responses
//!
//! ## Dependency rule
//! Depends on `fruithub-app` (for port traits and services) and `fruithub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
