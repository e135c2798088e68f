//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod fruit_service;
pub mod provider_service;

#[cfg(test)]
pub(crate) mod testing;
