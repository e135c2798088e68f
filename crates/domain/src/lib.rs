//! # fruithub-domain
//!
//! Pure domain model for the fruithub catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Providers** (suppliers with a unique name and a country)
//! - Define **Fruits** (stock items, each supplied by exactly one provider)
//! - Define the unsaved **drafts** handed to storage on insert
//! - Contain field-level validation rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod fruit;
pub mod provider;
