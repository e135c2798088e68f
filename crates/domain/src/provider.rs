//! Provider — a supplier of fruit, identified by a unique name.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, is_blank};
use crate::id::ProviderId;

/// A persisted supplier.
///
/// `name` is unique across all live providers; the rule is enforced by the
/// application layer, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub country: String,
}

/// The fields of a provider that has not been stored yet.
///
/// Also used as the replacement payload when updating an existing provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    pub country: String,
}

impl NewProvider {
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `name` or `country` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.country)
    }

    /// Attach an identifier, producing a full [`Provider`].
    #[must_use]
    pub fn into_provider(self, id: ProviderId) -> Provider {
        Provider {
            id,
            name: self.name,
            country: self.country,
        }
    }
}

fn validate_fields(name: &str, country: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::EmptyName);
    }
    if is_blank(country) {
        return Err(ValidationError::EmptyCountry);
    }
    Ok(())
}
