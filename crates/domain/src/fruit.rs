//! Fruit — a stock item supplied by exactly one provider.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, is_blank};
use crate::id::{FruitId, ProviderId};

/// A persisted fruit.
///
/// `provider_id` must resolve to a live [`Provider`](crate::provider::Provider);
/// the application layer checks this on every create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: FruitId,
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider_id: ProviderId,
}

/// The fields of a fruit that has not been stored yet.
///
/// Also used as the replacement payload when updating an existing fruit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFruit {
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider_id: ProviderId,
}

impl NewFruit {
    #[must_use]
    pub fn new(name: impl Into<String>, weight_in_kilos: i32, provider_id: ProviderId) -> Self {
        Self {
            name: name.into(),
            weight_in_kilos,
            provider_id,
        }
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `name` is blank or the weight is not
    /// strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.weight_in_kilos)
    }

    /// Attach an identifier, producing a full [`Fruit`].
    #[must_use]
    pub fn into_fruit(self, id: FruitId) -> Fruit {
        Fruit {
            id,
            name: self.name,
            weight_in_kilos: self.weight_in_kilos,
            provider_id: self.provider_id,
        }
    }
}

fn validate_fields(name: &str, weight_in_kilos: i32) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::EmptyName);
    }
    if weight_in_kilos <= 0 {
        return Err(ValidationError::NonPositiveWeight);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ProviderId {
        ProviderId::from_i64(10)
    }

    #[test]
    fn should_accept_fruit_with_positive_weight() {
        assert!(NewFruit::new("Apple", 3, provider()).validate().is_ok());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = NewFruit::new("", 3, provider()).validate();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_reject_zero_and_negative_weight() {
        assert_eq!(
            NewFruit::new("Apple", 0, provider()).validate(),
            Err(ValidationError::NonPositiveWeight)
        );
        assert_eq!(
            NewFruit::new("Apple", -1, provider()).validate(),
            Err(ValidationError::NonPositiveWeight)
        );
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let fruit = NewFruit::new("Orange", 9, provider()).into_fruit(FruitId::from_i64(1));
        let json = serde_json::to_value(&fruit).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Orange");
        assert_eq!(json["weightInKilos"], 9);
        assert_eq!(json["providerId"], 10);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let fruit = NewFruit::new("Kiwi", 2, provider()).into_fruit(FruitId::from_i64(5));
        let json = serde_json::to_string(&fruit).unwrap();
        let parsed: Fruit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fruit);
    }
}
