//! The `Item` record and its structural validation.
//!
//! # Design
//! Decoding is split in two steps. Serde enforces the shape (field types,
//! required `id`/`name`, `description` defaulting to `null`), then
//! `Item::validate` checks the value-level rules serde cannot express.
//! Both steps run inside the `ValidItem` extractor, before any service call.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ValidationDetail};

/// A single item held by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the rules that the serde shape alone does not cover.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::Validation(vec![ValidationDetail::new(
                &["body", "name"],
                "String should have at least 1 character",
                "string_too_short",
            )]));
        }
        Ok(())
    }
}

/// Items loaded by `ItemStore::seeded`.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Item One").with_description("This is the first item."),
        Item::new(2, "Item Two").with_description("This is the second item."),
        Item::new(3, "Item Three").with_description("This is the third item."),
    ]
}
