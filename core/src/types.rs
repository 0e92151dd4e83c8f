//! Item DTO as seen by API clients.
//!
//! Mirrors the server's schema but is defined independently so the client
//! does not depend on Axum.

use serde::{Deserialize, Serialize};

/// A single item as sent to and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Detail {
    pub detail: String,
}
