//! In-memory item store.
//!
//! # Design
//! A `Vec<Item>` behind one `RwLock`. Insertion order is the iteration order.
//! The store is a plain value built at startup and shared through an `Arc`;
//! it does not outlive the process.
//!
//! Every `ItemService` call on the store takes the lock exactly once, so the
//! scan for a matching id and the mutation at that position cannot interleave
//! with another request. Nothing else about concurrency is promised.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::item::{seed_items, Item};

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// A store preloaded with the three demo items.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so a
    // poisoned guard is still safe to use.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Position of the first item carrying `id`.
pub(crate) fn position_of(items: &[Item], id: i64) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}
