//! CRUD operations over the item store.
//!
//! Handlers depend on the `ItemService` trait rather than on `ItemStore`, so
//! tests can wrap the store (for example to count calls).

use tracing::debug;

use crate::item::Item;
use crate::store::{position_of, ItemStore};

pub trait ItemService: Send + Sync {
    /// All items in insertion order.
    fn list_items(&self) -> Vec<Item>;

    /// First item whose id equals `id`.
    fn get_item(&self, id: i64) -> Option<Item>;

    /// Append `item` without any duplicate check and return it unchanged.
    fn create_item(&self, item: Item) -> Item;

    /// Replace the first item whose id equals `id` with `replacement`.
    ///
    /// The replacement is stored as given, even when its own `id` differs
    /// from the one used for the lookup.
    fn update_item(&self, id: i64, replacement: Item) -> Option<Item>;

    /// Remove the first item whose id equals `id`. Returns whether one was removed.
    fn delete_item(&self, id: i64) -> bool;
}

impl ItemService for ItemStore {
    fn list_items(&self) -> Vec<Item> {
        self.read().clone()
    }

    fn get_item(&self, id: i64) -> Option<Item> {
        let items = self.read();
        position_of(&items, id).map(|index| items[index].clone())
    }

    fn create_item(&self, item: Item) -> Item {
        debug!(id = item.id, "creating item");
        self.write().push(item.clone());
        item
    }

    fn update_item(&self, id: i64, replacement: Item) -> Option<Item> {
        let mut items = self.write();
        let index = position_of(&items, id)?;
        if replacement.id != id {
            debug!(lookup = id, stored = replacement.id, "replacement carries a different id");
        }
        items[index] = replacement.clone();
        debug!(id, index, "item replaced");
        Some(replacement)
    }

    fn delete_item(&self, id: i64) -> bool {
        let mut items = self.write();
        match position_of(&items, id) {
            Some(index) => {
                items.remove(index);
                debug!(id, index, "item deleted");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_creation_order() {
        let store = ItemStore::new();
        store.create_item(Item::new(1, "A"));
        store.create_item(Item::new(2, "B"));

        assert_eq!(store.list_items(), vec![Item::new(1, "A"), Item::new(2, "B")]);
    }

    #[test]
    fn list_order_is_insertion_not_id_order() {
        let store = ItemStore::new();
        for id in [5, 1, 3] {
            store.create_item(Item::new(id, format!("item {id}")));
        }
        let ids: Vec<i64> = store.list_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn create_returns_input_unchanged() {
        let store = ItemStore::new();
        let input = Item::new(9, "Chair").with_description("wooden");
        assert_eq!(store.create_item(input.clone()), input);
    }

    #[test]
    fn created_item_round_trips_through_get() {
        let store = ItemStore::new();
        let input = Item::new(4, "Desk").with_description("oak");
        store.create_item(input.clone());
        assert_eq!(store.get_item(4), Some(input));
    }

    #[test]
    fn get_unknown_id_is_absent() {
        let store = ItemStore::seeded();
        assert!(store.get_item(42).is_none());
    }

    #[test]
    fn duplicate_ids_are_accepted_and_first_wins() {
        let store = ItemStore::new();
        store.create_item(Item::new(1, "first"));
        store.create_item(Item::new(1, "second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_item(1).unwrap().name, "first");
    }

    #[test]
    fn update_replaces_whole_record() {
        let store = ItemStore::with_items(vec![Item::new(2, "Old").with_description("stale")]);
        let replacement = Item::new(2, "Updated").with_description("Updated description");

        assert_eq!(store.update_item(2, replacement.clone()), Some(replacement.clone()));
        assert_eq!(store.get_item(2), Some(replacement));
    }

    #[test]
    fn update_without_description_clears_it() {
        let store = ItemStore::with_items(vec![Item::new(2, "Old").with_description("stale")]);
        store.update_item(2, Item::new(2, "New"));
        assert!(store.get_item(2).unwrap().description.is_none());
    }

    #[test]
    fn update_missing_id_leaves_store_unchanged() {
        let store = ItemStore::seeded();
        let before = store.list_items();

        assert!(store.update_item(99, Item::new(99, "Ghost")).is_none());
        assert_eq!(store.list_items(), before);
    }

    #[test]
    fn update_with_mismatched_id_stores_replacement_id() {
        let store = ItemStore::with_items(vec![Item::new(1, "One")]);

        let updated = store.update_item(1, Item::new(7, "Seven")).unwrap();
        assert_eq!(updated.id, 7);
        assert!(store.get_item(1).is_none());
        assert_eq!(store.get_item(7).unwrap().name, "Seven");
    }

    #[test]
    fn delete_then_get_is_absent() {
        let store = ItemStore::seeded();
        assert!(store.delete_item(2));
        assert!(store.get_item(2).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_missing_id_returns_false() {
        let store = ItemStore::new();
        assert!(!store.delete_item(99));
        assert!(store.is_empty());

        let store = ItemStore::seeded();
        assert!(!store.delete_item(99));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn delete_removes_only_first_duplicate() {
        let store = ItemStore::with_items(vec![Item::new(1, "a"), Item::new(1, "b")]);
        assert!(store.delete_item(1));
        assert_eq!(store.get_item(1).unwrap().name, "b");
    }

    #[test]
    fn concurrent_creates_are_all_kept() {
        let store = std::sync::Arc::new(ItemStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.create_item(Item::new(t * 100 + i, "x"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
