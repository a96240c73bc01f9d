//! The shopping list store.

use std::fmt;

use tracing::{debug, warn};
use vitrina_commerce::catalog::Product;
use vitrina_commerce::ProductId;

use crate::item::ListItem;
use crate::storage::ListStorage;

/// Storage key the list is persisted under.
pub const LIST_KEY: &str = "vitrina:shopping-list";

/// Handle returned by [`ShoppingListStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[ListItem]) + Send>;

/// The shopper's list of saved products.
///
/// Items keep insertion order and ids are unique. Every change is written
/// to the backing storage and then announced to subscribers. Storage
/// failures are logged; the in-memory list stays authoritative.
pub struct ShoppingListStore<S: ListStorage> {
    storage: S,
    key: String,
    items: Vec<ListItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: ListStorage> ShoppingListStore<S> {
    /// Load the list from `storage` under the default key.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, LIST_KEY)
    }

    /// Load the list from `storage` under `key`.
    ///
    /// Missing, unreadable or corrupt data yields an empty list.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = read_items(&storage, &key);
        debug!(key = %key, count = items.len(), "shopping list loaded");
        Self {
            storage,
            key,
            items,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add a product. Returns `false` if it was already in the list, in
    /// which case the stored snapshot is left untouched.
    pub fn add_item(&mut self, product: Product) -> bool {
        if self.is_in_list(product.id) {
            debug!(product_id = %product.id, "already in shopping list");
            return false;
        }
        debug!(product_id = %product.id, "adding to shopping list");
        self.items.push(ListItem::new(product));
        self.changed();
        true
    }

    /// Remove a product. Returns `false` if it wasn't in the list.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == len_before {
            return false;
        }
        debug!(product_id = %id, "removed from shopping list");
        self.changed();
        true
    }

    pub fn is_in_list(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        debug!(count = self.items.len(), "clearing shopping list");
        self.items.clear();
        self.changed();
    }

    /// Items, oldest first.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Call `listener` with the new items after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[ListItem]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Stop notifying a listener. Returns `false` for an unknown handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    /// Re-read the list from storage, discarding in-memory state.
    ///
    /// Subscribers are notified when the reloaded items differ.
    pub fn reload(&mut self) {
        let items = read_items(&self.storage, &self.key);
        if items != self.items {
            self.items = items;
            self.notify();
        }
    }

    fn changed(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize shopping list");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(key = %self.key, error = %e, "failed to persist shopping list");
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.items);
        }
    }
}

impl<S: ListStorage + fmt::Debug> fmt::Debug for ShoppingListStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingListStore")
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn read_items<S: ListStorage>(storage: &S, key: &str) -> Vec<ListItem> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key = %key, error = %e, "failed to read shopping list, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ListItem>>(&raw) {
        Ok(items) => dedup_by_id(items),
        Err(e) => {
            warn!(key = %key, error = %e, "stored shopping list is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Keep the first occurrence of each id.
fn dedup_by_id(items: Vec<ListItem>) -> Vec<ListItem> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}
