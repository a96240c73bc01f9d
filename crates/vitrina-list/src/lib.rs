//! Persistent shopping list for the Vitrina storefront.
//!
//! A [`ShoppingListStore`] keeps the products a shopper saved, in the order
//! they were added, and writes the list to a [`ListStorage`] backend after
//! every change.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_list::{FileStorage, ShoppingListStore};
//!
//! let storage = FileStorage::open("~/.vitrina")?;
//! let mut list = ShoppingListStore::load(storage);
//!
//! if product.is_addable() {
//!     list.add_item(product);
//! }
//! ```

mod error;
mod item;
mod storage;
mod store;

pub use error::{ListError, Result};
pub use item::ListItem;
#[cfg(target_arch = "wasm32")]
pub use storage::SpinKvStorage;
pub use storage::{FileStorage, ListStorage, MemoryStorage};
pub use store::{ShoppingListStore, SubscriptionId, LIST_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FileStorage, ListError, ListItem, ListStorage, MemoryStorage, ShoppingListStore,
    };
}
