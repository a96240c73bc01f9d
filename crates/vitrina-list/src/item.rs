//! Shopping list entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrina_commerce::catalog::Product;
use vitrina_commerce::ProductId;

/// A product saved to the shopping list.
///
/// Holds the product as it was when added; later catalog changes are not
/// reflected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListItem {
    /// Product identifier, unique within a list.
    pub id: ProductId,
    /// Product snapshot.
    pub product: Product,
    /// When the item was added.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl ListItem {
    /// Snapshot a product now.
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            product,
            added_at: Utc::now(),
        }
    }

    pub fn description(&self) -> &str {
        &self.product.description
    }
}

impl From<Product> for ListItem {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}
