//! Category and brand narrowing of a product list.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{BrandId, CategoryId};

/// The active catalog filter. Category and brand filters are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum CatalogFilter {
    #[default]
    All,
    Category(CategoryId),
    Brand(BrandId),
}

impl CatalogFilter {
    /// Filter by category, or no filter for `None`.
    pub fn category(id: Option<CategoryId>) -> Self {
        id.map_or(Self::All, Self::Category)
    }

    /// Filter by brand, or no filter for `None`.
    pub fn brand(id: Option<BrandId>) -> Self {
        id.map_or(Self::All, Self::Brand)
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => product.category_id == Some(*id),
            Self::Brand(id) => product.brand_id == Some(*id),
        }
    }

    /// Products passing the filter, in input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
