//! Catalog types and pricing rules for the Vitrina storefront.
//!
//! This crate holds everything the storefront knows about products:
//!
//! - **Catalog**: the normalized product schema, categories, brands and
//!   product lines, plus the boundary that resolves the remote service's two
//!   naming schemes into one
//! - **Pricing**: individual offers, promotional campaigns and the pure
//!   resolution of the price a shopper sees
//! - **Filter**: category/brand narrowing of a product list
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_commerce::prelude::*;
//!
//! let raw: RawProduct = serde_json::from_str(json)?;
//! let product = Product::from_raw(raw);
//!
//! let pricing = resolve_pricing(&product, today);
//! println!("{}", pricing.final_price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod filter;
pub mod pricing;
pub mod slug;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Brand, Category, LineWithCategories, Offer, Product, ProductLine, Promo, RawProduct,
        ValidityWindow,
    };

    // Pricing
    pub use crate::pricing::{resolve_pricing, PriceDisplay, PriceResolution};

    // Filter
    pub use crate::filter::CatalogFilter;

    pub use crate::slug::{line_path, product_path, slugify};
}
