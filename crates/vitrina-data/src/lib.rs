//! Remote data access for the Vitrina storefront.
//!
//! All catalog and configuration data comes from one remote service. This
//! crate defines that collaborator as the [`CatalogSource`] trait, provides an
//! HTTP implementation and an in-memory snapshot, and holds the loading state
//! the UI binds to.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_data::{CatalogLoader, HttpCatalogSource};
//!
//! let source = HttpCatalogSource::new("https://api.example.com").with_api_key(key);
//!
//! let mut catalog = CatalogLoader::new();
//! catalog.load(&source).await;
//! catalog.filter_by_category(Some(category_id));
//!
//! for product in catalog.products() {
//!     println!("{}", product.description);
//! }
//! ```

mod error;
mod http;
mod loader;
mod site;
mod snapshot;
mod source;

#[cfg(test)]
mod testing;

pub use error::{FetchError, Result};
pub use http::{resources, HttpCatalogSource};
pub use loader::{CatalogLoader, PRODUCTS_LOAD_FAILED};
pub use site::{
    ConfigState, PhoneState, SiteConfig, CONFIG_LOAD_FAILED, CONFIG_MISSING, PHONE_LOAD_FAILED,
};
pub use snapshot::{CatalogSnapshot, StaticCatalog};
pub use source::CatalogSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogLoader, CatalogSource, ConfigState, FetchError, HttpCatalogSource, SiteConfig,
        StaticCatalog,
    };
}
