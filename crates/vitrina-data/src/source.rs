//! The remote data collaborator.

use async_trait::async_trait;
use vitrina_commerce::catalog::{
    self, Brand, Category, LineWithCategories, Product, ProductLine,
};
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::{BrandId, CategoryId};

use crate::error::Result;
use crate::site::SiteConfig;

/// Read access to the storefront's catalog and configuration.
///
/// Only the base reads must be implemented; the narrowed and grouped views
/// have default implementations on top of them.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CatalogSource: Send + Sync {
    /// Every published product.
    async fn products(&self) -> Result<Vec<Product>>;

    async fn categories(&self) -> Result<Vec<Category>>;

    async fn brands(&self) -> Result<Vec<Brand>>;

    async fn lines(&self) -> Result<Vec<ProductLine>>;

    /// Banner image URLs in display order.
    async fn banners(&self) -> Result<Vec<String>>;

    /// Site look and feel. `None` when the service has no record.
    async fn site_config(&self) -> Result<Option<SiteConfig>>;

    /// Whether the home page shows the combos section.
    async fn show_combos(&self) -> Result<bool>;

    /// Contact phone number.
    async fn phone(&self) -> Result<Option<String>>;

    async fn featured_products(&self) -> Result<Vec<Product>> {
        let products = self.products().await?;
        Ok(products.into_iter().filter(|p| p.featured).collect())
    }

    async fn products_by_category(&self, id: CategoryId) -> Result<Vec<Product>> {
        let filter = CatalogFilter::Category(id);
        let products = self.products().await?;
        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }

    async fn products_by_brand(&self, id: BrandId) -> Result<Vec<Product>> {
        let filter = CatalogFilter::Brand(id);
        let products = self.products().await?;
        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }

    async fn lines_with_categories(&self) -> Result<Vec<LineWithCategories>> {
        let lines = self.lines().await?;
        let categories = self.categories().await?;
        Ok(catalog::group_lines(&lines, &categories))
    }

    async fn categories_without_line(&self) -> Result<Vec<Category>> {
        let lines = self.lines().await?;
        let categories = self.categories().await?;
        Ok(catalog::categories_without_line(&lines, &categories))
    }

    async fn lines_with_products(&self) -> Result<Vec<ProductLine>> {
        let lines = self.lines().await?;
        let categories = self.categories().await?;
        let products = self.products().await?;
        Ok(catalog::lines_with_products(&lines, &categories, &products))
    }
}
