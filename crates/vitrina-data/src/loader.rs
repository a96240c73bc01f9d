//! Catalog loading with category/brand filters.

use tracing::error;
use vitrina_commerce::catalog::{Brand, Category, Product};
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::{BrandId, CategoryId};

use crate::error::Result;
use crate::source::CatalogSource;

pub const PRODUCTS_LOAD_FAILED: &str = "Error al cargar los productos";

/// Products, featured products, categories and brands for the catalog pages.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    all_products: Vec<Product>,
    featured: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    loading: bool,
    error: Option<String>,
    filter: CatalogFilter,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self {
            all_products: Vec::new(),
            featured: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            loading: true,
            error: None,
            filter: CatalogFilter::All,
        }
    }
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch everything from `source`.
    ///
    /// The collections are replaced only when every read succeeds; on failure
    /// the previous ones stay and `error` is set.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.loading = true;
        self.error = None;

        match fetch_all(source).await {
            Ok((featured, products, categories, brands)) => {
                self.featured = featured;
                self.all_products = products;
                self.categories = categories;
                self.brands = brands;
            }
            Err(e) => {
                error!(error = %e, "{}", PRODUCTS_LOAD_FAILED);
                self.error = Some(PRODUCTS_LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Same as [`load`](Self::load).
    pub async fn refresh<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.load(source).await;
    }

    /// Products passing the current filter.
    pub fn products(&self) -> Vec<&Product> {
        self.filter.apply(&self.all_products)
    }

    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    pub fn featured_products(&self) -> &[Product] {
        &self.featured
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> CatalogFilter {
        self.filter
    }

    /// Show only one category; `None` removes the filter.
    pub fn filter_by_category(&mut self, id: Option<CategoryId>) {
        self.filter = CatalogFilter::category(id);
    }

    /// Show only one brand; `None` removes the filter.
    pub fn filter_by_brand(&mut self, id: Option<BrandId>) {
        self.filter = CatalogFilter::brand(id);
    }

    pub fn clear_filters(&mut self) {
        self.filter = CatalogFilter::All;
    }
}

async fn fetch_all<S: CatalogSource + ?Sized>(
    source: &S,
) -> Result<(Vec<Product>, Vec<Product>, Vec<Category>, Vec<Brand>)> {
    let featured = source.featured_products().await?;
    let products = source.products().await?;
    let categories = source.categories().await?;
    let brands = source.brands().await?;
    Ok((featured, products, categories, brands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StaticCatalog;
    use crate::testing::FailingSource;
    use vitrina_commerce::Money;

    fn source() -> StaticCatalog {
        let mut featured = Product::new(1, "Heladera", Money::pesos(100))
            .with_category(10, "Heladeras")
            .with_brand(5, "Gafa");
        featured.featured = true;
        StaticCatalog::new()
            .with_products(vec![
                featured,
                Product::new(2, "Cocina", Money::pesos(200))
                    .with_category(11, "Cocinas")
                    .with_brand(6, "Orbis"),
            ])
            .with_categories(vec![Category::new(10, "Heladeras"), Category::new(11, "Cocinas")])
            .with_brands(vec![Brand::new(5, "Gafa"), Brand::new(6, "Orbis")])
    }

    #[tokio::test]
    async fn test_load() {
        let mut loader = CatalogLoader::new();
        assert!(loader.is_loading());

        loader.load(&source()).await;
        assert!(!loader.is_loading());
        assert!(loader.error().is_none());
        assert_eq!(loader.products().len(), 2);
        assert_eq!(loader.featured_products().len(), 1);
        assert_eq!(loader.categories().len(), 2);
        assert_eq!(loader.brands().len(), 2);
    }

    #[tokio::test]
    async fn test_filters() {
        let mut loader = CatalogLoader::new();
        loader.load(&source()).await;

        loader.filter_by_category(Some(CategoryId::new(11)));
        let ids: Vec<i64> = loader.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2]);

        // Brand filter replaces the category filter.
        loader.filter_by_brand(Some(BrandId::new(5)));
        let ids: Vec<i64> = loader.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1]);

        loader.clear_filters();
        assert_eq!(loader.products().len(), 2);

        loader.filter_by_category(Some(CategoryId::new(10)));
        loader.filter_by_category(None);
        assert_eq!(loader.products().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_data() {
        let mut loader = CatalogLoader::new();
        loader.load(&FailingSource).await;
        assert_eq!(loader.error(), Some(PRODUCTS_LOAD_FAILED));
        assert!(loader.products().is_empty());
        assert!(!loader.is_loading());

        loader.load(&source()).await;
        assert!(loader.error().is_none());

        loader.refresh(&FailingSource).await;
        assert_eq!(loader.error(), Some(PRODUCTS_LOAD_FAILED));
        assert_eq!(loader.all_products().len(), 2);
    }
}
