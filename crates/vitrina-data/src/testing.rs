//! Test doubles.

use async_trait::async_trait;
use vitrina_commerce::catalog::{Brand, Category, Product, ProductLine};

use crate::error::{FetchError, Result};
use crate::site::SiteConfig;
use crate::source::CatalogSource;

/// A source whose every read fails.
pub struct FailingSource;

fn down<T>() -> Result<T> {
    Err(FetchError::Connection("service unreachable".to_string()))
}

#[async_trait]
impl CatalogSource for FailingSource {
    async fn products(&self) -> Result<Vec<Product>> {
        down()
    }
    async fn categories(&self) -> Result<Vec<Category>> {
        down()
    }
    async fn brands(&self) -> Result<Vec<Brand>> {
        down()
    }
    async fn lines(&self) -> Result<Vec<ProductLine>> {
        down()
    }
    async fn banners(&self) -> Result<Vec<String>> {
        down()
    }
    async fn site_config(&self) -> Result<Option<SiteConfig>> {
        down()
    }
    async fn show_combos(&self) -> Result<bool> {
        down()
    }
    async fn phone(&self) -> Result<Option<String>> {
        down()
    }
}
