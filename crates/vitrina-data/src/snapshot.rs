//! In-memory catalog source.

use async_trait::async_trait;
use serde::Deserialize;
use vitrina_commerce::catalog::{Brand, Category, Product, ProductLine, RawProduct};

use crate::error::Result;
use crate::site::SiteConfig;
use crate::source::CatalogSource;

/// A full export of the remote service as one JSON document.
///
/// Products use the remote record shape and are normalized on load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    #[serde(alias = "productos")]
    pub products: Vec<RawProduct>,
    #[serde(alias = "categorias")]
    pub categories: Vec<Category>,
    #[serde(alias = "marcas")]
    pub brands: Vec<Brand>,
    #[serde(alias = "lineas")]
    pub lines: Vec<ProductLine>,
    pub banners: Vec<String>,
    #[serde(alias = "configuracion_web")]
    pub site_config: Option<SiteConfig>,
    #[serde(alias = "mostrar_combos")]
    pub show_combos: bool,
    #[serde(alias = "telefono")]
    pub phone: Option<String>,
}

/// A [`CatalogSource`] that serves a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    lines: Vec<ProductLine>,
    banners: Vec<String>,
    site_config: Option<SiteConfig>,
    show_combos: bool,
    phone: Option<String>,
}

impl StaticCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Ok(Self::from(snapshot))
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_brands(mut self, brands: Vec<Brand>) -> Self {
        self.brands = brands;
        self
    }

    pub fn with_lines(mut self, lines: Vec<ProductLine>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_banners(mut self, banners: Vec<String>) -> Self {
        self.banners = banners;
        self
    }

    pub fn with_site_config(mut self, config: SiteConfig) -> Self {
        self.site_config = Some(config);
        self
    }

    pub fn with_show_combos(mut self, show: bool) -> Self {
        self.show_combos = show;
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl From<CatalogSnapshot> for StaticCatalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self {
            products: snapshot.products.into_iter().map(Product::from_raw).collect(),
            categories: snapshot.categories,
            brands: snapshot.brands,
            lines: snapshot.lines,
            banners: snapshot.banners,
            site_config: snapshot.site_config,
            show_combos: snapshot.show_combos,
            phone: snapshot.phone,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogSource for StaticCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn brands(&self) -> Result<Vec<Brand>> {
        Ok(self.brands.clone())
    }

    async fn lines(&self) -> Result<Vec<ProductLine>> {
        Ok(self.lines.clone())
    }

    async fn banners(&self) -> Result<Vec<String>> {
        Ok(self.banners.clone())
    }

    async fn site_config(&self) -> Result<Option<SiteConfig>> {
        Ok(self.site_config.clone())
    }

    async fn show_combos(&self) -> Result<bool> {
        Ok(self.show_combos)
    }

    async fn phone(&self) -> Result<Option<String>> {
        Ok(self.phone.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_commerce::{BrandId, CategoryId, Money};

    const SNAPSHOT: &str = r#"{
        "productos": [
            {"id": 1, "descripcion": "Heladera", "precio": 1000, "tiene_stock": true,
             "destacado": true, "fk_id_categoria": 10, "fk_id_marca": 5},
            {"id": 2, "name": "Microondas", "price": "250", "fk_id_categoria": 11},
            {"id": 3, "descripcion": "Split 3000", "precio": 900, "fk_id_categoria": 20}
        ],
        "categorias": [
            {"id": 10, "descripcion": "Heladeras", "fk_id_linea": 1},
            {"id": 11, "descripcion": "Microondas", "fk_id_linea": 1},
            {"id": 20, "descripcion": "Aires", "fk_id_linea": 2},
            {"id": 30, "descripcion": "Colchones"}
        ],
        "lineas": [
            {"id": 1, "descripcion": "Línea Blanca"},
            {"id": 2, "descripcion": "Climatización"},
            {"id": 3, "descripcion": "Vacía"}
        ],
        "banners": ["https://cdn.example/b1.jpg"],
        "mostrar_combos": true
    }"#;

    #[tokio::test]
    async fn test_snapshot_normalizes_products() {
        let source = StaticCatalog::from_json(SNAPSHOT).unwrap();
        let products = source.products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].description, "Microondas");
        assert_eq!(products[1].price, Money::pesos(250));
        assert!(source.show_combos().await.unwrap());
    }

    #[tokio::test]
    async fn test_derived_reads() {
        let source = StaticCatalog::from_json(SNAPSHOT).unwrap();

        let featured = source.featured_products().await.unwrap();
        assert_eq!(featured.len(), 1);

        let by_category = source.products_by_category(CategoryId::new(11)).await.unwrap();
        assert_eq!(by_category[0].id.get(), 2);

        let by_brand = source.products_by_brand(BrandId::new(5)).await.unwrap();
        assert_eq!(by_brand.len(), 1);

        let grouped = source.lines_with_categories().await.unwrap();
        assert_eq!(grouped[0].categories.len(), 2);

        let loose = source.categories_without_line().await.unwrap();
        assert_eq!(loose.len(), 1);
        assert_eq!(loose[0].description, "Colchones");

        let with_products = source.lines_with_products().await.unwrap();
        let names: Vec<_> = with_products.iter().map(|l| l.description.as_str()).collect();
        assert_eq!(names, vec!["Línea Blanca", "Climatización"]);
    }

    #[tokio::test]
    async fn test_empty_snapshot() {
        let source = StaticCatalog::from_json("{}").unwrap();
        assert!(source.products().await.unwrap().is_empty());
        assert!(source.site_config().await.unwrap().is_none());
        assert!(!source.show_combos().await.unwrap());
    }
}
