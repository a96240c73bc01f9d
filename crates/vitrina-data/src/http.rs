//! HTTP implementation of the remote data collaborator.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use vitrina_commerce::catalog::{Brand, Category, Product, ProductLine, RawProduct};

use crate::error::{FetchError, Result};
use crate::site::SiteConfig;
use crate::source::CatalogSource;

/// Resource paths under the service base URL.
pub mod resources {
    pub const PRODUCTS: &str = "productos";
    pub const FEATURED: &str = "productos/destacados";
    pub const CATEGORIES: &str = "categorias";
    pub const BRANDS: &str = "marcas";
    pub const LINES: &str = "lineas";
    pub const BANNERS: &str = "banners";
    pub const SITE_CONFIG: &str = "configuracion-web";
    pub const SHOW_COMBOS: &str = "configuracion/mostrar-combos";
    pub const PHONE: &str = "configuracion/telefono";
}

/// Reads JSON resources with `GET {base_url}/{resource}`.
///
/// When an API key is set it is sent both as `apikey` and as a bearer token.
/// Requests carry no timeout and are not retried.
pub struct HttpCatalogSource {
    base_url: String,
    api_key: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpCatalogSource {
    /// Create a source rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    /// Authenticate every request with `api_key`.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource.
    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = self.url_for(resource);
        debug!(url = %url, "fetching");
        let bytes = self.get_bytes(&url).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    async fn get_products(&self, resource: &str) -> Result<Vec<Product>> {
        let raw: Vec<RawProduct> = self.get_json(resource).await?;
        Ok(raw.into_iter().map(Product::from_raw).collect())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        Ok(body.to_vec())
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut builder = spin_sdk::http::Request::builder();
        builder.method(spin_sdk::http::Method::Get).uri(url);
        if let Some(key) = &self.api_key {
            builder
                .header("apikey", key.as_str())
                .header("authorization", format!("Bearer {key}"));
        }
        let request = builder.build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.body().to_vec())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogSource for HttpCatalogSource {
    async fn products(&self) -> Result<Vec<Product>> {
        self.get_products(resources::PRODUCTS).await
    }

    async fn featured_products(&self) -> Result<Vec<Product>> {
        self.get_products(resources::FEATURED).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.get_json(resources::CATEGORIES).await
    }

    async fn brands(&self) -> Result<Vec<Brand>> {
        self.get_json(resources::BRANDS).await
    }

    async fn lines(&self) -> Result<Vec<ProductLine>> {
        self.get_json(resources::LINES).await
    }

    async fn banners(&self) -> Result<Vec<String>> {
        self.get_json(resources::BANNERS).await
    }

    async fn site_config(&self) -> Result<Option<SiteConfig>> {
        self.get_json(resources::SITE_CONFIG).await
    }

    async fn show_combos(&self) -> Result<bool> {
        self.get_json(resources::SHOW_COMBOS).await
    }

    async fn phone(&self) -> Result<Option<String>> {
        self.get_json(resources::PHONE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let source = HttpCatalogSource::new("https://api.example.com/v1/");
        assert_eq!(source.base_url(), "https://api.example.com/v1");
        assert_eq!(
            source.url_for(resources::FEATURED),
            "https://api.example.com/v1/productos/destacados"
        );
        assert_eq!(source.url_for("/marcas"), "https://api.example.com/v1/marcas");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let source = HttpCatalogSource::new("http://127.0.0.1:9");
        let err = source.products().await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
    }
}
