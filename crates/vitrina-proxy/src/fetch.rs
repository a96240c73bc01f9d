//! Upstream image fetching.

use async_trait::async_trait;
use url::Url;

use crate::error::ProxyError;

/// An image as returned by the upstream host.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamImage {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl UpstreamImage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches an upstream image.
///
/// Non-success statuses are returned as an [`UpstreamImage`]; only transport
/// failures are errors.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ImageFetcher {
    async fn fetch(&self, url: &Url) -> Result<UpstreamImage, ProxyError>;
}

/// Native fetcher backed by `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl ImageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<UpstreamImage, ProxyError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        Ok(UpstreamImage {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Fetcher using Spin outbound HTTP.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinFetcher;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ImageFetcher for SpinFetcher {
    async fn fetch(&self, url: &Url) -> Result<UpstreamImage, ProxyError> {
        let request = spin_sdk::http::Request::get(url.as_str());
        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        Ok(UpstreamImage {
            status: *response.status(),
            content_type: response
                .header("content-type")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            body: response.body().to_vec(),
        })
    }
}
