//! The `/api/image-proxy` request handler.

use http::{header, Response, StatusCode, Uri};
use tracing::{debug, error, warn};
use url::form_urlencoded;

use crate::allowlist::ImageAllowlist;
use crate::error::ProxyError;
use crate::fetch::{ImageFetcher, UpstreamImage};

/// Route the proxy is mounted on.
pub const PROXY_PATH: &str = "/api/image-proxy";

/// Content type used when upstream sends none.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Browser cache lifetime for proxied images (24 hours).
pub const DEFAULT_MAX_AGE_SECS: u64 = 86_400;

/// Serves allowlisted upstream images from the storefront's own origin.
#[derive(Debug, Clone)]
pub struct ImageProxy<F> {
    allowlist: ImageAllowlist,
    fetcher: F,
    max_age_secs: u64,
}

impl<F: ImageFetcher> ImageProxy<F> {
    /// Create a proxy with the default allowlist.
    pub fn new(fetcher: F) -> Self {
        Self {
            allowlist: ImageAllowlist::default(),
            fetcher,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    pub fn with_allowlist(mut self, allowlist: ImageAllowlist) -> Self {
        self.allowlist = allowlist;
        self
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.max_age_secs = secs;
        self
    }

    pub fn allowlist(&self) -> &ImageAllowlist {
        &self.allowlist
    }

    /// Handle a request by its URI.
    pub async fn handle_uri(&self, uri: &Uri) -> Response<Vec<u8>> {
        self.handle(uri.query().unwrap_or_default()).await
    }

    /// Handle a request given its raw query string.
    pub async fn handle(&self, query: &str) -> Response<Vec<u8>> {
        match self.proxy(query).await {
            Ok(image) => self.image_response(image),
            Err(err) => {
                match &err {
                    ProxyError::Upstream(_) => error!(error = %err, "error proxying image"),
                    ProxyError::NotFound(status) => debug!(status, "upstream image not found"),
                    _ => warn!(error = %err, "image proxy request rejected"),
                }
                error_response(&err)
            }
        }
    }

    async fn proxy(&self, query: &str) -> Result<UpstreamImage, ProxyError> {
        let target = url_param(query).ok_or(ProxyError::MissingUrl)?;
        let url = self.allowlist.check_url(&target)?;

        debug!(url = %url, "fetching image");
        let image = self.fetcher.fetch(&url).await?;
        if !image.is_success() {
            return Err(ProxyError::NotFound(image.status));
        }
        Ok(image)
    }

    fn image_response(&self, image: UpstreamImage) -> Response<Vec<u8>> {
        let content_type = image
            .content_type
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .header(
                header::CACHE_CONTROL,
                format!("public, max-age={}", self.max_age_secs),
            )
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
            .body(image.body)
            .unwrap_or_else(|_| error_response(&ProxyError::Upstream("invalid content type".into())))
    }
}

/// The decoded, non-empty `url` query parameter.
pub fn url_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn error_response(err: &ProxyError) -> Response<Vec<u8>> {
    let mut response = Response::new(err.message().as_bytes().to_vec());
    *response.status_mut() =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, header::HeaderValue::from_static("text/plain"));
    response
}
