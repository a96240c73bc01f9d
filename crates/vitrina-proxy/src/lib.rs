//! Same-origin image proxy.
//!
//! `GET /api/image-proxy?url=<encoded>` fetches an allowlisted upstream image
//! and returns it with long-lived public cache headers and a permissive CORS
//! header. The handler is transport-agnostic and produces an
//! [`http::Response`]; on `wasm32` it is also exposed as a Spin component.
//!
//! ```ignore
//! let proxy = ImageProxy::new(ReqwestFetcher::new());
//! let response = proxy.handle("url=https%3A%2F%2Fx.supabase.co%2Fa.jpg").await;
//! ```

pub mod allowlist;
pub mod error;
pub mod fetch;
pub mod handler;

#[cfg(target_arch = "wasm32")]
mod component;

pub use allowlist::{ImageAllowlist, DEFAULT_IMAGE_PATTERN};
pub use error::{AllowlistError, AllowlistResult, ProxyError};
pub use fetch::{ImageFetcher, UpstreamImage};
pub use handler::{url_param, ImageProxy, DEFAULT_CONTENT_TYPE, DEFAULT_MAX_AGE_SECS, PROXY_PATH};

#[cfg(not(target_arch = "wasm32"))]
pub use fetch::ReqwestFetcher;

#[cfg(target_arch = "wasm32")]
pub use fetch::SpinFetcher;
