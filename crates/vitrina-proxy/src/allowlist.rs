//! Host allowlist for proxied image URLs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AllowlistError, AllowlistResult};

/// Pattern matching the storage host the catalog images live on.
pub const DEFAULT_IMAGE_PATTERN: &str = "*.supabase.co";

/// Which upstream image URLs the proxy may fetch.
///
/// A URL passes when its scheme is allowed and its host equals one of the
/// allowed hosts or matches one of the `*` patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAllowlist {
    #[serde(default)]
    allowed_hosts: Vec<String>,
    #[serde(default)]
    allowed_patterns: Vec<String>,
    #[serde(default = "default_schemes")]
    allowed_schemes: Vec<String>,
}

fn default_schemes() -> Vec<String> {
    vec!["https".to_string()]
}

impl Default for ImageAllowlist {
    fn default() -> Self {
        Self::empty().allow_pattern(DEFAULT_IMAGE_PATTERN)
    }
}

impl ImageAllowlist {
    /// An allowlist that refuses every host. Only https is accepted.
    pub fn empty() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            allowed_patterns: Vec::new(),
            allowed_schemes: default_schemes(),
        }
    }

    /// Allow an exact host.
    pub fn allow_host(mut self, host: impl Into<String>) -> Self {
        self.allowed_hosts.push(host.into().to_lowercase());
        self
    }

    /// Allow hosts matching a pattern such as `*.example.com`.
    pub fn allow_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.allowed_patterns.push(pattern.into().to_lowercase());
        self
    }

    /// Also accept plain http URLs.
    pub fn allow_http(mut self) -> Self {
        if !self.allowed_schemes.iter().any(|s| s == "http") {
            self.allowed_schemes.push("http".to_string());
        }
        self
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    pub fn allowed_patterns(&self) -> &[String] {
        &self.allowed_patterns
    }

    /// Parse `raw` and check it against the rules.
    pub fn check_url(&self, raw: &str) -> AllowlistResult<Url> {
        let url = Url::parse(raw).map_err(|e| AllowlistError::InvalidUrl(e.to_string()))?;

        if !self.allowed_schemes.iter().any(|s| s == url.scheme()) {
            return Err(AllowlistError::SchemeNotAllowed(url.scheme().to_string()));
        }

        let host = url
            .host_str()
            .ok_or_else(|| AllowlistError::InvalidUrl("missing host".to_string()))?;
        self.check_host(host)?;

        Ok(url)
    }

    /// Check a bare host name.
    pub fn check_host(&self, host: &str) -> AllowlistResult<()> {
        let host = host.to_lowercase();

        if self.allowed_hosts.contains(&host)
            || self.allowed_patterns.iter().any(|p| matches_pattern(&host, p))
        {
            Ok(())
        } else {
            Err(AllowlistError::HostNotAllowed(host))
        }
    }
}

fn matches_pattern(host: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        None => host == pattern,
        // `*.example.com` must not match `example.com` or `badexample.com`.
        Some(("", suffix)) => host.len() > suffix.len() && host.ends_with(suffix),
        Some((prefix, "")) => host.starts_with(prefix),
        Some((prefix, suffix)) => {
            host.len() >= prefix.len() + suffix.len()
                && host.starts_with(prefix)
                && host.ends_with(suffix)
        }
    }
}
