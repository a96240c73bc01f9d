//! Error types for the image proxy.

/// Result type for allowlist checks.
pub type AllowlistResult<T> = Result<T, AllowlistError>;

/// Why a URL was refused by the allowlist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllowlistError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("scheme not allowed: {0}")]
    SchemeNotAllowed(String),

    #[error("host not allowed: {0}")]
    HostNotAllowed(String),
}

/// Errors raised while proxying an image.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("missing url parameter")]
    MissingUrl,

    #[error(transparent)]
    Rejected(#[from] AllowlistError),

    #[error("upstream returned status {0}")]
    NotFound(u16),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    /// HTTP status returned to the client.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingUrl | Self::Rejected(_) => 400,
            Self::NotFound(_) => 404,
            Self::Upstream(_) => 500,
        }
    }

    /// Plain-text body returned to the client.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingUrl => "Missing url parameter",
            Self::Rejected(_) => "Invalid URL",
            Self::NotFound(_) => "Image not found",
            Self::Upstream(_) => "Error fetching image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::MissingUrl.status(), 400);
        assert_eq!(
            ProxyError::from(AllowlistError::HostNotAllowed("evil.com".into())).status(),
            400
        );
        assert_eq!(ProxyError::NotFound(403).status(), 404);
        assert_eq!(ProxyError::Upstream("reset".into()).status(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ProxyError::MissingUrl.message(), "Missing url parameter");
        assert_eq!(ProxyError::NotFound(500).message(), "Image not found");
        assert_eq!(ProxyError::Upstream(String::new()).message(), "Error fetching image");
    }
}
