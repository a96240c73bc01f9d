//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrina_proxy::{ImageAllowlist, DEFAULT_IMAGE_PATTERN, DEFAULT_MAX_AGE_SECS};

/// File names looked up from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["vitrina.toml", ".vitrina.toml", "vitrina.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shopping list storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote data service.
    #[serde(default)]
    pub data: DataConfig,

    /// Image proxy.
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where the shopping list is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".vitrina".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Remote data service connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Base URL of the REST service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Public API key sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Image proxy rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Exact upstream hosts.
    #[serde(default)]
    pub allowed_hosts: Vec<String>,

    /// Upstream host patterns such as `*.supabase.co`.
    #[serde(default = "default_patterns")]
    pub allowed_patterns: Vec<String>,

    /// Browser cache lifetime in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
}

fn default_patterns() -> Vec<String> {
    vec![DEFAULT_IMAGE_PATTERN.to_string()]
}

fn default_max_age() -> u64 {
    DEFAULT_MAX_AGE_SECS
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            allowed_patterns: default_patterns(),
            max_age_secs: default_max_age(),
        }
    }
}

impl ProxyConfig {
    /// Build the allowlist these rules describe.
    pub fn allowlist(&self) -> ImageAllowlist {
        let allowlist = self
            .allowed_hosts
            .iter()
            .fold(ImageAllowlist::empty(), |list, host| list.allow_host(host));
        self.allowed_patterns
            .iter()
            .fold(allowlist, |list, pattern| list.allow_pattern(pattern))
    }
}

/// Generate a default vitrina.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Vitrina configuration

[storage]
dir = ".vitrina"

[data]
# base_url = "https://<project>.supabase.co/rest/v1"
# api_key = "<public anon key>"

[proxy]
allowed_hosts = []
allowed_patterns = ["{pattern}"]
max_age_secs = {max_age}
"#,
        pattern = DEFAULT_IMAGE_PATTERN,
        max_age = DEFAULT_MAX_AGE_SECS,
    )
}
