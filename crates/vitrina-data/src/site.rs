//! Runtime site configuration and its loading state.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::source::CatalogSource;

/// Look and feel settings fetched from the configuration service.
///
/// Every field has a default so partial records still produce a usable
/// configuration. Sizes are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub appbar_background_color: String,
    pub appbar_text_color: String,

    pub font_family_primary: String,
    pub font_family_secondary: String,

    pub section_title_size: u32,
    pub section_subtitle_size: u32,
    pub section_text_size: u32,
    pub mobile_section_title_size: u32,
    pub mobile_section_subtitle_size: u32,
    pub mobile_section_text_size: u32,

    pub search_box_width: u32,
    pub search_box_height: u32,
    pub mobile_search_box_width: u32,
    pub mobile_search_box_height: u32,

    pub home_section_height: u32,
    pub mobile_home_section_height: u32,

    pub logo_url: Option<String>,
    pub logo_width: u32,
    pub logo_height: u32,
    pub mobile_logo_width: u32,
    pub mobile_logo_height: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            primary_color: "#f97316".to_string(),
            secondary_color: "#1f2937".to_string(),
            accent_color: "#ea580c".to_string(),
            appbar_background_color: "#ffffff".to_string(),
            appbar_text_color: "#1f2937".to_string(),
            font_family_primary: "Inter, sans-serif".to_string(),
            font_family_secondary: "Inter, sans-serif".to_string(),
            section_title_size: 32,
            section_subtitle_size: 20,
            section_text_size: 16,
            mobile_section_title_size: 24,
            mobile_section_subtitle_size: 18,
            mobile_section_text_size: 14,
            search_box_width: 400,
            search_box_height: 40,
            mobile_search_box_width: 280,
            mobile_search_box_height: 36,
            home_section_height: 400,
            mobile_home_section_height: 300,
            logo_url: None,
            logo_width: 150,
            logo_height: 50,
            mobile_logo_width: 120,
            mobile_logo_height: 40,
        }
    }
}

pub const CONFIG_MISSING: &str = "No se pudo obtener la configuración web";
pub const CONFIG_LOAD_FAILED: &str = "Error al cargar la configuración web";
pub const PHONE_LOAD_FAILED: &str = "Error al cargar la configuración";

/// Site configuration as seen by the rest of the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    pub config: Option<SiteConfig>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            config: None,
            loading: true,
            error: None,
        }
    }
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state that already holds `config`.
    pub fn loaded(config: SiteConfig) -> Self {
        Self {
            config: Some(config),
            loading: false,
            error: None,
        }
    }

    /// Fetch the configuration. Failures end up in `error`, never panic or
    /// propagate.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.loading = true;
        self.error = None;

        match source.site_config().await {
            Ok(Some(config)) => self.config = Some(config),
            Ok(None) => {
                self.config = None;
                self.error = Some(CONFIG_MISSING.to_string());
            }
            Err(e) => {
                error!(error = %e, "{}", CONFIG_LOAD_FAILED);
                self.error = Some(CONFIG_LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Lines shown by the development configuration panel.
    pub fn debug_lines(&self, is_mobile: bool) -> Vec<String> {
        let yes_no = |b: bool| if b { "Sí" } else { "No" };
        let mut lines = vec![
            format!("Loading: {}", yes_no(self.loading)),
            format!("Error: {}", self.error.as_deref().unwrap_or("Ninguno")),
            format!("Es Mobile: {}", yes_no(is_mobile)),
        ];

        match &self.config {
            Some(c) => {
                lines.push("Configuración cargada:".to_string());
                lines.push(format!("Logo URL: {}", c.logo_url.as_deref().unwrap_or("null")));
                lines.push(format!("Logo Width: {}", c.logo_width));
                lines.push(format!("Logo Height: {}", c.logo_height));
                lines.push(format!("Mobile Logo Width: {}", c.mobile_logo_width));
                lines.push(format!("Mobile Logo Height: {}", c.mobile_logo_height));
                lines.push(format!("AppBar BG: {}", c.appbar_background_color));
                lines.push(format!("AppBar Text: {}", c.appbar_text_color));
                lines.push(format!("Primary Color: {}", c.primary_color));
            }
            None => lines.push("Configuración: No cargada".to_string()),
        }

        lines
    }
}

/// Contact phone lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneState {
    pub phone: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PhoneState {
    fn default() -> Self {
        Self {
            phone: None,
            loading: true,
            error: None,
        }
    }
}

impl PhoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.loading = true;
        match source.phone().await {
            Ok(phone) => self.phone = phone,
            Err(e) => {
                error!(error = %e, "failed to load contact phone");
                self.error = Some(PHONE_LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StaticCatalog;
    use crate::testing::FailingSource;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r##"{"primary_color": "#ff0000", "logo_width": 200}"##).unwrap();
        assert_eq!(config.primary_color, "#ff0000");
        assert_eq!(config.logo_width, 200);
        assert_eq!(config.section_title_size, SiteConfig::default().section_title_size);
    }

    #[tokio::test]
    async fn test_load_config() {
        let source = StaticCatalog::new().with_site_config(SiteConfig::default());
        let mut state = ConfigState::new();
        assert!(state.loading);

        state.load(&source).await;
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.config.is_some());
    }

    #[tokio::test]
    async fn test_missing_config_sets_error() {
        let mut state = ConfigState::new();
        state.load(&StaticCatalog::new()).await;
        assert!(state.config.is_none());
        assert_eq!(state.error.as_deref(), Some(CONFIG_MISSING));
    }

    #[tokio::test]
    async fn test_failed_config_sets_error() {
        let mut state = ConfigState::new();
        state.load(&FailingSource).await;
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(CONFIG_LOAD_FAILED));
    }

    #[tokio::test]
    async fn test_phone_state() {
        let mut state = PhoneState::new();
        state.load(&StaticCatalog::new().with_phone("0800-555-1234")).await;
        assert_eq!(state.phone.as_deref(), Some("0800-555-1234"));

        let mut state = PhoneState::new();
        state.load(&FailingSource).await;
        assert_eq!(state.error.as_deref(), Some(PHONE_LOAD_FAILED));
    }

    #[test]
    fn test_debug_lines() {
        let lines = ConfigState::new().debug_lines(true);
        assert_eq!(lines[0], "Loading: Sí");
        assert_eq!(lines[1], "Error: Ninguno");
        assert_eq!(lines[2], "Es Mobile: Sí");
        assert_eq!(lines[3], "Configuración: No cargada");

        let lines = ConfigState::loaded(SiteConfig::default()).debug_lines(false);
        assert!(lines.contains(&"Logo URL: null".to_string()));
        assert!(lines.contains(&"Primary Color: #f97316".to_string()));
    }
}
