//! CSS custom properties and global stylesheet derived from the site config.

use std::fmt::Write;

use vitrina_data::SiteConfig;

/// Breakpoint below which mobile sizes apply.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// The storefront theme: an ordered list of CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    vars: Vec<(&'static str, String)>,
    body_font: String,
}

impl Theme {
    pub fn from_config(config: &SiteConfig) -> Self {
        let px = |v: u32| format!("{v}px");
        let vars = vec![
            ("--primary-color", config.primary_color.clone()),
            ("--secondary-color", config.secondary_color.clone()),
            ("--accent-color", config.accent_color.clone()),
            ("--font-family-primary", config.font_family_primary.clone()),
            ("--font-family-secondary", config.font_family_secondary.clone()),
            ("--section-title-size", px(config.section_title_size)),
            ("--section-subtitle-size", px(config.section_subtitle_size)),
            ("--section-text-size", px(config.section_text_size)),
            ("--mobile-section-title-size", px(config.mobile_section_title_size)),
            ("--mobile-section-subtitle-size", px(config.mobile_section_subtitle_size)),
            ("--mobile-section-text-size", px(config.mobile_section_text_size)),
            ("--search-box-width", px(config.search_box_width)),
            ("--search-box-height", px(config.search_box_height)),
            ("--mobile-search-box-width", px(config.mobile_search_box_width)),
            ("--mobile-search-box-height", px(config.mobile_search_box_height)),
            ("--home-section-height", px(config.home_section_height)),
            ("--mobile-home-section-height", px(config.mobile_home_section_height)),
        ];
        Self {
            vars,
            body_font: config.font_family_primary.clone(),
        }
    }

    /// Theme for an optional config. Without one the default styles apply.
    pub fn maybe_from(config: Option<&SiteConfig>) -> Option<Self> {
        config.map(Self::from_config)
    }

    pub fn vars(&self) -> &[(&'static str, String)] {
        &self.vars
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Font family applied to the document body.
    pub fn body_font(&self) -> &str {
        &self.body_font
    }

    /// `:root { ... }` block with every custom property.
    pub fn root_block(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }

    /// Full global stylesheet: custom properties plus the utility classes
    /// that use them.
    pub fn stylesheet(&self) -> String {
        let mut css = self.root_block();
        css.push_str("\n\n");
        css.push_str(UTILITY_CLASSES);
        let _ = write!(css, "\n@media (max-width: {MOBILE_BREAKPOINT_PX}px) {{\n");
        css.push_str(MOBILE_OVERRIDES);
        css.push_str("}\n\n");
        css.push_str(BUTTONS_AND_LINKS);
        css
    }
}

const UTILITY_CLASSES: &str = r#"body { font-family: var(--font-family-primary); }
.primary-color { color: var(--primary-color); }
.bg-primary-color { background-color: var(--primary-color); }
.secondary-color { color: var(--secondary-color); }
.bg-secondary-color { background-color: var(--secondary-color); }
.accent-color { color: var(--accent-color); }
.bg-accent-color { background-color: var(--accent-color); }
.section-title { font-size: var(--section-title-size); font-family: var(--font-family-primary); }
.section-subtitle { font-size: var(--section-subtitle-size); font-family: var(--font-family-secondary); }
.section-text { font-size: var(--section-text-size); font-family: var(--font-family-secondary); }
.search-box { width: var(--search-box-width); height: var(--search-box-height); }
.home-section { min-height: var(--home-section-height); }
"#;

const MOBILE_OVERRIDES: &str = r#"  .section-title { font-size: var(--mobile-section-title-size); }
  .section-subtitle { font-size: var(--mobile-section-subtitle-size); }
  .section-text { font-size: var(--mobile-section-text-size); }
  .search-box { width: var(--mobile-search-box-width); height: var(--mobile-search-box-height); }
  .home-section { min-height: var(--mobile-home-section-height); }
"#;

const BUTTONS_AND_LINKS: &str = r#".btn-primary { background-color: var(--primary-color); border-color: var(--primary-color); }
.btn-primary:hover { background-color: var(--accent-color); border-color: var(--accent-color); }
.btn-secondary { background-color: var(--secondary-color); border-color: var(--secondary-color); }
.btn-accent { background-color: var(--accent-color); border-color: var(--accent-color); }
a.link-primary { color: var(--primary-color); }
a.link-primary:hover { color: var(--accent-color); }
"#;
