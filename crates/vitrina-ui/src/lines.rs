//! Product lines strip on the home page.

use tracing::error;
use vitrina_commerce::catalog::ProductLine;
use vitrina_commerce::slug::line_path;
use vitrina_data::CatalogSource;

/// One entry in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLink {
    pub label: String,
    pub href: String,
    pub image: Option<String>,
}

impl From<&ProductLine> for LineLink {
    fn from(line: &ProductLine) -> Self {
        Self {
            label: line.description.clone(),
            href: line_path(&line.description),
            image: line.image.clone(),
        }
    }
}

/// Lines that currently have products, each linking to its page.
#[derive(Debug, Clone, Default)]
pub struct ProductLinesStrip {
    links: Vec<LineLink>,
    loaded: bool,
}

impl ProductLinesStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: &[ProductLine]) -> Self {
        Self {
            links: lines.iter().map(LineLink::from).collect(),
            loaded: true,
        }
    }

    /// Fetch lines with products. A failed fetch hides the strip.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.links = match source.lines_with_products().await {
            Ok(lines) => lines.iter().map(LineLink::from).collect(),
            Err(e) => {
                error!(error = %e, "failed to load product lines");
                Vec::new()
            }
        };
        self.loaded = true;
    }

    pub fn links(&self) -> &[LineLink] {
        &self.links
    }

    pub fn is_visible(&self) -> bool {
        self.loaded && !self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let mut line = ProductLine::new(1, "Aire Acondicionado");
        line.image = Some("https://x.supabase.co/aire.png".to_string());
        let strip = ProductLinesStrip::from_lines(&[line]);
        assert!(strip.is_visible());
        assert_eq!(strip.links()[0].href, "/lineas/aire-acondicionado");
        assert!(strip.links()[0].image.is_some());
    }

    #[test]
    fn test_hidden_when_empty_or_loading() {
        assert!(!ProductLinesStrip::new().is_visible());
        assert!(!ProductLinesStrip::from_lines(&[]).is_visible());
    }
}
