//! Home page composition.

use tracing::error;
use vitrina_data::CatalogSource;

/// Sections of the home page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Banners,
    ProductLines,
    Featured,
    /// Twelve interest-free installments promotion.
    Installments,
    Combos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub show_combos: bool,
}

impl HomePage {
    pub fn new(show_combos: bool) -> Self {
        Self { show_combos }
    }

    /// Ask the source whether combos are shown. A failed read hides them.
    pub async fn load<S: CatalogSource + ?Sized>(source: &S) -> Self {
        let show_combos = source.show_combos().await.unwrap_or_else(|e| {
            error!(error = %e, "failed to read combos flag");
            false
        });
        Self::new(show_combos)
    }

    pub fn sections(&self) -> Vec<HomeSection> {
        let mut sections = vec![
            HomeSection::Banners,
            HomeSection::ProductLines,
            HomeSection::Featured,
            HomeSection::Installments,
        ];
        if self.show_combos {
            sections.push(HomeSection::Combos);
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_data::StaticCatalog;

    #[test]
    fn test_sections_order() {
        assert_eq!(
            HomePage::new(true).sections(),
            vec![
                HomeSection::Banners,
                HomeSection::ProductLines,
                HomeSection::Featured,
                HomeSection::Installments,
                HomeSection::Combos,
            ]
        );
        assert!(!HomePage::new(false).sections().contains(&HomeSection::Combos));
    }

    #[tokio::test]
    async fn test_load() {
        let page = HomePage::load(&StaticCatalog::new().with_show_combos(true)).await;
        assert!(page.show_combos);
    }
}
