//! Categories, brands and product lines.
//!
//! Categories are optionally grouped under a product line ("Línea"); the
//! navigation shows lines first, then the categories that have no line.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{BrandId, CategoryId, LineId};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Line this category belongs to.
    #[serde(rename = "fk_id_linea", default)]
    pub line_id: Option<LineId>,
}

impl Category {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            description: description.into(),
            line_id: None,
        }
    }

    /// Place this category under a line.
    pub fn in_line(mut self, line_id: LineId) -> Self {
        self.line_id = Some(line_id);
        self
    }
}

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Display name.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

impl Brand {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id: BrandId::new(id),
            description: description.into(),
            logo: None,
        }
    }
}

/// A product line grouping several categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Display name.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Image shown in the lines strip.
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

impl ProductLine {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id: LineId::new(id),
            description: description.into(),
            image: None,
        }
    }
}

/// A line together with its categories, as shown in the navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineWithCategories {
    #[serde(flatten)]
    pub line: ProductLine,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<Category>,
}

/// Attach each category to its line, keeping the input order of both.
pub fn group_lines(lines: &[ProductLine], categories: &[Category]) -> Vec<LineWithCategories> {
    lines
        .iter()
        .map(|line| LineWithCategories {
            line: line.clone(),
            categories: categories
                .iter()
                .filter(|c| c.line_id == Some(line.id))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Categories that belong to no known line.
pub fn categories_without_line(lines: &[ProductLine], categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| match c.line_id {
            None => true,
            Some(line_id) => !lines.iter().any(|l| l.id == line_id),
        })
        .cloned()
        .collect()
}

/// Lines that contain at least one product through one of their categories.
pub fn lines_with_products(
    lines: &[ProductLine],
    categories: &[Category],
    products: &[Product],
) -> Vec<ProductLine> {
    lines
        .iter()
        .filter(|line| {
            categories
                .iter()
                .filter(|c| c.line_id == Some(line.id))
                .any(|c| products.iter().any(|p| p.category_id == Some(c.id)))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn fixture() -> (Vec<ProductLine>, Vec<Category>) {
        let lines = vec![ProductLine::new(1, "Línea Blanca"), ProductLine::new(2, "Climatización")];
        let categories = vec![
            Category::new(10, "Heladeras").in_line(LineId::new(1)),
            Category::new(11, "Lavarropas").in_line(LineId::new(1)),
            Category::new(12, "Colchones"),
            Category::new(13, "Huérfana").in_line(LineId::new(99)),
        ];
        (lines, categories)
    }

    #[test]
    fn test_group_lines() {
        let (lines, categories) = fixture();
        let grouped = group_lines(&lines, &categories);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].categories.len(), 2);
        assert!(grouped[1].categories.is_empty());
    }

    #[test]
    fn test_categories_without_line() {
        let (lines, categories) = fixture();
        let loose = categories_without_line(&lines, &categories);
        let names: Vec<_> = loose.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(names, vec!["Colchones", "Huérfana"]);
    }

    #[test]
    fn test_lines_with_products() {
        let (lines, categories) = fixture();
        let mut product = Product::new(1, "Heladera No Frost", Money::pesos(500_000));
        product.category_id = Some(CategoryId::new(10));
        let with_products = lines_with_products(&lines, &categories, &[product]);
        assert_eq!(with_products, vec![lines[0].clone()]);
    }

    #[test]
    fn test_category_deserializes_remote_names() {
        let c: Category =
            serde_json::from_str(r#"{"id": 4, "descripcion": "Cocinas", "fk_id_linea": 2}"#)
                .unwrap();
        assert_eq!(c.description, "Cocinas");
        assert_eq!(c.line_id, Some(LineId::new(2)));
    }
}
