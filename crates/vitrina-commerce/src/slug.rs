//! URL slugs and product paths.

use crate::catalog::Product;

/// Lowercase `text`, collapse every run of characters outside `[a-z0-9]`
/// into a single `-` and trim dashes from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Whether a category label is a real category name rather than a
/// placeholder such as "Sin categoría".
pub fn is_meaningful_category(label: &str) -> bool {
    !label.trim().is_empty() && !label.to_lowercase().contains("categor")
}

/// Detail page path for a product: `/{category-slug}/{id}`, or
/// `/varios/{id}` when the product has no usable category.
pub fn product_path(product: &Product) -> String {
    let label = product.category_label();
    let slug = if is_meaningful_category(label) {
        slugify(label)
    } else {
        String::new()
    };
    if slug.is_empty() {
        format!("/varios/{}", product.id)
    } else {
        format!("/{}/{}", slug, product.id)
    }
}

/// Path of a product line page.
pub fn line_path(description: &str) -> String {
    format!("/lineas/{}", slugify(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Línea Blanca"), "l-nea-blanca");
        assert_eq!(slugify("  Aires Acondicionados!! "), "aires-acondicionados");
        assert_eq!(slugify("TV & Audio 4K"), "tv-audio-4k");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_product_path_with_category() {
        let p = Product::new(42, "Heladera", Money::pesos(1)).with_category(1, "Heladeras");
        assert_eq!(product_path(&p), "/heladeras/42");
    }

    #[test]
    fn test_product_path_without_category() {
        let p = Product::new(42, "Heladera", Money::pesos(1));
        assert_eq!(product_path(&p), "/varios/42");

        let p = Product::new(7, "Algo", Money::pesos(1)).with_category(1, "Sin categoría");
        assert_eq!(product_path(&p), "/varios/7");
    }

    #[test]
    fn test_line_path() {
        assert_eq!(line_path("Climatización"), "/lineas/climatizaci-n");
    }
}
