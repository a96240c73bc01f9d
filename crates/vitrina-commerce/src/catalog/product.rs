//! Product types and the remote naming boundary.
//!
//! The remote catalog sends products under two naming schemes
//! (`descripcion`/`name`, `precio`/`price`, `imagen`/`image`, nested
//! `categoria`/flat `category`, ...). [`RawProduct`] accepts both and
//! [`Product::from_raw`] resolves them into one canonical record. Nothing past
//! this boundary looks at the raw names again.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{parse_date, Offer, Promo, ValidityWindow};
use crate::error::CommerceError;
use crate::ids::{BrandId, CategoryId, LineId, ProductId, PromoId};
use crate::money::{Currency, Money};

/// Image used when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

const NO_DESCRIPTION: &str = "Sin descripción";
const NO_CATEGORY: &str = "Sin categoría";
const NO_BRAND: &str = "Sin marca";

/// A product as the remote service sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawProduct {
    pub id: ProductId,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub imagenes: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub categoria: Option<RawCategoryRef>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub marca: Option<RawBrandRef>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub fk_id_categoria: Option<CategoryId>,
    #[serde(default)]
    pub fk_id_marca: Option<BrandId>,
    #[serde(default, deserialize_with = "strict_bool")]
    pub tiene_stock: Option<bool>,
    #[serde(default, deserialize_with = "strict_bool")]
    pub destacado: Option<bool>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub precio_oferta: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub descuento_porcentual: Option<f64>,
    #[serde(default)]
    pub fecha_vigencia_desde: Option<String>,
    #[serde(default)]
    pub fecha_vigencia_hasta: Option<String>,
    #[serde(default)]
    pub promo: Option<RawPromo>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub precio_con_descuento: Option<f64>,
}

/// Nested category record on a raw product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawCategoryRef {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub fk_id_linea: Option<LineId>,
}

/// Nested brand record on a raw product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawBrandRef {
    #[serde(default)]
    pub id: Option<BrandId>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Promotional campaign record on a raw product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawPromo {
    #[serde(default)]
    pub id: Option<PromoId>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub descuento_porcentaje: Option<f64>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
}

/// A product in its canonical form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product description shown as its title.
    pub description: String,
    /// Base price.
    pub price: Money,
    /// Main image URL.
    pub image: Option<String>,
    /// Gallery image URLs, trimmed and without blanks.
    pub images: Vec<String>,
    /// Category this product belongs to.
    pub category_id: Option<CategoryId>,
    /// Category display name, if the record carried one.
    pub category_name: Option<String>,
    /// Brand of this product.
    pub brand_id: Option<BrandId>,
    /// Brand display name, if the record carried one.
    pub brand_name: Option<String>,
    /// Brand logo URL.
    pub brand_logo: Option<String>,
    /// Stock flag. Only `Some(true)` means the product can be added to a list.
    pub in_stock: Option<bool>,
    /// Highlighted in the featured section.
    pub featured: bool,
    /// Individual offer.
    pub offer: Option<Offer>,
    /// Promotional campaign.
    pub promo: Option<Promo>,
}

impl Product {
    /// Create a product with no stock information, offer or promotion.
    pub fn new(id: i64, description: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            description: description.into(),
            price,
            image: None,
            images: Vec::new(),
            category_id: None,
            category_name: None,
            brand_id: None,
            brand_name: None,
            brand_logo: None,
            in_stock: None,
            featured: false,
            offer: None,
            promo: None,
        }
    }

    /// Set the stock flag.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Attach an individual offer.
    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offer = Some(offer);
        self
    }

    /// Attach a promotional campaign.
    pub fn with_promo(mut self, promo: Promo) -> Self {
        self.promo = Some(promo);
        self
    }

    /// Set the category.
    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category_id = Some(CategoryId::new(id));
        self.category_name = Some(name.into());
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, id: i64, name: impl Into<String>) -> Self {
        self.brand_id = Some(BrandId::new(id));
        self.brand_name = Some(name.into());
        self
    }

    /// Resolve a raw record into the canonical schema.
    pub fn from_raw(raw: RawProduct) -> Self {
        let description = first_text([raw.descripcion.as_deref(), raw.name.as_deref()])
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        // A zero `precio` falls through to `price`.
        let price = [raw.precio, raw.price]
            .into_iter()
            .flatten()
            .find(|p| *p > 0.0)
            .map(|p| Money::from_decimal(p, Currency::ARS))
            .unwrap_or_default();

        let image = first_text([raw.imagen.as_deref(), raw.image.as_deref()]);

        let mut images: Vec<String> = raw
            .imagenes
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();
        if images.is_empty() {
            images.extend(image.clone());
        }

        let categoria = raw.categoria.unwrap_or_default();
        let marca = raw.marca.unwrap_or_default();

        let category_name = first_text([categoria.descripcion.as_deref(), raw.category.as_deref()]);
        let brand_name = first_text([marca.descripcion.as_deref(), raw.brand.as_deref()]);

        let offer = if raw.precio_oferta.is_some() || raw.descuento_porcentual.is_some() {
            Some(Offer {
                price: raw
                    .precio_oferta
                    .map(|p| Money::from_decimal(p, Currency::ARS)),
                percent: raw.descuento_porcentual,
                window: ValidityWindow::new(
                    raw.fecha_vigencia_desde.as_deref().and_then(parse_date),
                    raw.fecha_vigencia_hasta.as_deref().and_then(parse_date),
                ),
            })
        } else {
            None
        };

        let promo = raw.promo.map(|p| Promo {
            id: p.id,
            name: p.nombre.unwrap_or_default(),
            description: p.descripcion.filter(|d| !d.trim().is_empty()),
            discount_percent: p.descuento_porcentaje.unwrap_or(0.0),
            discounted_price: raw
                .precio_con_descuento
                .map(|price| Money::from_decimal(price, Currency::ARS)),
            window: ValidityWindow::new(
                p.fecha_inicio.as_deref().and_then(parse_date),
                p.fecha_fin.as_deref().and_then(parse_date),
            ),
        });

        Self {
            id: raw.id,
            description,
            price,
            image,
            images,
            category_id: raw.fk_id_categoria.or(categoria.id),
            category_name,
            brand_id: raw.fk_id_marca.or(marca.id),
            brand_name,
            brand_logo: marca.logo,
            in_stock: raw.tiene_stock,
            featured: raw.destacado.unwrap_or(false),
            offer,
            promo,
        }
    }

    /// Parse a single remote product record.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let raw: RawProduct = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Whether the product may be added to a shopping list.
    pub fn is_addable(&self) -> bool {
        self.in_stock == Some(true)
    }

    /// Category name, or the generic label.
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(NO_CATEGORY)
    }

    /// Brand name, or the generic label.
    pub fn brand_label(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(NO_BRAND)
    }

    /// Main image URL, or the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Product::from_raw(raw)
    }
}

fn first_text<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Only a JSON `true`/`false` counts; strings, numbers and null read as unknown.
fn strict_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => Some(b),
        _ => None,
    })
}

/// Numbers may arrive as JSON numbers or numeric strings.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_names_win() {
        let product = Product::from_json(
            r#"{
                "id": 1,
                "descripcion": "Heladera Patrick",
                "name": "Fridge",
                "precio": 1000,
                "price": 5,
                "imagen": "https://x.supabase.co/a.jpg",
                "image": "https://other/b.jpg",
                "categoria": {"id": 3, "descripcion": "Heladeras"},
                "category": "Fridges",
                "marca": {"id": 7, "descripcion": "Patrick", "logo": "logo.png"},
                "tiene_stock": true
            }"#,
        )
        .unwrap();

        assert_eq!(product.description, "Heladera Patrick");
        assert_eq!(product.price, Money::pesos(1000));
        assert_eq!(product.image.as_deref(), Some("https://x.supabase.co/a.jpg"));
        assert_eq!(product.category_label(), "Heladeras");
        assert_eq!(product.category_id, Some(CategoryId::new(3)));
        assert_eq!(product.brand_label(), "Patrick");
        assert_eq!(product.brand_logo.as_deref(), Some("logo.png"));
        assert!(product.is_addable());
    }

    #[test]
    fn test_english_names_as_fallback() {
        let product = Product::from_json(
            r#"{"id": 2, "name": "Lavarropas", "precio": 0, "price": 250.5,
                "image": "b.jpg", "category": "Lavado", "brand": "Drean"}"#,
        )
        .unwrap();

        assert_eq!(product.description, "Lavarropas");
        assert_eq!(product.price, Money::new(25050, Currency::ARS));
        assert_eq!(product.image.as_deref(), Some("b.jpg"));
        assert_eq!(product.images, vec!["b.jpg".to_string()]);
        assert_eq!(product.category_label(), "Lavado");
        assert_eq!(product.brand_label(), "Drean");
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let product = Product::from_json(r#"{"id": 3}"#).unwrap();
        assert_eq!(product.description, "Sin descripción");
        assert!(product.price.is_zero());
        assert_eq!(product.category_label(), "Sin categoría");
        assert_eq!(product.brand_label(), "Sin marca");
        assert_eq!(product.image_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(product.in_stock, None);
    }

    #[test]
    fn test_stock_flag_is_strict() {
        for (json, expected) in [
            (r#"{"id": 1, "tiene_stock": true}"#, Some(true)),
            (r#"{"id": 1, "tiene_stock": false}"#, Some(false)),
            (r#"{"id": 1, "tiene_stock": null}"#, None),
            (r#"{"id": 1, "tiene_stock": "true"}"#, None),
            (r#"{"id": 1}"#, None),
        ] {
            let product = Product::from_json(json).unwrap();
            assert_eq!(product.in_stock, expected, "{}", json);
            assert_eq!(product.is_addable(), expected == Some(true));
        }
    }

    #[test]
    fn test_gallery_images_trimmed() {
        let product = Product::from_json(
            r#"{"id": 4, "imagen": "main.jpg",
                "imagenes": [" a.jpg ", "", null, "  ", "b.jpg"]}"#,
        )
        .unwrap();
        assert_eq!(product.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn test_offer_and_promo_parsed() {
        let product = Product::from_json(
            r#"{"id": 5, "precio": "1000", "precio_oferta": 800, "descuento_porcentual": 20,
                "fecha_vigencia_desde": "2026-01-01", "fecha_vigencia_hasta": "2026-12-31T23:59:59",
                "precio_con_descuento": 900,
                "promo": {"id": 2, "nombre": "Hot Sale", "descuento_porcentaje": 10,
                          "fecha_inicio": "2026-05-01", "fecha_fin": "2026-05-31"}}"#,
        )
        .unwrap();

        let offer = product.offer.unwrap();
        assert_eq!(offer.price, Some(Money::pesos(800)));
        assert_eq!(offer.percent, Some(20.0));
        assert!(offer.window.until.is_some());

        let promo = product.promo.unwrap();
        assert_eq!(promo.name, "Hot Sale");
        assert_eq!(promo.discounted_price, Some(Money::pesos(900)));
        assert!(promo.is_discount_bearing());
    }
}
