//! Product card view model.

use chrono::NaiveDate;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::pricing::{resolve_pricing, PriceResolution};
use vitrina_commerce::slug::product_path;
use vitrina_list::{ListStorage, ShoppingListStore};

use crate::button::ClickOutcome;

/// Badge in the image's top-right corner. Only one is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum CornerBadge {
    OutOfStock,
    /// Active discount, e.g. `-20%`.
    Discount(f64),
    Featured,
}

impl CornerBadge {
    pub fn text(&self) -> String {
        match self {
            Self::OutOfStock => "Sin Stock".to_string(),
            Self::Discount(percent) => format!("-{}%", format_percent(*percent)),
            Self::Featured => "Destacado".to_string(),
        }
    }
}

/// Informational campaign shown under the title.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoInfo {
    pub name: String,
    pub description: Option<String>,
    /// "Válida hasta el ..." line, only when the campaign has both dates.
    pub validity: Option<String>,
}

/// Everything a product card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product: Product,
    pub title: String,
    pub brand: String,
    pub image: String,
    pub href: String,
    pub has_stock: bool,
    pub badge: Option<CornerBadge>,
    pub promo_info: Option<PromoInfo>,
    pub pricing: PriceResolution,
}

impl ProductCard {
    pub fn new(product: &Product, today: NaiveDate) -> Self {
        let pricing = resolve_pricing(product, today);
        let has_stock = product.is_addable();

        let badge = if !has_stock {
            Some(CornerBadge::OutOfStock)
        } else if pricing.has_discount {
            Some(CornerBadge::Discount(pricing.discount_percentage))
        } else if product.featured {
            Some(CornerBadge::Featured)
        } else {
            None
        };

        let promo_info = product
            .promo
            .as_ref()
            .filter(|_| pricing.has_informational_promo)
            .map(|promo| PromoInfo {
                name: promo.name.clone(),
                description: promo.description.clone(),
                validity: match (promo.window.from, promo.window.until) {
                    (Some(_), Some(until)) => Some(format!(
                        "Válida hasta el {} - PAGO CONTADO",
                        until.format("%d/%m/%Y")
                    )),
                    _ => None,
                },
            });

        Self {
            product: product.clone(),
            title: product.description.clone(),
            brand: product.brand_label().to_string(),
            image: product.image_or_placeholder().to_string(),
            href: product_path(product),
            has_stock,
            badge,
            promo_info,
            pricing,
        }
    }

    /// The favourite toggle is only offered for products in stock.
    pub fn shows_favorite(&self) -> bool {
        self.has_stock
    }

    pub fn is_favorite<S: ListStorage>(&self, store: &ShoppingListStore<S>) -> bool {
        store.is_in_list(self.product.id)
    }

    /// Toggle the product in the shopping list from the heart icon.
    pub fn toggle_favorite<S: ListStorage>(&self, store: &mut ShoppingListStore<S>) -> ClickOutcome {
        if !self.has_stock {
            return ClickOutcome::Rejected;
        }
        if store.remove_item(self.product.id) {
            ClickOutcome::Removed
        } else {
            store.add_item(self.product.clone());
            ClickOutcome::Added
        }
    }
}

/// `20` for whole percentages, `12.5` otherwise.
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{percent:.0}")
    } else {
        percent.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_commerce::catalog::{Offer, Promo, ValidityWindow};
    use vitrina_commerce::Money;
    use vitrina_list::MemoryStorage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn product() -> Product {
        Product::new(7, "Heladera No Frost", Money::pesos(1000))
            .with_stock(true)
            .with_category(1, "Heladeras")
            .with_brand(2, "Gafa")
    }

    #[test]
    fn test_basic_card() {
        let card = ProductCard::new(&product(), today());
        assert_eq!(card.href, "/heladeras/7");
        assert_eq!(card.brand, "Gafa");
        assert_eq!(card.image, "/placeholder.jpg");
        assert_eq!(card.badge, None);
        assert!(card.shows_favorite());
    }

    #[test]
    fn test_out_of_stock_badge_wins() {
        let mut p = product().with_offer(Offer {
            price: Some(Money::pesos(800)),
            percent: Some(20.0),
            window: ValidityWindow::always(),
        });
        p.in_stock = Some(false);
        p.featured = true;
        let card = ProductCard::new(&p, today());
        assert_eq!(card.badge, Some(CornerBadge::OutOfStock));
        assert!(!card.shows_favorite());
    }

    #[test]
    fn test_discount_badge_over_featured() {
        let mut p = product().with_offer(Offer {
            price: Some(Money::pesos(800)),
            percent: Some(20.0),
            window: ValidityWindow::always(),
        });
        p.featured = true;
        let card = ProductCard::new(&p, today());
        assert_eq!(card.badge.as_ref().map(CornerBadge::text).as_deref(), Some("-20%"));

        p.offer = None;
        let card = ProductCard::new(&p, today());
        assert_eq!(card.badge, Some(CornerBadge::Featured));
    }

    #[test]
    fn test_informational_promo_box() {
        let p = product().with_promo(Promo {
            id: None,
            name: "Cyber Monday".to_string(),
            description: Some("Solo efectivo".to_string()),
            discount_percent: 0.0,
            discounted_price: None,
            window: ValidityWindow::new(
                NaiveDate::from_ymd_opt(2026, 10, 1),
                NaiveDate::from_ymd_opt(2026, 11, 3),
            ),
        });
        let card = ProductCard::new(&p, today());
        let info = card.promo_info.unwrap();
        assert_eq!(info.name, "Cyber Monday");
        assert_eq!(
            info.validity.as_deref(),
            Some("Válida hasta el 03/11/2026 - PAGO CONTADO")
        );
        assert_eq!(card.badge, None);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut store = ShoppingListStore::load(MemoryStorage::new());
        let card = ProductCard::new(&product(), today());
        assert_eq!(card.toggle_favorite(&mut store), ClickOutcome::Added);
        assert!(card.is_favorite(&store));
        assert_eq!(card.toggle_favorite(&mut store), ClickOutcome::Removed);
        assert!(!card.is_favorite(&store));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20");
        assert_eq!(format_percent(12.5), "12.5");
    }
}
