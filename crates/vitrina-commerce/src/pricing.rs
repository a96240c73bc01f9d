//! Price resolution for offers and promotional campaigns.
//!
//! A product can carry an individual offer, a promotional campaign, both or
//! neither. [`resolve_pricing`] decides which of them apply on a given day and
//! what the shopper sees. It depends only on the product and the date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// What the price block shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceDisplay {
    /// Base price only.
    Regular { price: Money },
    /// One discount applies: struck-through base price and the discounted one.
    Discounted {
        original: Money,
        price: Money,
        percent: f64,
    },
    /// Offer and campaign both apply and are shown one above the other.
    Stacked {
        original: Money,
        offer_price: Money,
        offer_percent: f64,
        promo_price: Money,
        promo_percent: f64,
        promo_name: String,
    },
}

/// Outcome of resolving a product's price on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResolution {
    /// Price before any discount.
    pub base_price: Money,
    /// An individual offer is running.
    pub has_offer: bool,
    /// A discount-bearing campaign is running.
    pub has_promo: bool,
    /// A campaign below 1% is running; shown as a badge only.
    pub has_informational_promo: bool,
    /// Either discount applies.
    pub has_discount: bool,
    /// Headline price.
    pub final_price: Money,
    /// Percentage on the discount badge.
    pub discount_percentage: f64,
    /// Unit price handed to installment plan calculations.
    pub financing_price: Money,
    /// How the price block is laid out.
    pub display: PriceDisplay,
}

/// Resolve the price a shopper sees for `product` on `today`.
///
/// The offer takes precedence over the campaign for the headline and
/// financing prices. When both apply they are displayed stacked.
pub fn resolve_pricing(product: &Product, today: NaiveDate) -> PriceResolution {
    let base = product.price;

    let offer = product
        .offer
        .as_ref()
        .filter(|o| o.window.contains(today))
        .and_then(|o| {
            o.price_for(base)
                .filter(Money::is_positive)
                .map(|price| (price, o.percent_for(base)))
        });

    let promo_in_window = product
        .promo
        .as_ref()
        .filter(|p| p.window.contains(today));

    let promo = promo_in_window
        .filter(|p| p.is_discount_bearing())
        .and_then(|p| {
            p.discounted_price
                .filter(Money::is_positive)
                .map(|price| (price, p.discount_percent, p.name.clone()))
        });

    let has_informational_promo = promo_in_window.is_some_and(|p| !p.is_discount_bearing());

    let (final_price, discount_percentage) = match (&offer, &promo) {
        (Some((price, percent)), _) => (*price, *percent),
        (None, Some((price, percent, _))) => (*price, *percent),
        (None, None) => (base, 0.0),
    };

    let financing_price = offer.as_ref().map(|(price, _)| *price).unwrap_or(base);

    let display = match (&offer, &promo) {
        (Some((offer_price, offer_percent)), Some((promo_price, promo_percent, name))) => {
            PriceDisplay::Stacked {
                original: base,
                offer_price: *offer_price,
                offer_percent: *offer_percent,
                promo_price: *promo_price,
                promo_percent: *promo_percent,
                promo_name: name.clone(),
            }
        }
        (None, None) => PriceDisplay::Regular { price: base },
        _ => PriceDisplay::Discounted {
            original: base,
            price: final_price,
            percent: discount_percentage,
        },
    };

    PriceResolution {
        base_price: base,
        has_offer: offer.is_some(),
        has_promo: promo.is_some(),
        has_informational_promo,
        has_discount: offer.is_some() || promo.is_some(),
        final_price,
        discount_percentage,
        financing_price,
        display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Offer, Promo, ValidityWindow};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer(price: i64, percent: f64) -> Offer {
        Offer {
            price: Some(Money::pesos(price)),
            percent: Some(percent),
            window: ValidityWindow::always(),
        }
    }

    fn promo(percent: f64, price: Option<i64>) -> Promo {
        Promo {
            id: None,
            name: "Hot Sale".to_string(),
            description: None,
            discount_percent: percent,
            discounted_price: price.map(Money::pesos),
            window: ValidityWindow::always(),
        }
    }

    fn base() -> Product {
        Product::new(1, "Heladera", Money::pesos(1000)).with_stock(true)
    }

    #[test]
    fn test_no_discount() {
        let r = resolve_pricing(&base(), today());
        assert!(!r.has_discount);
        assert_eq!(r.final_price, Money::pesos(1000));
        assert_eq!(r.financing_price, Money::pesos(1000));
        assert_eq!(r.display, PriceDisplay::Regular { price: Money::pesos(1000) });
    }

    #[test]
    fn test_active_offer_only() {
        let r = resolve_pricing(&base().with_offer(offer(800, 20.0)), today());
        assert!(r.has_offer);
        assert!(!r.has_promo);
        assert!(r.has_discount);
        assert_eq!(r.final_price, Money::pesos(800));
        assert_eq!(r.discount_percentage, 20.0);
        assert_eq!(r.financing_price, Money::pesos(800));
        assert!(matches!(r.display, PriceDisplay::Discounted { percent, .. } if percent == 20.0));
    }

    #[test]
    fn test_offer_percentage_without_explicit_price() {
        let product = base().with_offer(Offer {
            price: None,
            percent: Some(20.0),
            window: ValidityWindow::always(),
        });
        let r = resolve_pricing(&product, today());
        assert_eq!(r.final_price, Money::pesos(800));
    }

    #[test]
    fn test_expired_offer_ignored() {
        let mut o = offer(800, 20.0);
        o.window = ValidityWindow::new(Some(day(2026, 1, 1)), Some(day(2026, 1, 31)));
        let r = resolve_pricing(&base().with_offer(o), today());
        assert!(!r.has_offer);
        assert_eq!(r.final_price, Money::pesos(1000));
    }

    #[test]
    fn test_future_offer_ignored() {
        let mut o = offer(800, 20.0);
        o.window = ValidityWindow::new(Some(day(2026, 11, 1)), None);
        assert!(!resolve_pricing(&base().with_offer(o), today()).has_offer);
    }

    #[test]
    fn test_promo_only() {
        let r = resolve_pricing(&base().with_promo(promo(15.0, Some(850))), today());
        assert!(r.has_promo);
        assert!(!r.has_informational_promo);
        assert_eq!(r.final_price, Money::pesos(850));
        assert_eq!(r.discount_percentage, 15.0);
        // Campaign prices are not used for financing.
        assert_eq!(r.financing_price, Money::pesos(1000));
    }

    #[test]
    fn test_informational_promo() {
        let r = resolve_pricing(&base().with_promo(promo(0.5, Some(995))), today());
        assert!(r.has_informational_promo);
        assert!(!r.has_promo);
        assert!(!r.has_discount);
        assert_eq!(r.final_price, Money::pesos(1000));
        assert_eq!(r.display, PriceDisplay::Regular { price: Money::pesos(1000) });
    }

    #[test]
    fn test_zero_percent_promo_is_informational() {
        let r = resolve_pricing(&base().with_promo(promo(0.0, None)), today());
        assert!(r.has_informational_promo);
        assert!(!r.has_discount);
    }

    #[test]
    fn test_promo_without_discounted_price_is_not_applied() {
        let r = resolve_pricing(&base().with_promo(promo(10.0, None)), today());
        assert!(!r.has_promo);
        assert!(!r.has_informational_promo);
        assert_eq!(r.final_price, Money::pesos(1000));
    }

    #[test]
    fn test_offer_and_promo_stacked() {
        let product = base()
            .with_offer(offer(800, 20.0))
            .with_promo(promo(10.0, Some(900)));
        let r = resolve_pricing(&product, today());

        assert!(r.has_offer && r.has_promo);
        assert_eq!(r.final_price, Money::pesos(800));
        assert_eq!(r.financing_price, Money::pesos(800));
        assert_eq!(
            r.display,
            PriceDisplay::Stacked {
                original: Money::pesos(1000),
                offer_price: Money::pesos(800),
                offer_percent: 20.0,
                promo_price: Money::pesos(900),
                promo_percent: 10.0,
                promo_name: "Hot Sale".to_string(),
            }
        );
    }

    #[test]
    fn test_promo_outside_window_not_shown() {
        let mut p = promo(0.5, None);
        p.window = ValidityWindow::new(None, Some(day(2026, 10, 18)));
        let r = resolve_pricing(&base().with_promo(p), today());
        assert!(!r.has_informational_promo);
        assert!(!r.has_promo);
    }
}
