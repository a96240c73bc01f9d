//! Individual offers and promotional campaigns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::PromoId;
use crate::money::Money;

/// An inclusive date range. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidityWindow {
    /// First day the window is open.
    pub from: Option<NaiveDate>,
    /// Last day the window is open.
    pub until: Option<NaiveDate>,
}

impl ValidityWindow {
    /// Create a window from optional bounds.
    pub fn new(from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { from, until }
    }

    /// A window with no bounds.
    pub fn always() -> Self {
        Self::default()
    }

    /// Check whether `today` falls inside the window.
    pub fn contains(&self, today: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if today < from {
                return false;
            }
        }
        if let Some(until) = self.until {
            if today > until {
                return false;
            }
        }
        true
    }
}

/// A per-product offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Explicit offer price.
    pub price: Option<Money>,
    /// Percentage off the base price.
    pub percent: Option<f64>,
    /// Dates the offer is valid.
    pub window: ValidityWindow,
}

impl Offer {
    /// Offer price for a base price.
    ///
    /// The explicit price wins; otherwise the percentage is applied to `base`.
    pub fn price_for(&self, base: Money) -> Option<Money> {
        match (self.price, self.percent) {
            (Some(price), _) => Some(price),
            (None, Some(percent)) => Some(base.discounted(percent)),
            (None, None) => None,
        }
    }

    /// Percentage shown on the badge, derived from the prices when not given.
    pub fn percent_for(&self, base: Money) -> f64 {
        if let Some(percent) = self.percent {
            return percent;
        }
        match self.price {
            Some(price) if base.is_positive() => {
                let saved = (base.amount_cents - price.amount_cents) as f64;
                (saved / base.amount_cents as f64 * 100.0).round()
            }
            _ => 0.0,
        }
    }
}

/// A promotional campaign attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promo {
    /// Campaign identifier.
    pub id: Option<PromoId>,
    /// Campaign name.
    pub name: String,
    /// Campaign description.
    pub description: Option<String>,
    /// Percentage off. Below 1 the campaign is informational only.
    pub discount_percent: f64,
    /// Product price with the campaign applied.
    pub discounted_price: Option<Money>,
    /// Dates the campaign runs.
    pub window: ValidityWindow,
}

impl Promo {
    /// Whether the campaign carries a real discount.
    pub fn is_discount_bearing(&self) -> bool {
        self.discount_percent >= 1.0
    }
}

/// Parse the date part of a remote date or timestamp string.
///
/// Accepts `2024-03-01` as well as `2024-03-01T10:00:00+00:00`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
