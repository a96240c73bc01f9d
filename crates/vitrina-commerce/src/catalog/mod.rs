//! Product catalog module.
//!
//! Contains the normalized product schema, the raw boundary type it is
//! resolved from, offers/promotions and the category/brand/line taxonomy.

mod product;
mod promo;
mod taxonomy;

pub use product::{Product, RawBrandRef, RawCategoryRef, RawPromo, RawProduct, PLACEHOLDER_IMAGE};
pub use promo::{parse_date, Offer, Promo, ValidityWindow};
pub use taxonomy::{
    categories_without_line, group_lines, lines_with_products, Brand, Category,
    LineWithCategories, ProductLine,
};
