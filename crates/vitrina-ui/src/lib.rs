//! Presentation models for the Vitrina storefront.
//!
//! Each component here holds the state and behaviour a view binds to: what
//! to show, which controls are enabled and what a click does. Rendering is
//! left to the UI layer.
//!
//! Components with timers (the banner carousel, the categories dropdown and
//! the add-to-list button feedback) own them through [`ScopedTask`], so the
//! timers stop when the component is dropped. They must be driven from inside
//! a tokio runtime.
//!
//! With the `web` feature the crate also provides the browser `localStorage`
//! backend and the Leptos context for the shopping list and site config.

mod button;
mod card;
mod carousel;
mod dropdown;
mod gallery;
mod home;
mod lines;
mod task;
mod theme;

#[cfg(feature = "web")]
pub mod web;

pub use button::{AddToListButton, ButtonState, ButtonVariant, ClickOutcome, FEEDBACK_DURATION};
pub use card::{format_percent, CornerBadge, ProductCard, PromoInfo};
pub use carousel::{BannerCarousel, AUTO_ADVANCE_PERIOD};
pub use dropdown::{category_href, CategoriesDropdown, DropdownMode, MobileView, COLLAPSE_DELAY};
pub use gallery::{ImageGallery, Swipe, SWIPE_THRESHOLD};
pub use home::{HomePage, HomeSection};
pub use lines::{LineLink, ProductLinesStrip};
pub use task::ScopedTask;
pub use theme::{Theme, MOBILE_BREAKPOINT_PX};
