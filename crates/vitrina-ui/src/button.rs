//! Add-to-list button with stock gating.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use vitrina_commerce::catalog::Product;
use vitrina_list::{ListStorage, ShoppingListStore};

use crate::task::ScopedTask;

/// How long the "Agregando..." feedback stays after a click.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(1);

/// Where the button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Compact button on a product card.
    #[default]
    Card,
    /// Full-width button on the product page.
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Disabled; the product can't be added.
    OutOfStock,
    /// Click feedback after a toggle.
    Adding,
    InList,
    NotInList,
}

impl ButtonState {
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::OutOfStock | Self::Adding)
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Button disabled (out of stock or showing feedback); the store was
    /// not touched.
    Rejected,
    Added,
    Removed,
}

/// Toggles a product in the shopping list.
///
/// Only products whose stock flag is explicitly `true` can be added; unknown
/// stock counts as none.
#[derive(Debug)]
pub struct AddToListButton {
    product: Product,
    variant: ButtonVariant,
    adding: Arc<AtomicBool>,
    feedback: Option<ScopedTask>,
}

impl AddToListButton {
    pub fn new(product: Product, variant: ButtonVariant) -> Self {
        Self {
            product,
            variant,
            adding: Arc::new(AtomicBool::new(false)),
            feedback: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn has_stock(&self) -> bool {
        self.product.is_addable()
    }

    pub fn state<S: ListStorage>(&self, store: &ShoppingListStore<S>) -> ButtonState {
        if !self.has_stock() {
            ButtonState::OutOfStock
        } else if self.adding.load(Ordering::SeqCst) {
            ButtonState::Adding
        } else if store.is_in_list(self.product.id) {
            ButtonState::InList
        } else {
            ButtonState::NotInList
        }
    }

    /// Button text.
    pub fn label<S: ListStorage>(&self, store: &ShoppingListStore<S>) -> &'static str {
        match (self.state(store), self.variant) {
            (ButtonState::OutOfStock, _) => "Sin Stock",
            (ButtonState::Adding, _) => "Agregando...",
            (ButtonState::InList, ButtonVariant::Card) => "Quitar de lista",
            (ButtonState::InList, ButtonVariant::Page) => "Quitar de la lista",
            (ButtonState::NotInList, ButtonVariant::Card) => "Agregar a lista",
            (ButtonState::NotInList, ButtonVariant::Page) => "Agregar a lista de compra",
        }
    }

    /// Tooltip text.
    pub fn title<S: ListStorage>(&self, store: &ShoppingListStore<S>) -> &'static str {
        if !self.has_stock() {
            "Sin stock"
        } else if store.is_in_list(self.product.id) {
            "Quitar de la lista"
        } else {
            "Agregar a lista de compra"
        }
    }

    /// Toggle the product in `store`.
    ///
    /// Must be called inside a tokio runtime; the click feedback is cleared by
    /// a timer.
    pub fn click<S: ListStorage>(&mut self, store: &mut ShoppingListStore<S>) -> ClickOutcome {
        if !self.has_stock() {
            debug!(product_id = %self.product.id, "out of stock, click ignored");
            return ClickOutcome::Rejected;
        }
        if self.adding.load(Ordering::SeqCst) {
            debug!(product_id = %self.product.id, "feedback pending, click ignored");
            return ClickOutcome::Rejected;
        }

        let outcome = if store.is_in_list(self.product.id) {
            store.remove_item(self.product.id);
            ClickOutcome::Removed
        } else {
            store.add_item(self.product.clone());
            ClickOutcome::Added
        };

        self.adding.store(true, Ordering::SeqCst);
        let adding = self.adding.clone();
        self.feedback = Some(ScopedTask::after(FEEDBACK_DURATION, move || {
            adding.store(false, Ordering::SeqCst);
        }));

        outcome
    }
}
