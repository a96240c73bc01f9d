//! Browser bindings: `localStorage` persistence and Leptos context.
//!
//! The shopping list and the site configuration are provided once near the
//! root of the app and read everywhere else through [`use_shopping_list`] and
//! [`use_site_config`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::ProductId;
use vitrina_data::{CatalogSource, ConfigState};
use vitrina_list::{ListError, ListItem, ListStorage, ShoppingListStore};

use crate::theme::Theme;

/// The browser's `window.localStorage`.
///
/// When storage is unavailable (private mode, disabled cookies) reads come
/// back empty and writes fail, so the list works for the session only.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> vitrina_list::Result<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| ListError::OpenError("localStorage unavailable".to_string()))
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> ListError {
    ListError::StoreError(format!("{e:?}"))
}

impl ListStorage for BrowserStorage {
    fn get(&self, key: &str) -> vitrina_list::Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> vitrina_list::Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> vitrina_list::Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// Shared handle to the shopper's list.
#[derive(Clone, Copy)]
pub struct ShoppingListContext {
    store: StoredValue<ShoppingListStore<BrowserStorage>, LocalStorage>,
    items: RwSignal<Vec<ListItem>>,
}

impl ShoppingListContext {
    /// Reactive view of the items.
    pub fn items(&self) -> Signal<Vec<ListItem>> {
        self.items.into()
    }

    pub fn add_item(&self, product: Product) -> bool {
        self.store
            .try_update_value(|store| store.add_item(product))
            .unwrap_or(false)
    }

    pub fn remove_item(&self, id: ProductId) -> bool {
        self.store
            .try_update_value(|store| store.remove_item(id))
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        self.store.update_value(|store| store.clear());
    }

    /// Reactive membership check.
    pub fn is_in_list(&self, id: ProductId) -> bool {
        self.items.with(|items| items.iter().any(|item| item.id == id))
    }
}

/// Load the list from `localStorage` and provide it to descendants.
pub fn provide_shopping_list() -> ShoppingListContext {
    let mut store = ShoppingListStore::load(BrowserStorage::open());
    let items = RwSignal::new(store.items().to_vec());
    store.subscribe(move |current| items.set(current.to_vec()));

    let ctx = ShoppingListContext {
        store: StoredValue::new_local(store),
        items,
    };
    provide_context(ctx);
    ctx
}

/// The list provided by [`provide_shopping_list`].
pub fn use_shopping_list() -> ShoppingListContext {
    use_context::<ShoppingListContext>()
        .expect("use_shopping_list must be called under provide_shopping_list")
}

/// Site configuration state, loaded once.
#[derive(Clone, Copy)]
pub struct SiteConfigContext {
    pub state: RwSignal<ConfigState>,
}

impl SiteConfigContext {
    pub fn theme(&self) -> Option<Theme> {
        self.state.with(|s| Theme::maybe_from(s.config.as_ref()))
    }
}

/// Start loading the site configuration and provide its state. The theme's
/// custom properties are applied to the document once loaded.
pub fn provide_site_config<S>(source: S) -> SiteConfigContext
where
    S: CatalogSource + 'static,
{
    let state = RwSignal::new(ConfigState::new());
    spawn_local(async move {
        let mut loaded = ConfigState::new();
        loaded.load(&source).await;
        if let Some(theme) = Theme::maybe_from(loaded.config.as_ref()) {
            apply_theme(&theme);
        }
        state.set(loaded);
    });

    let ctx = SiteConfigContext { state };
    provide_context(ctx);
    ctx
}

pub fn use_site_config() -> SiteConfigContext {
    use_context::<SiteConfigContext>()
        .expect("use_site_config must be called under provide_site_config")
}

/// Set the theme's custom properties on `<html>` and its font on `<body>`.
pub fn apply_theme(theme: &Theme) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let style = root.style();
        for (name, value) in theme.vars() {
            let _ = style.set_property(name, value);
        }
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property("font-family", theme.body_font());
    }
}
