//! Categories navigation dropdown.
//!
//! On desktop, hovering a line opens its submenu. Leaving the line schedules
//! a collapse after [`COLLAPSE_DELAY`] so the pointer can travel to the
//! submenu; entering the submenu or another line cancels it. On mobile the
//! dropdown is a two-level drill-down instead.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::error;
use vitrina_commerce::catalog::{Category, LineWithCategories};
use vitrina_commerce::slug::slugify;
use vitrina_commerce::LineId;
use vitrina_data::{CatalogSource, FetchError};

use crate::task::{lock, ScopedTask};

/// Delay before a hovered line's submenu closes.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownMode {
    #[default]
    Desktop,
    Mobile,
}

/// What the mobile drill-down shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileView {
    Lines,
    Categories(LineId),
}

#[derive(Debug)]
pub struct CategoriesDropdown {
    lines: Vec<LineWithCategories>,
    loose_categories: Vec<Category>,
    loading: bool,
    open: bool,
    mode: DropdownMode,
    hovered: Arc<Mutex<Option<LineId>>>,
    pending_collapse: Option<ScopedTask>,
    selected: Option<LineId>,
}

impl CategoriesDropdown {
    pub fn new(mode: DropdownMode) -> Self {
        Self {
            lines: Vec::new(),
            loose_categories: Vec::new(),
            loading: true,
            open: false,
            mode,
            hovered: Arc::default(),
            pending_collapse: None,
            selected: None,
        }
    }

    /// Dropdown over already fetched data.
    pub fn with_data(
        mode: DropdownMode,
        lines: Vec<LineWithCategories>,
        loose_categories: Vec<Category>,
    ) -> Self {
        let mut dropdown = Self::new(mode);
        dropdown.lines = lines;
        dropdown.loose_categories = loose_categories;
        dropdown.loading = false;
        dropdown
    }

    /// Fetch lines and line-less categories. Failures leave both empty.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.loading = true;
        match fetch(source).await {
            Ok((lines, loose)) => {
                self.lines = lines;
                self.loose_categories = loose;
            }
            Err(e) => error!(error = %e, "failed to load navigation categories"),
        }
        self.loading = false;
    }

    pub fn lines(&self) -> &[LineWithCategories] {
        &self.lines
    }

    pub fn loose_categories(&self) -> &[Category] {
        &self.loose_categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> DropdownMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DropdownMode) {
        if self.mode != mode {
            self.mode = mode;
            self.reset();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.pending_collapse = None;
        *lock(&self.hovered) = None;
        self.selected = None;
    }

    /// Divider between lines and loose categories, only when both exist.
    pub fn shows_separator(&self) -> bool {
        !self.lines.is_empty() && !self.loose_categories.is_empty()
    }

    // Desktop hover handling

    pub fn enter_line(&mut self, id: LineId) {
        if self.mode != DropdownMode::Desktop {
            return;
        }
        self.pending_collapse = None;
        *lock(&self.hovered) = Some(id);
    }

    /// Schedule the submenu to close. Requires a tokio runtime.
    pub fn leave_line(&mut self) {
        if self.mode != DropdownMode::Desktop {
            return;
        }
        let hovered = self.hovered.clone();
        self.pending_collapse = Some(ScopedTask::after(COLLAPSE_DELAY, move || {
            *lock(&hovered) = None;
        }));
    }

    pub fn enter_submenu(&mut self) {
        if self.mode != DropdownMode::Desktop {
            return;
        }
        self.pending_collapse = None;
    }

    pub fn leave_submenu(&mut self) {
        if self.mode != DropdownMode::Desktop {
            return;
        }
        self.pending_collapse = None;
        *lock(&self.hovered) = None;
    }

    pub fn hovered_line_id(&self) -> Option<LineId> {
        *lock(&self.hovered)
    }

    /// Line whose submenu is showing.
    pub fn hovered_line(&self) -> Option<&LineWithCategories> {
        let id = self.hovered_line_id()?;
        self.lines.iter().find(|l| l.line.id == id)
    }

    // Mobile drill-down

    pub fn mobile_view(&self) -> MobileView {
        match self.selected {
            Some(id) => MobileView::Categories(id),
            None => MobileView::Lines,
        }
    }

    /// Tap on a line. A line with categories opens them; a line without
    /// categories is a plain link, so its path is returned and the dropdown
    /// closes.
    pub fn select_line(&mut self, id: LineId) -> Option<String> {
        if self.mode != DropdownMode::Mobile {
            return None;
        }
        let line = self.lines.iter().find(|l| l.line.id == id)?;
        if line.categories.is_empty() {
            let href = format!("/{}", slugify(&line.line.description));
            self.close();
            Some(href)
        } else {
            self.selected = Some(id);
            None
        }
    }

    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Line opened in the mobile drill-down.
    pub fn selected_line(&self) -> Option<&LineWithCategories> {
        let id = self.selected?;
        self.lines.iter().find(|l| l.line.id == id)
    }
}

/// Link target of a category.
pub fn category_href(category: &Category) -> String {
    format!("/{}", slugify(&category.description))
}

async fn fetch<S: CatalogSource + ?Sized>(
    source: &S,
) -> Result<(Vec<LineWithCategories>, Vec<Category>), FetchError> {
    let lines = source.lines_with_categories().await?;
    let loose = source.categories_without_line().await?;
    Ok((lines, loose))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;
    use vitrina_commerce::catalog::ProductLine;

    fn data() -> (Vec<LineWithCategories>, Vec<Category>) {
        let lines = vec![
            LineWithCategories {
                line: ProductLine::new(1, "Línea Blanca"),
                categories: vec![Category::new(10, "Heladeras").in_line(LineId::new(1))],
            },
            LineWithCategories {
                line: ProductLine::new(2, "Pequeños Electro"),
                categories: vec![],
            },
        ];
        (lines, vec![Category::new(30, "Colchones y Sommiers")])
    }

    fn desktop() -> CategoriesDropdown {
        let (lines, loose) = data();
        CategoriesDropdown::with_data(DropdownMode::Desktop, lines, loose)
    }

    fn mobile() -> CategoriesDropdown {
        let (lines, loose) = data();
        CategoriesDropdown::with_data(DropdownMode::Mobile, lines, loose)
    }

    #[tokio::test(start_paused = true)]
    async fn test_leave_line_collapses_after_delay() {
        let mut dropdown = desktop();
        dropdown.enter_line(LineId::new(1));
        dropdown.leave_line();

        sleep(Duration::from_millis(150)).await;
        assert_eq!(dropdown.hovered_line_id(), Some(LineId::new(1)));
        sleep(Duration::from_millis(60)).await;
        assert_eq!(dropdown.hovered_line_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entering_submenu_cancels_collapse() {
        let mut dropdown = desktop();
        dropdown.enter_line(LineId::new(1));
        dropdown.leave_line();
        sleep(Duration::from_millis(100)).await;
        dropdown.enter_submenu();
        sleep(Duration::from_secs(1)).await;
        assert_eq!(dropdown.hovered_line().unwrap().line.description, "Línea Blanca");

        dropdown.leave_submenu();
        assert_eq!(dropdown.hovered_line_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entering_another_line_cancels_collapse() {
        let mut dropdown = desktop();
        dropdown.enter_line(LineId::new(1));
        dropdown.leave_line();
        dropdown.enter_line(LineId::new(2));
        sleep(Duration::from_secs(1)).await;
        assert_eq!(dropdown.hovered_line_id(), Some(LineId::new(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_collapse() {
        let mut dropdown = desktop();
        dropdown.open();
        dropdown.enter_line(LineId::new(1));
        dropdown.leave_line();
        dropdown.close();
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.hovered_line_id(), None);
        dropdown.enter_line(LineId::new(2));
        sleep(Duration::from_secs(1)).await;
        assert_eq!(dropdown.hovered_line_id(), Some(LineId::new(2)));
    }

    #[test]
    fn test_mobile_drill_down() {
        let mut dropdown = mobile();
        dropdown.open();
        // Hover is ignored on mobile.
        dropdown.enter_line(LineId::new(1));
        assert_eq!(dropdown.hovered_line_id(), None);

        assert_eq!(dropdown.select_line(LineId::new(1)), None);
        assert_eq!(dropdown.mobile_view(), MobileView::Categories(LineId::new(1)));
        assert_eq!(dropdown.selected_line().unwrap().categories.len(), 1);

        dropdown.back();
        assert_eq!(dropdown.mobile_view(), MobileView::Lines);

        let href = dropdown.select_line(LineId::new(2));
        assert_eq!(href.as_deref(), Some("/peque-os-electro"));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_links_and_separator() {
        let dropdown = desktop();
        assert!(dropdown.shows_separator());
        assert_eq!(category_href(&dropdown.loose_categories()[0]), "/colchones-y-sommiers");

        let empty = CategoriesDropdown::with_data(DropdownMode::Desktop, data().0, vec![]);
        assert!(!empty.shows_separator());
    }
}
