//! Home page banner carousel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::error;
use vitrina_data::CatalogSource;

use crate::task::{lock, ScopedTask};

/// Time between automatic slide changes.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(4);

#[derive(Debug, Default)]
struct Slides {
    banners: Vec<String>,
    index: usize,
}

impl Slides {
    fn advance(&mut self) {
        if !self.banners.is_empty() {
            self.index = (self.index + 1) % self.banners.len();
        }
    }
}

/// Rotating banner images.
///
/// With more than one banner the carousel advances on its own every
/// [`AUTO_ADVANCE_PERIOD`]. The timer lives as long as the carousel and is
/// restarted whenever the number of banners changes.
#[derive(Debug)]
pub struct BannerCarousel {
    slides: Arc<Mutex<Slides>>,
    loading: bool,
    timer: Option<ScopedTask>,
}

impl Default for BannerCarousel {
    fn default() -> Self {
        Self {
            slides: Arc::default(),
            loading: true,
            timer: None,
        }
    }
}

impl BannerCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carousel over a known set of banners.
    pub fn with_banners(banners: Vec<String>) -> Self {
        let mut carousel = Self::new();
        carousel.set_banners(banners);
        carousel
    }

    /// Fetch banners from `source`. A failed fetch leaves the carousel empty.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.loading = true;
        let banners = match source.banners().await {
            Ok(banners) => banners,
            Err(e) => {
                error!(error = %e, "failed to load banners");
                Vec::new()
            }
        };
        self.set_banners(banners);
    }

    /// Replace the banners.
    pub fn set_banners(&mut self, banners: Vec<String>) {
        self.loading = false;
        let len = banners.len();
        let len_changed = {
            let mut slides = lock(&self.slides);
            let changed = slides.banners.len() != len;
            slides.banners = banners;
            if slides.index >= len {
                slides.index = 0;
            }
            changed
        };
        if len_changed || (self.timer.is_none() && len > 1) {
            self.restart_timer(len);
        }
    }

    fn restart_timer(&mut self, len: usize) {
        self.timer = None;
        if len > 1 {
            let slides = self.slides.clone();
            self.timer = Some(ScopedTask::every(AUTO_ADVANCE_PERIOD, move || {
                lock(&slides).advance();
            }));
        }
    }

    pub fn banners(&self) -> Vec<String> {
        lock(&self.slides).banners.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.slides).banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> usize {
        lock(&self.slides).index
    }

    pub fn current_banner(&self) -> Option<String> {
        let slides = lock(&self.slides);
        slides.banners.get(slides.index).cloned()
    }

    pub fn next(&mut self) {
        lock(&self.slides).advance();
    }

    pub fn prev(&mut self) {
        let mut slides = lock(&self.slides);
        let len = slides.banners.len();
        if len > 0 {
            slides.index = (slides.index + len - 1) % len;
        }
    }

    /// Jump to a slide. Out of range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        let mut slides = lock(&self.slides);
        if index < slides.banners.len() {
            slides.index = index;
        }
    }

    /// Nothing is rendered while loading or without banners.
    pub fn is_visible(&self) -> bool {
        !self.loading && !self.is_empty()
    }

    /// Arrows and indicators only make sense with several banners.
    pub fn shows_controls(&self) -> bool {
        self.len() > 1
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;
    use vitrina_data::StaticCatalog;

    fn banners(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("https://cdn.example/b{i}.jpg")).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_wraps() {
        let mut carousel = BannerCarousel::with_banners(banners(3));
        assert_eq!(carousel.current_index(), 0);
        carousel.prev();
        assert_eq!(carousel.current_index(), 2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        carousel.go_to(1);
        assert_eq!(carousel.current_banner().as_deref(), Some("https://cdn.example/b2.jpg"));
        carousel.go_to(9);
        assert_eq!(carousel.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_every_four_seconds() {
        let carousel = BannerCarousel::with_banners(banners(3));
        assert!(carousel.is_auto_advancing());

        sleep(Duration::from_millis(3999)).await;
        assert_eq!(carousel.current_index(), 0);
        sleep(Duration::from_millis(2)).await;
        assert_eq!(carousel.current_index(), 1);
        sleep(AUTO_ADVANCE_PERIOD * 2).await;
        assert_eq!(carousel.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_banner_is_static() {
        let carousel = BannerCarousel::with_banners(banners(1));
        assert!(carousel.is_visible());
        assert!(!carousel.shows_controls());
        assert!(!carousel.is_auto_advancing());
        sleep(Duration::from_secs(10)).await;
        assert_eq!(carousel.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let carousel = BannerCarousel::with_banners(banners(2));
        let slides = carousel.slides.clone();
        drop(carousel);
        sleep(Duration::from_secs(20)).await;
        assert_eq!(lock(&slides).index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shrinking_resets_index() {
        let mut carousel = BannerCarousel::with_banners(banners(3));
        carousel.go_to(2);
        carousel.set_banners(banners(1));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_auto_advancing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_load() {
        let mut carousel = BannerCarousel::new();
        assert!(!carousel.is_visible());
        carousel.load(&StaticCatalog::new().with_banners(banners(2))).await;
        assert!(carousel.is_visible());
        assert!(carousel.shows_controls());

        let mut empty = BannerCarousel::new();
        empty.load(&StaticCatalog::new()).await;
        assert!(!empty.is_visible());
    }
}
