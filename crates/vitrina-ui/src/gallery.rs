//! Product page image gallery.

use vitrina_commerce::catalog::PLACEHOLDER_IMAGE;

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageGallery {
    images: Vec<String>,
    index: usize,
    zoomed: bool,
    touch_start: Option<(f64, f64)>,
}

impl ImageGallery {
    /// Blank URLs are dropped and the rest trimmed.
    pub fn new<I, T>(images: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let images = images
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            images,
            index: 0,
            zoomed: false,
            touch_start: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Current image, or the placeholder when there are none.
    pub fn current(&self) -> &str {
        self.images
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn shows_controls(&self) -> bool {
        self.images.len() > 1
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.touch_start = Some((x, y));
    }

    /// Finish a touch. Mostly-horizontal moves past the threshold navigate;
    /// vertical ones are left to page scrolling.
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<Swipe> {
        let (start_x, start_y) = self.touch_start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;

        if dx.abs() <= dy.abs() || dx.abs() <= SWIPE_THRESHOLD || !self.shows_controls() {
            return None;
        }
        if dx > 0.0 {
            self.next();
            Some(Swipe::Next)
        } else {
            self.prev();
            Some(Swipe::Prev)
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn open_zoom(&mut self) {
        if self.has_images() {
            self.zoomed = true;
        }
    }

    pub fn close_zoom(&mut self) {
        self.zoomed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> ImageGallery {
        ImageGallery::new([" a.jpg ", "", "   ", "b.jpg", "c.jpg"])
    }

    #[test]
    fn test_blank_images_dropped() {
        assert_eq!(gallery().images(), &["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_placeholder_without_images() {
        let g = ImageGallery::new(Vec::<String>::new());
        assert_eq!(g.current(), PLACEHOLDER_IMAGE);
        assert!(!g.shows_controls());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut g = gallery();
        g.prev();
        assert_eq!(g.current(), "c.jpg");
        g.next();
        assert_eq!(g.current(), "a.jpg");
        g.go_to(1);
        assert_eq!(g.current(), "b.jpg");
        g.go_to(10);
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn test_swipe() {
        let mut g = gallery();
        g.touch_start(300.0, 100.0);
        assert_eq!(g.touch_end(200.0, 110.0), Some(Swipe::Next));
        assert_eq!(g.current_index(), 1);

        g.touch_start(100.0, 100.0);
        assert_eq!(g.touch_end(200.0, 100.0), Some(Swipe::Prev));
        assert_eq!(g.current_index(), 0);

        // Too short.
        g.touch_start(100.0, 100.0);
        assert_eq!(g.touch_end(140.0, 100.0), None);

        // Mostly vertical.
        g.touch_start(100.0, 100.0);
        assert_eq!(g.touch_end(160.0, 300.0), None);

        // No start.
        assert_eq!(g.touch_end(0.0, 0.0), None);
    }

    #[test]
    fn test_zoom() {
        let mut g = gallery();
        g.open_zoom();
        assert!(g.is_zoomed());
        g.close_zoom();
        assert!(!g.is_zoomed());
    }
}
