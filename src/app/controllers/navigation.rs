use crate::app::infrastructure::document::Document;
use crate::app::services::scroll_spy::active_section;

/// Collapsible nav list and the active-section marker.
#[derive(Debug, Default)]
pub struct NavController {
    open: bool,
    active: Option<String>,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle(&mut self, doc: &mut dyn Document) {
        self.open = !self.open;
        doc.set_nav_open(self.open);
    }

    /// Jump to the section behind a nav link and fold the list away.
    pub fn link_activated(&mut self, doc: &mut dyn Document, key: &str) {
        if !doc.scroll_to_section(key) {
            tracing::debug!(section = key, "nav link points at no section");
        }
        if self.open {
            self.open = false;
            doc.set_nav_open(false);
        }
        self.update_active(doc);
    }

    pub fn update_active(&mut self, doc: &mut dyn Document) {
        let offsets = doc.section_offsets();
        let current = active_section(&offsets, doc.scroll_position()).map(str::to_string);
        if current != self.active {
            doc.set_active_nav(current.as_deref());
            self.active = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::document::MemoryDocument;

    fn page() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_section("about", 600);
        doc.add_section("projects", 1400);
        doc.add_section("contact", 3000);
        doc
    }

    #[test]
    fn test_toggle_sets_expanded() {
        let mut nav = NavController::new();
        let mut doc = page();
        nav.toggle(&mut doc);
        assert!(nav.is_open());
        assert_eq!(doc.attribute("aria-expanded"), Some("true"));
        nav.toggle(&mut doc);
        assert!(!nav.is_open());
        assert_eq!(doc.attribute("aria-expanded"), Some("false"));
    }

    #[test]
    fn test_link_scrolls_and_closes() {
        let mut nav = NavController::new();
        let mut doc = page();
        nav.toggle(&mut doc);

        nav.link_activated(&mut doc, "projects");
        assert_eq!(doc.scroll_position(), 1400);
        assert!(!nav.is_open());
        assert!(!doc.nav_open);
        assert_eq!(doc.active_nav.as_deref(), Some("projects"));
        assert_eq!(nav.active(), Some("projects"));
    }

    #[test]
    fn test_unknown_link_still_closes() {
        let mut nav = NavController::new();
        let mut doc = page();
        nav.toggle(&mut doc);
        nav.link_activated(&mut doc, "blog");
        assert_eq!(doc.scroll_position(), 0);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_active_follows_scroll() {
        let mut nav = NavController::new();
        let mut doc = page();

        nav.update_active(&mut doc);
        assert_eq!(doc.active_nav, None);

        doc.scroll_y = 2950;
        nav.update_active(&mut doc);
        assert_eq!(doc.active_nav.as_deref(), Some("contact"));

        doc.scroll_y = 700;
        nav.update_active(&mut doc);
        assert_eq!(doc.active_nav.as_deref(), Some("about"));
    }
}
