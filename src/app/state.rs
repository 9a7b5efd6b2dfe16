use chrono::Datelike;

use super::controllers::lightbox::LightboxController;
use super::controllers::navigation::NavController;
use super::controllers::render::RenderSynchronizer;
use super::controllers::toggles::{toggle_language, toggle_theme};
use super::domain::{CloseReason, Message, ViewState};
use super::infrastructure::document::Document;
use super::infrastructure::preferences::PreferenceStore;
use super::services::catalog::ContentCatalog;

/// Main application coordinator. Owns the view state, the document it is
/// rendered into and the preference store, and routes every [`Message`] to
/// the controller that handles it.
pub struct AppState<D: Document, S: PreferenceStore> {
    pub doc: D,
    pub store: S,
    pub view: ViewState,
    sync: RenderSynchronizer,
    lightbox: LightboxController,
    nav: NavController,
}

impl<D: Document, S: PreferenceStore> AppState<D, S> {
    /// Load preferences, discover the document and render it once.
    pub fn new(mut doc: D, store: S, catalog: ContentCatalog) -> Self {
        let view = ViewState::load(&store);
        let sync = RenderSynchronizer::discover(&doc);

        sync.apply_theme(&mut doc, view.theme);
        sync.apply(&mut doc, view.language);
        doc.set_footer_year(chrono::Local::now().year());

        let mut nav = NavController::new();
        nav.update_active(&mut doc);

        tracing::info!(
            language = %view.language,
            theme = %view.theme,
            nodes = sync.node_count(),
            projects = catalog.len(),
            "portfolio ready"
        );

        Self {
            doc,
            store,
            view,
            sync,
            lightbox: LightboxController::new(catalog),
            nav,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        self.lightbox.catalog()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active()
    }

    pub fn toggle_language(&mut self) {
        toggle_language(&mut self.view, &mut self.store, &self.sync, &mut self.doc);
    }

    pub fn toggle_theme(&mut self) {
        toggle_theme(&mut self.view, &mut self.store, &self.sync, &mut self.doc);
    }

    pub fn open_project(&mut self, project_id: &str) -> bool {
        self.lightbox.open(&mut self.view, &mut self.doc, project_id)
    }

    pub fn close_lightbox(&mut self, reason: CloseReason) {
        self.lightbox.close(&mut self.view, &mut self.doc, reason);
    }

    pub fn open_link(&self, url: &str) {
        tracing::info!(url, "contact link opened");
        if let Err(e) = open::that(url) {
            tracing::warn!(url, error = %e, "failed to open link");
        }
    }

    /// Handle one message from the UI. Returns true when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::ToggleLanguage => self.toggle_language(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::ToggleNav => self.nav.toggle(&mut self.doc),
            Message::NavLinkActivated(key) => self.nav.link_activated(&mut self.doc, key),
            Message::Scrolled => self.nav.update_active(&mut self.doc),
            Message::OpenProject(id) => {
                self.open_project(&id);
            }
            Message::OpenLink(url) => self.open_link(url),
            Message::CloseLightbox(reason) => self.close_lightbox(reason),
            Message::WindowClose => return true,
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{LanguageCode, ThemeMode};
    use crate::app::infrastructure::document::MemoryDocument;
    use crate::app::infrastructure::preferences::MemoryPreferenceStore;

    fn doc() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_content("Merhaba", "Hello", "");
        doc.add_heading(Some("about"), "");
        doc.add_section("about", 500);
        doc
    }

    #[test]
    fn test_new_renders_initial_state() {
        let state = AppState::new(doc(), MemoryPreferenceStore::new(), ContentCatalog::builtin());
        assert_eq!(state.view.language, LanguageCode::Tr);
        assert_eq!(state.view.theme, ThemeMode::Dark);
        assert_eq!(state.doc.snapshot(), vec!["Merhaba", "Hakkımda"]);
        assert_eq!(state.doc.toggle_label, "EN");
        assert!(state.doc.footer_year.is_some_and(|y| y >= 2025));
        assert_eq!(state.catalog().len(), 6);
    }

    #[test]
    fn test_new_honours_stored_preferences() {
        let mut store = MemoryPreferenceStore::new();
        store.set("language", "en");
        store.set("theme", "light");
        let state = AppState::new(doc(), store, ContentCatalog::builtin());
        assert_eq!(state.doc.snapshot(), vec!["Hello", "About Me"]);
        assert!(state.doc.has_root_class("light"));
    }

    #[test]
    fn test_handle_routes_messages() {
        let mut state = AppState::new(doc(), MemoryPreferenceStore::new(), ContentCatalog::builtin());

        assert!(!state.handle(Message::ToggleLanguage));
        assert_eq!(state.view.language, LanguageCode::En);

        assert!(!state.handle(Message::OpenProject("shell-eco".to_string())));
        assert!(state.view.lightbox_open());
        assert!(!state.handle(Message::CloseLightbox(CloseReason::Escape)));
        assert!(!state.view.lightbox_open());

        assert!(!state.handle(Message::ToggleNav));
        assert!(state.nav_open());
        assert!(!state.handle(Message::NavLinkActivated("about")));
        assert!(!state.nav_open());
        assert_eq!(state.active_section(), Some("about"));

        assert!(state.handle(Message::WindowClose));
    }
}
