//! End-to-end behaviour of the view-state engine against the in-memory
//! document and preference stores.

use folio::app::{
    AppState, CloseReason, ContentCatalog, JsonPreferenceStore, LanguageCode, MemoryDocument,
    MemoryPreferenceStore, Message, PreferenceStore, ThemeMode,
};
use tempfile::TempDir;

fn page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.add_content("Merhaba", "Hello", "");
    doc.add_content("Projeler", "Projects", "");
    doc.add_heading(Some("about"), "");
    doc.add_heading(Some("contact"), "");
    doc.add_section("about", 400);
    doc.add_section("projects", 900);
    doc.add_section("contact", 2000);
    doc
}

fn session<S: PreferenceStore>(store: S) -> AppState<MemoryDocument, S> {
    AppState::new(page(), store, ContentCatalog::builtin())
}

#[test]
fn test_empty_store_starts_turkish_and_dark() {
    let state = session(MemoryPreferenceStore::new());
    assert_eq!(state.view.language, LanguageCode::Tr);
    assert_eq!(state.view.theme, ThemeMode::Dark);
    assert!(!state.view.lightbox_open());
    assert!(!state.doc.has_root_class("light"));
    assert_eq!(state.doc.attribute("lang"), Some("tr"));
}

#[test]
fn test_toggle_label_names_the_other_language() {
    let mut state = session(MemoryPreferenceStore::new());
    assert_eq!(state.doc.toggle_label, "EN");
    state.handle(Message::ToggleLanguage);
    assert_eq!(state.doc.toggle_label, "TR");
}

#[test]
fn test_double_language_toggle_restores_page() {
    let mut state = session(MemoryPreferenceStore::new());
    let before = state.doc.snapshot();

    state.handle(Message::ToggleLanguage);
    assert_eq!(state.doc.snapshot(), vec!["Hello", "Projects", "About Me", "Get In Touch"]);
    assert_eq!(state.store.get("language").as_deref(), Some("en"));

    state.handle(Message::ToggleLanguage);
    assert_eq!(state.doc.snapshot(), before);
    assert_eq!(state.store.get("language").as_deref(), Some("tr"));
}

#[test]
fn test_unknown_project_is_ignored() {
    let mut state = session(MemoryPreferenceStore::new());
    state.handle(Message::OpenProject("nonexistent-id".to_string()));

    assert!(!state.view.lightbox_open());
    assert!(!state.doc.lightbox_active);
    assert_eq!(state.doc.lightbox_renders, 0);
    assert_eq!(state.doc.attribute("aria-hidden"), Some("true"));
}

#[test]
fn test_second_open_replaces_first_project() {
    let mut state = session(MemoryPreferenceStore::new());
    state.handle(Message::OpenProject("frc-robots".to_string()));
    state.handle(Message::OpenProject("aim-assist".to_string()));

    assert_eq!(state.view.active_project().map(|id| id.as_str()), Some("aim-assist"));
    assert_eq!(state.doc.lightbox_tags, vec!["Python", "CV", "ML"]);
    assert_eq!(state.doc.lightbox_title, "Nişan Yardım Sistemi (Görüntü İşleme)");
    assert!(state.doc.scroll_locked);
}

#[test]
fn test_lightbox_follows_language_at_open_time() {
    let mut state = session(MemoryPreferenceStore::new());
    state.handle(Message::ToggleLanguage);
    state.handle(Message::OpenProject("shell-eco".to_string()));
    assert_eq!(state.doc.lightbox_title, "Shell Eco Marathon Vehicle");
    assert_eq!(
        state.doc.lightbox_image,
        Some((
            "assets/img/shell-eco-vehicle.jpg".to_string(),
            "Shell Eco Marathon Vehicle".to_string()
        ))
    );
}

#[test]
fn test_every_close_path_restores_page() {
    for reason in [CloseReason::CloseButton, CloseReason::Backdrop, CloseReason::Escape] {
        let mut state = session(MemoryPreferenceStore::new());
        state.handle(Message::OpenProject("pcb-agc".to_string()));
        state.handle(Message::CloseLightbox(reason));

        assert!(!state.view.lightbox_open(), "{reason:?}");
        assert!(!state.doc.lightbox_active);
        assert!(!state.doc.scroll_locked);
        assert_eq!(state.doc.attribute("aria-hidden"), Some("true"));
    }
}

#[test]
fn test_missing_image_still_opens_lightbox() {
    let mut doc = page();
    doc.mark_image_missing("assets/img/ftc-robot.jpg");
    let mut state = AppState::new(doc, MemoryPreferenceStore::new(), ContentCatalog::builtin());

    assert!(state.open_project("ftc-mentor"));
    assert!(state.doc.lightbox_active);
    assert_eq!(state.doc.lightbox_tags.len(), 3);
}

#[test]
fn test_unavailable_store_uses_defaults_and_keeps_working() {
    let mut state = session(MemoryPreferenceStore::unavailable());
    state.handle(Message::ToggleTheme);
    state.handle(Message::ToggleLanguage);

    assert_eq!(state.view.theme, ThemeMode::Light);
    assert_eq!(state.view.language, LanguageCode::En);
    assert!(state.doc.has_root_class("light"));
    assert_eq!(state.store.get("theme"), None);
}

#[test]
fn test_corrupt_preferences_fall_back_to_defaults() {
    let mut store = MemoryPreferenceStore::new();
    store.set("language", "de");
    store.set("theme", "sepia");
    let state = session(store);
    assert_eq!(state.view.language, LanguageCode::Tr);
    assert_eq!(state.view.theme, ThemeMode::Dark);
}

#[test]
fn test_light_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio").join("preferences.json");

    let mut first = session(JsonPreferenceStore::at(&path));
    first.handle(Message::ToggleTheme);
    first.handle(Message::ToggleLanguage);
    assert!(first.doc.has_root_class("light"));
    drop(first);

    let second = session(JsonPreferenceStore::at(&path));
    assert_eq!(second.view.theme, ThemeMode::Light);
    assert_eq!(second.view.language, LanguageCode::En);
    assert!(second.doc.has_root_class("light"));
    assert_eq!(second.doc.snapshot()[0], "Hello");
}

#[test]
fn test_navigation_scrolls_and_closes_menu() {
    let mut state = session(MemoryPreferenceStore::new());
    assert_eq!(state.active_section(), None);

    state.handle(Message::ToggleNav);
    assert!(state.doc.nav_open);
    assert_eq!(state.doc.attribute("aria-expanded"), Some("true"));

    state.handle(Message::NavLinkActivated("projects"));
    assert!(!state.doc.nav_open);
    assert_eq!(state.doc.scroll_y, 900);
    assert_eq!(state.doc.active_nav.as_deref(), Some("projects"));
}

#[test]
fn test_scroll_spy_tracks_position() {
    let mut state = session(MemoryPreferenceStore::new());
    state.doc.scroll_y = 1950;
    state.handle(Message::Scrolled);
    assert_eq!(state.active_section(), Some("contact"));

    state.doc.scroll_y = 0;
    state.handle(Message::Scrolled);
    assert_eq!(state.active_section(), None);
    assert_eq!(state.doc.active_nav, None);
}
