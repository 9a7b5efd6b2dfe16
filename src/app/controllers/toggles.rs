use super::render::RenderSynchronizer;
use crate::app::domain::view_state::store_preference;
use crate::app::domain::{LANGUAGE_KEY, LanguageCode, THEME_KEY, ThemeMode, ViewState};
use crate::app::infrastructure::document::Document;
use crate::app::infrastructure::preferences::PreferenceStore;

/// Switch to the other language, re-render and remember the choice.
pub fn toggle_language(
    state: &mut ViewState,
    store: &mut dyn PreferenceStore,
    sync: &RenderSynchronizer,
    doc: &mut dyn Document,
) -> LanguageCode {
    let next = state.language.other();
    sync.apply(doc, next);
    store_preference(store, LANGUAGE_KEY, &next);
    state.language = next;
    tracing::info!(language = %next, "language changed");
    next
}

/// Flip between dark and light, re-render and remember the choice.
pub fn toggle_theme(
    state: &mut ViewState,
    store: &mut dyn PreferenceStore,
    sync: &RenderSynchronizer,
    doc: &mut dyn Document,
) -> ThemeMode {
    let next = state.theme.toggled();
    store_preference(store, THEME_KEY, &next);
    sync.apply_theme(doc, next);
    state.theme = next;
    tracing::info!(theme = %next, "theme changed");
    next
}
