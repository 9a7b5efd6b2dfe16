use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::language::LanguageCode;
use super::project::ProjectId;
use super::theme::ThemeMode;
use crate::app::infrastructure::preferences::PreferenceStore;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Stored preference values are the serde string form of the domain value
/// (`"tr"`, `"light"`, ...). Anything that does not serialize to a plain
/// string has no stored form.
pub fn encode_preference<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value) {
        Ok(Value::String(code)) => Some(code),
        _ => None,
    }
}

pub fn decode_preference<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(Value::String(raw.to_string())).ok()
}

/// Write `value` under `key`, in the form [`ViewState::load`] reads back.
pub fn store_preference<T: Serialize>(store: &mut dyn PreferenceStore, key: &str, value: &T) {
    match encode_preference(value) {
        Some(code) => store.set(key, &code),
        None => tracing::warn!(key, "preference has no stored form"),
    }
}

fn load_preference<T: DeserializeOwned + Default>(store: &dyn PreferenceStore, key: &str) -> T {
    store
        .get(key)
        .and_then(|raw| {
            let parsed = decode_preference(&raw);
            if parsed.is_none() {
                tracing::debug!(key, value = %raw, "ignoring unknown stored preference");
            }
            parsed
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(ProjectId),
}

/// The single record of what the page currently shows.
///
/// Owned by the coordinator and handed to controllers explicitly. Only
/// `language` and `theme` are ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub language: LanguageCode,
    pub theme: ThemeMode,
    pub lightbox: LightboxState,
}

impl ViewState {
    /// Build the initial state from stored preferences.
    ///
    /// Missing keys and values outside the known set both fall back to the
    /// defaults (`tr`, `dark`).
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let language = load_preference(store, LANGUAGE_KEY);
        let theme = load_preference(store, THEME_KEY);

        Self {
            language,
            theme,
            lightbox: LightboxState::Closed,
        }
    }

    pub fn lightbox_open(&self) -> bool {
        matches!(self.lightbox, LightboxState::Open(_))
    }

    pub fn active_project(&self) -> Option<&ProjectId> {
        match &self.lightbox {
            LightboxState::Open(id) => Some(id),
            LightboxState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::preferences::MemoryPreferenceStore;

    #[test]
    fn test_empty_store_gives_defaults() {
        let store = MemoryPreferenceStore::new();
        let state = ViewState::load(&store);
        assert_eq!(state.language, LanguageCode::Tr);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert!(!state.lightbox_open());
        assert_eq!(state.active_project(), None);
    }

    #[test]
    fn test_stored_values_are_used() {
        let mut store = MemoryPreferenceStore::new();
        store.set(LANGUAGE_KEY, "en");
        store.set(THEME_KEY, "light");
        let state = ViewState::load(&store);
        assert_eq!(state.language, LanguageCode::En);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_values_fall_back_to_defaults() {
        let mut store = MemoryPreferenceStore::new();
        store.set(LANGUAGE_KEY, "klingon");
        store.set(THEME_KEY, "sepia");
        let state = ViewState::load(&store);
        assert_eq!(state.language, LanguageCode::Tr);
        assert_eq!(state.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_stored_form_round_trips_through_store() {
        let mut store = MemoryPreferenceStore::new();
        store_preference(&mut store, LANGUAGE_KEY, &LanguageCode::En);
        store_preference(&mut store, THEME_KEY, &ThemeMode::Light);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        let state = ViewState::load(&store);
        assert_eq!(state.language, LanguageCode::En);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_decode_rejects_other_spellings() {
        assert_eq!(decode_preference::<LanguageCode>("tr"), Some(LanguageCode::Tr));
        assert_eq!(decode_preference::<LanguageCode>("EN"), None);
        assert_eq!(decode_preference::<LanguageCode>(""), None);
        assert_eq!(decode_preference::<ThemeMode>("Dark"), None);
        assert_eq!(encode_preference(&ThemeMode::Dark).as_deref(), Some("dark"));
        assert_eq!(encode_preference(&vec![1, 2]), None);
    }

    #[test]
    fn test_unavailable_store_gives_defaults() {
        let store = MemoryPreferenceStore::unavailable();
        assert_eq!(ViewState::load(&store), ViewState::default());
    }

    #[test]
    fn test_open_lightbox_reports_project() {
        let state = ViewState {
            lightbox: LightboxState::Open(ProjectId::new("shell-eco")),
            ..Default::default()
        };
        assert!(state.lightbox_open());
        assert_eq!(state.active_project().map(ProjectId::as_str), Some("shell-eco"));
    }
}
