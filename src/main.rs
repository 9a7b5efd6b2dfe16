#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use fltk::{app, prelude::*};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use folio::app::{AppState, ContentCatalog, JsonPreferenceStore, Message};
use folio::ui::main_window::build_main_window;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let catalog = ContentCatalog::builtin();
    let document = build_main_window(&catalog, &sender);
    let store = JsonPreferenceStore::open_default();
    if let Some(path) = store.path() {
        tracing::debug!(path = %path.display(), "preferences file");
    }

    let mut state = AppState::new(document, store, catalog);
    state.doc.window.show();

    #[cfg(target_os = "windows")]
    folio::ui::theme::set_windows_titlebar_theme(&state.doc.window, state.view.theme.is_dark());

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                app.quit();
            }
        }
    }
}
