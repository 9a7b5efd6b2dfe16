use crate::app::domain::{CloseReason, LightboxState, ProjectId, ViewState};
use crate::app::infrastructure::document::Document;
use crate::app::services::catalog::ContentCatalog;

/// Opens and closes the project detail overlay.
pub struct LightboxController {
    catalog: ContentCatalog,
}

impl LightboxController {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Show `project_id` in the overlay. Unknown ids are ignored and leave
    /// both the state and the document untouched; returns whether the
    /// overlay was opened. Opening over another project replaces it.
    pub fn open(&self, state: &mut ViewState, doc: &mut dyn Document, project_id: &str) -> bool {
        let Some(record) = self.catalog.lookup(project_id) else {
            tracing::debug!(project = project_id, "ignoring unknown project");
            return false;
        };

        let language = state.language;
        let title = record.title.get(language).unwrap_or_default();
        let description = record.description.get(language).unwrap_or_default();

        if let Some(image) = record.first_image() {
            if let Err(e) = doc.show_lightbox_image(image, title) {
                tracing::warn!(project = project_id, error = %e, "lightbox image failed to load");
            }
        }
        doc.set_lightbox_text(title, description);

        // Rebuilt from scratch so no tags from a previous project survive
        doc.clear_lightbox_tags();
        for tag in &record.tags {
            doc.append_lightbox_tag(tag);
        }

        doc.set_lightbox_active(true);
        doc.set_scroll_locked(true);
        state.lightbox = LightboxState::Open(ProjectId::new(project_id));
        tracing::info!(project = project_id, %language, "lightbox opened");
        true
    }

    pub fn close(&self, state: &mut ViewState, doc: &mut dyn Document, reason: CloseReason) {
        if !state.lightbox_open() {
            return;
        }
        doc.set_lightbox_active(false);
        doc.set_scroll_locked(false);
        state.lightbox = LightboxState::Closed;
        tracing::info!(?reason, "lightbox closed");
    }
}
