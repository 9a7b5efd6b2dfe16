use crate::app::domain::{LIGHT_THEME_CLASS, LanguageCode, ThemeMode};
use crate::app::infrastructure::document::{ContentNode, Document, HeadingNode};
use crate::app::services::page_content::{Bilingual, PAGE_TITLE, SECTION_HEADINGS, SectionHeading};

/// Pushes the active language and theme into a document.
///
/// Nodes are discovered once; the page is static, so the lists built in
/// [`RenderSynchronizer::discover`] are used for the lifetime of the window.
pub struct RenderSynchronizer {
    nodes: Vec<ContentNode>,
    headings: Vec<HeadingNode>,
    heading_table: &'static [SectionHeading],
    title: Bilingual,
}

impl RenderSynchronizer {
    pub fn discover(doc: &dyn Document) -> Self {
        Self::with_tables(doc, SECTION_HEADINGS, PAGE_TITLE)
    }

    pub fn with_tables(
        doc: &dyn Document,
        heading_table: &'static [SectionHeading],
        title: Bilingual,
    ) -> Self {
        let nodes = doc.content_nodes();
        let headings = doc.section_headings();
        tracing::debug!(nodes = nodes.len(), headings = headings.len(), "discovered document nodes");
        Self {
            nodes,
            headings,
            heading_table,
            title,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn apply(&self, doc: &mut dyn Document, language: LanguageCode) {
        for node in &self.nodes {
            // Missing translations leave the node as it was
            if let Some(text) = node.text.get(language) {
                doc.set_text(node.id, text);
            }
        }

        doc.set_title(self.title.get(language));
        self.apply_headings(doc, language);
        doc.set_language(language);
        doc.set_language_toggle_label(language.other().short_label());
    }

    /// Keyed headings take the entry with the same key. Unkeyed headings
    /// are matched by position, up to the shorter of the two lists.
    fn apply_headings(&self, doc: &mut dyn Document, language: LanguageCode) {
        for (position, heading) in self.headings.iter().enumerate() {
            let entry = match &heading.key {
                Some(key) => self.heading_table.iter().find(|e| e.key == key.as_str()),
                None => self.heading_table.get(position),
            };
            match entry {
                Some(entry) => doc.set_text(heading.id, entry.text.get(language)),
                None => tracing::debug!(position, key = ?heading.key, "no heading text"),
            }
        }
    }

    pub fn apply_theme(&self, doc: &mut dyn Document, theme: ThemeMode) {
        doc.set_root_class(LIGHT_THEME_CLASS, theme == ThemeMode::Light);
    }
}
