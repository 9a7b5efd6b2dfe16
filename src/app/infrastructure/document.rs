//! The document contract the view-state engine renders into.
//!
//! Controllers only talk to a [`Document`]. The desktop window implements it
//! with FLTK widgets; [`MemoryDocument`] implements it headlessly and records
//! every write so tests can inspect the rendered state.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::error::{AppError, Result};
use crate::app::domain::{LanguageCode, LocalizedText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A text-bearing element with both language variants attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    pub id: NodeId,
    pub text: LocalizedText,
}

/// A section heading, optionally tagged with a stable section key.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingNode {
    pub id: NodeId,
    pub key: Option<String>,
}

pub trait Document {
    // Discovery
    fn content_nodes(&self) -> Vec<ContentNode>;
    fn section_headings(&self) -> Vec<HeadingNode>;

    // Global attributes
    fn set_text(&mut self, node: NodeId, text: &str);
    fn set_title(&mut self, title: &str);
    fn set_language(&mut self, language: LanguageCode);
    fn set_language_toggle_label(&mut self, label: &str);
    fn set_root_class(&mut self, class: &str, present: bool);
    fn set_footer_year(&mut self, year: i32);

    // Lightbox
    /// Show `src` in the lightbox image slot. An `Err` means the image could
    /// not be loaded; the slot is left showing a placeholder.
    fn show_lightbox_image(&mut self, src: &str, alt: &str) -> Result<()>;
    fn set_lightbox_text(&mut self, title: &str, description: &str);
    fn clear_lightbox_tags(&mut self);
    fn append_lightbox_tag(&mut self, tag: &str);
    fn set_lightbox_active(&mut self, active: bool);
    fn set_scroll_locked(&mut self, locked: bool);

    // Navigation
    fn set_nav_open(&mut self, open: bool);
    /// Returns false when no section carries `key`.
    fn scroll_to_section(&mut self, key: &str) -> bool;
    fn section_offsets(&self) -> Vec<(String, i32)>;
    fn scroll_position(&self) -> i32;
    fn set_active_nav(&mut self, key: Option<&str>);
}

/// Headless document that keeps everything in plain collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<ContentNode>,
    texts: BTreeMap<NodeId, String>,
    headings: Vec<HeadingNode>,
    sections: Vec<(String, i32)>,
    attributes: BTreeMap<String, String>,
    root_classes: BTreeSet<String>,
    missing_images: HashSet<String>,
    next_id: usize,

    pub title: String,
    pub toggle_label: String,
    pub footer_year: Option<i32>,
    pub lightbox_image: Option<(String, String)>,
    pub lightbox_title: String,
    pub lightbox_description: String,
    pub lightbox_tags: Vec<String>,
    pub lightbox_active: bool,
    pub scroll_locked: bool,
    pub scroll_y: i32,
    pub nav_open: bool,
    pub active_nav: Option<String>,
    /// Number of writes into the lightbox since creation.
    pub lightbox_renders: usize,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut doc = Self::default();
        doc.attributes.insert("aria-hidden".to_string(), "true".to_string());
        doc.attributes.insert("aria-expanded".to_string(), "false".to_string());
        doc
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a bilingual element whose visible text starts as `initial`.
    pub fn add_content(&mut self, tr: &str, en: &str, initial: &str) -> NodeId {
        let id = self.alloc();
        self.nodes.push(ContentNode {
            id,
            text: LocalizedText::new(tr, en),
        });
        self.texts.insert(id, initial.to_string());
        id
    }

    /// Add a plain heading with optional section key.
    pub fn add_heading(&mut self, key: Option<&str>, initial: &str) -> NodeId {
        let id = self.alloc();
        self.headings.push(HeadingNode {
            id,
            key: key.map(str::to_string),
        });
        self.texts.insert(id, initial.to_string());
        id
    }

    pub fn add_section(&mut self, key: &str, offset: i32) {
        self.sections.push((key.to_string(), offset));
    }

    /// Make `src` fail to load.
    pub fn mark_image_missing(&mut self, src: &str) {
        self.missing_images.insert(src.to_string());
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.texts.get(&node).map(String::as_str)
    }

    /// Every node text in id order, handy for whole-page comparisons.
    pub fn snapshot(&self) -> Vec<String> {
        self.texts.values().cloned().collect()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

impl Document for MemoryDocument {
    fn content_nodes(&self) -> Vec<ContentNode> {
        self.nodes.clone()
    }

    fn section_headings(&self) -> Vec<HeadingNode> {
        self.headings.clone()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.texts.insert(node, text.to_string());
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_language(&mut self, language: LanguageCode) {
        self.attributes
            .insert("lang".to_string(), language.as_code().to_string());
    }

    fn set_language_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn set_root_class(&mut self, class: &str, present: bool) {
        if present {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }

    fn set_footer_year(&mut self, year: i32) {
        self.footer_year = Some(year);
    }

    fn show_lightbox_image(&mut self, src: &str, alt: &str) -> Result<()> {
        self.lightbox_renders += 1;
        self.lightbox_image = Some((src.to_string(), alt.to_string()));
        if self.missing_images.contains(src) {
            return Err(AppError::Image(src.to_string()));
        }
        Ok(())
    }

    fn set_lightbox_text(&mut self, title: &str, description: &str) {
        self.lightbox_renders += 1;
        self.lightbox_title = title.to_string();
        self.lightbox_description = description.to_string();
    }

    fn clear_lightbox_tags(&mut self) {
        self.lightbox_renders += 1;
        self.lightbox_tags.clear();
    }

    fn append_lightbox_tag(&mut self, tag: &str) {
        self.lightbox_renders += 1;
        self.lightbox_tags.push(tag.to_string());
    }

    fn set_lightbox_active(&mut self, active: bool) {
        self.lightbox_active = active;
        self.attributes.insert(
            "aria-hidden".to_string(),
            if active { "false" } else { "true" }.to_string(),
        );
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_nav_open(&mut self, open: bool) {
        self.nav_open = open;
        self.attributes.insert(
            "aria-expanded".to_string(),
            if open { "true" } else { "false" }.to_string(),
        );
    }

    fn scroll_to_section(&mut self, key: &str) -> bool {
        match self.sections.iter().find(|(k, _)| k == key) {
            Some((_, offset)) => {
                self.scroll_y = *offset;
                true
            }
            None => false,
        }
    }

    fn section_offsets(&self) -> Vec<(String, i32)> {
        self.sections.clone()
    }

    fn scroll_position(&self) -> i32 {
        self.scroll_y
    }

    fn set_active_nav(&mut self, key: Option<&str>) {
        self.active_nav = key.map(str::to_string);
    }
}
