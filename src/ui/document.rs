use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    button::Button,
    enums::FrameType,
    frame::Frame,
    group::{Flex, Scroll},
    image::SharedImage,
    prelude::*,
    widget::Widget,
    window::Window,
};

use super::lightbox::{LIGHTBOX_IMAGE_HEIGHT, LightboxWidgets};
use super::page::{Registry, label_text};
use super::theme::{Role, apply_theme, style_broken_image, style_widget};
use crate::app::domain::{LIGHT_THEME_CLASS, LanguageCode, LocalizedText};
use crate::app::infrastructure::document::{ContentNode, Document, HeadingNode, NodeId};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::page_content::HERO_NAME;

/// The portfolio window seen through the [`Document`] contract.
///
/// Content nodes are the registered bilingual widgets, numbered in
/// registration order; headings are numbered after them.
pub struct FltkDocument {
    pub window: Window,
    pub header: Flex,
    pub nav_list: Flex,
    pub nav_toggle: Button,
    pub lang_button: Button,
    pub scroll: Scroll,
    pub footer_year: Frame,
    pub lightbox: LightboxWidgets,
    pub scroll_locked: Rc<Cell<bool>>,
    content: Vec<(Widget, LocalizedText)>,
    headings: Vec<(Widget, &'static str)>,
    sections: Vec<(&'static str, Widget)>,
    nav_buttons: Vec<(&'static str, Widget)>,
    styled: Vec<(Widget, Role)>,
    content_height: i32,
    light: bool,
    active_nav: Option<String>,
}

impl FltkDocument {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        window: Window,
        header: Flex,
        nav_list: Flex,
        nav_toggle: Button,
        lang_button: Button,
        scroll: Scroll,
        footer_year: Frame,
        lightbox: LightboxWidgets,
        scroll_locked: Rc<Cell<bool>>,
        registry: Registry,
        content_height: i32,
    ) -> Self {
        Self {
            window,
            header,
            nav_list,
            nav_toggle,
            lang_button,
            scroll,
            footer_year,
            lightbox,
            scroll_locked,
            content: registry.content,
            headings: registry.headings,
            sections: registry.sections,
            nav_buttons: registry.nav_buttons,
            styled: registry.styled,
            content_height,
            light: false,
            active_nav: None,
        }
    }

    fn restyle_tags(&mut self) {
        for i in 0..self.lightbox.tags.children() {
            if let Some(mut tag) = self.lightbox.tags.child(i) {
                style_widget(&mut tag, Role::Tag, self.light);
            }
        }
    }

    fn widget_for(&mut self, node: NodeId) -> Option<&mut Widget> {
        let content_len = self.content.len();
        if node.0 < content_len {
            self.content.get_mut(node.0).map(|(w, _)| w)
        } else {
            self.headings.get_mut(node.0 - content_len).map(|(w, _)| w)
        }
    }

    fn max_scroll(&self) -> i32 {
        (self.content_height - self.scroll.h()).max(0)
    }
}

/// Asset paths are relative; look next to the working directory first,
/// then next to the executable.
fn resolve_asset(src: &str) -> PathBuf {
    let direct = Path::new(src);
    if direct.exists() {
        return direct.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(src)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| direct.to_path_buf())
}

impl Document for FltkDocument {
    fn content_nodes(&self) -> Vec<ContentNode> {
        self.content
            .iter()
            .enumerate()
            .map(|(i, (_, text))| ContentNode {
                id: NodeId(i),
                text: text.clone(),
            })
            .collect()
    }

    fn section_headings(&self) -> Vec<HeadingNode> {
        let offset = self.content.len();
        self.headings
            .iter()
            .enumerate()
            .map(|(i, (_, key))| HeadingNode {
                id: NodeId(offset + i),
                key: Some(key.to_string()),
            })
            .collect()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(widget) = self.widget_for(node) {
            widget.set_label(&label_text(text));
            widget.redraw();
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    // Labels already carry the language; the window has no lang attribute
    fn set_language(&mut self, _language: LanguageCode) {
        self.window.redraw();
    }

    fn set_language_toggle_label(&mut self, label: &str) {
        self.lang_button.set_label(label);
        self.lang_button.redraw();
    }

    fn set_root_class(&mut self, class: &str, present: bool) {
        if class != LIGHT_THEME_CLASS {
            return;
        }
        self.light = present;
        apply_theme(&mut self.window, &mut self.styled, present);
        self.restyle_tags();
        let active = self.active_nav.take();
        self.set_active_nav(active.as_deref());

        #[cfg(target_os = "windows")]
        super::theme::set_windows_titlebar_theme(&self.window, !present);
    }

    fn set_footer_year(&mut self, year: i32) {
        self.footer_year.set_label(&format!("© {year} {HERO_NAME}"));
        self.footer_year.redraw();
    }

    fn show_lightbox_image(&mut self, src: &str, alt: &str) -> Result<()> {
        let image = &mut self.lightbox.image;
        image.set_frame(FrameType::FlatBox);
        image.set_tooltip(alt);

        match SharedImage::load(resolve_asset(src)) {
            Ok(mut picture) => {
                let width = (image.w() - 20).max(1);
                picture.scale(width, LIGHTBOX_IMAGE_HEIGHT - 10, true, true);
                image.set_label("");
                image.set_image(Some(picture));
                image.redraw();
                Ok(())
            }
            Err(e) => {
                image.set_image(None::<SharedImage>);
                image.set_label(&label_text(alt));
                let mut base = image.as_base_widget();
                style_broken_image(&mut base, self.light);
                Err(AppError::Image(format!("{src}: {e}")))
            }
        }
    }

    fn set_lightbox_text(&mut self, title: &str, description: &str) {
        self.lightbox.title.set_label(&label_text(title));
        self.lightbox.description.set_label(&label_text(description));
        self.lightbox.title.redraw();
        self.lightbox.description.redraw();
    }

    fn clear_lightbox_tags(&mut self) {
        self.lightbox.tags.clear();
        self.lightbox.tags.redraw();
    }

    fn append_lightbox_tag(&mut self, tag: &str) {
        let width = 24 + 8 * tag.chars().count() as i32;
        self.lightbox.tags.begin();
        let mut chip = Frame::default().with_size(width, 26).with_label(&label_text(tag));
        chip.set_frame(FrameType::RFlatBox);
        chip.set_label_size(12);
        self.lightbox.tags.end();
        style_widget(&mut chip.as_base_widget(), Role::Tag, self.light);
        self.lightbox.tags.redraw();
    }

    fn set_lightbox_active(&mut self, active: bool) {
        if active {
            self.lightbox.overlay.show();
        } else {
            self.lightbox.overlay.hide();
        }
        self.window.redraw();
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked.set(locked);
    }

    fn set_nav_open(&mut self, open: bool) {
        if open {
            self.nav_list.show();
            self.nav_toggle.set_label("✕");
        } else {
            self.nav_list.hide();
            self.nav_toggle.set_label("☰");
        }
        self.header.layout();
        self.window.redraw();
    }

    fn scroll_to_section(&mut self, key: &str) -> bool {
        let Some(target) = self
            .section_offsets()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, offset)| offset)
        else {
            return false;
        };
        let y = target.clamp(0, self.max_scroll());
        self.scroll.scroll_to(0, y);
        self.scroll.redraw();
        true
    }

    fn section_offsets(&self) -> Vec<(String, i32)> {
        let origin = self.scroll.y() - self.scroll.yposition();
        self.sections
            .iter()
            .map(|(key, widget)| (key.to_string(), widget.y() - origin))
            .collect()
    }

    fn scroll_position(&self) -> i32 {
        self.scroll.yposition()
    }

    fn set_active_nav(&mut self, key: Option<&str>) {
        self.active_nav = key.map(str::to_string);
        for (nav_key, button) in self.nav_buttons.iter_mut() {
            let role = if Some(*nav_key) == key { Role::ActiveNav } else { Role::Button };
            style_widget(button, role, self.light);
        }
    }
}
