//! Builds the scrolled portfolio page and records every widget the
//! document later needs to re-label or re-color.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, Scroll, ScrollType},
    prelude::*,
    widget::Widget,
};

use super::theme::Role;
use crate::app::domain::{LanguageCode, LocalizedText, Message};
use crate::app::services::catalog::ContentCatalog;
use crate::app::services::page_content::{
    ABOUT_PARAGRAPHS, AWARDS, Bilingual, CONTACT_LINKS, FOOTER_NOTE, HERO_INTRO, HERO_NAME,
    HERO_TAGLINE, PROJECT_VIEW_LABEL, SECTION_HEADINGS, SKILL_GROUPS,
};

pub const PAGE_MARGIN: i32 = 32;
pub const SECTION_SPACING: i32 = 28;
const SCROLLBAR_WIDTH: i32 = 16;
const HEADING_HEIGHT: i32 = 44;
const CARDS_PER_ROW: usize = 3;

/// Widgets collected while the page is built.
#[derive(Default)]
pub struct Registry {
    pub content: Vec<(Widget, LocalizedText)>,
    pub headings: Vec<(Widget, &'static str)>,
    pub sections: Vec<(&'static str, Widget)>,
    pub styled: Vec<(Widget, Role)>,
    pub nav_buttons: Vec<(&'static str, Widget)>,
}

impl Registry {
    pub fn style<W: WidgetExt>(&mut self, widget: &W, role: Role) {
        self.styled.push((widget.as_base_widget(), role));
    }

    /// Register a widget whose label follows the active language.
    pub fn bilingual<W: WidgetExt>(&mut self, widget: &mut W, text: LocalizedText, role: Role) {
        if let Some(initial) = text.get(LanguageCode::default()) {
            widget.set_label(&label_text(initial));
        }
        self.content.push((widget.as_base_widget(), text));
        self.style(widget, role);
    }
}

pub struct PageWidgets {
    pub scroll: Scroll,
    pub footer_year: Frame,
    pub content_height: i32,
}

/// FLTK treats `&` and `@` in labels as markup; double them to show them
/// literally.
pub fn label_text(text: &str) -> String {
    text.replace('&', "&&").replace('@', "@@")
}

fn text_frame(reg: &mut Registry, text: Bilingual, size: i32, role: Role) -> Frame {
    let mut frame = Frame::default();
    frame.set_frame(FrameType::FlatBox);
    frame.set_label_size(size);
    frame.set_align(Align::Left | Align::Inside | Align::Wrap);
    reg.bilingual(&mut frame, text.localized(), role);
    frame
}

fn plain_frame(reg: &mut Registry, text: &str, size: i32, role: Role) -> Frame {
    let mut frame = Frame::default().with_label(&label_text(text));
    frame.set_frame(FrameType::FlatBox);
    frame.set_label_size(size);
    frame.set_align(Align::Left | Align::Inside | Align::Wrap);
    reg.style(&frame, role);
    frame
}

fn begin_section(reg: &mut Registry, x: i32, y: i32, w: i32, h: i32, key: &'static str) -> Flex {
    let mut section = Flex::new(x, y, w, h, None).column();
    section.set_spacing(10);
    section.set_frame(FrameType::FlatBox);
    reg.style(&section, Role::Surface);
    reg.sections.push((key, section.as_base_widget()));

    if let Some(heading) = SECTION_HEADINGS.iter().find(|h| h.key == key) {
        let mut frame = Frame::default().with_label(&label_text(heading.text.tr));
        frame.set_frame(FrameType::FlatBox);
        frame.set_label_size(24);
        frame.set_label_font(Font::HelveticaBold);
        frame.set_align(Align::Left | Align::Inside);
        section.fixed(&frame, HEADING_HEIGHT);
        reg.headings.push((frame.as_base_widget(), key));
        reg.style(&frame, Role::Heading);
    }
    section
}

fn build_hero(reg: &mut Registry, x: i32, y: i32, w: i32) -> i32 {
    let h = 220;
    let mut hero = Flex::new(x, y, w, h, None).column();
    hero.set_frame(FrameType::FlatBox);
    hero.set_margins(24, 24, 24, 24);
    reg.style(&hero, Role::Card);

    let mut name = plain_frame(reg, HERO_NAME, 34, Role::Heading);
    name.set_label_font(Font::HelveticaBold);
    hero.fixed(&name, 52);
    let tagline = text_frame(reg, HERO_TAGLINE, 18, Role::Body);
    hero.fixed(&tagline, 32);
    text_frame(reg, HERO_INTRO, 14, Role::Muted);
    hero.end();
    h
}

fn build_about(reg: &mut Registry, x: i32, y: i32, w: i32) -> i32 {
    let h = HEADING_HEIGHT + 10 + ABOUT_PARAGRAPHS.len() as i32 * 70;
    let mut section = begin_section(reg, x, y, w, h, "about");
    for paragraph in ABOUT_PARAGRAPHS {
        let frame = text_frame(reg, *paragraph, 15, Role::Body);
        section.fixed(&frame, 60);
    }
    section.end();
    h
}

fn build_projects(
    reg: &mut Registry,
    catalog: &ContentCatalog,
    sender: &Sender<Message>,
    x: i32,
    y: i32,
    w: i32,
) -> i32 {
    let card_h = 200;
    let rows = catalog.len().div_ceil(CARDS_PER_ROW).max(1) as i32;
    let h = HEADING_HEIGHT + rows * (card_h + 10);
    let mut section = begin_section(reg, x, y, w, h, "projects");

    for chunk in catalog.projects().chunks(CARDS_PER_ROW) {
        let mut row = Flex::default().row();
        row.set_spacing(16);
        section.fixed(&row, card_h);

        for project in chunk {
            let mut card = Flex::default().column();
            card.set_frame(FrameType::FlatBox);
            card.set_margins(14, 12, 14, 12);
            card.set_spacing(6);
            reg.style(&card, Role::Card);

            let mut title = Frame::default();
            title.set_frame(FrameType::FlatBox);
            title.set_label_size(16);
            title.set_label_font(Font::HelveticaBold);
            title.set_align(Align::Left | Align::Inside | Align::Wrap);
            reg.bilingual(&mut title, project.title.clone(), Role::Body);
            card.fixed(&title, 48);

            plain_frame(reg, &project.tags.join(" · "), 12, Role::Muted);

            let mut view = Button::default();
            view.set_frame(FrameType::FlatBox);
            view.set_label_size(13);
            reg.bilingual(&mut view, PROJECT_VIEW_LABEL.localized(), Role::Button);
            card.fixed(&view, 32);
            let s = sender.clone();
            let id = project.id.as_str().to_string();
            view.set_callback(move |_| s.send(Message::OpenProject(id.clone())));

            card.end();
        }

        // Keep short last rows from stretching their cards
        for _ in chunk.len()..CARDS_PER_ROW {
            Frame::default();
        }
        row.end();
    }
    section.end();
    h
}

fn build_skills(reg: &mut Registry, x: i32, y: i32, w: i32) -> i32 {
    let h = HEADING_HEIGHT + SKILL_GROUPS.len() as i32 * 40;
    let mut section = begin_section(reg, x, y, w, h, "skills");
    for (group, items) in SKILL_GROUPS {
        let mut row = Flex::default().row();
        section.fixed(&row, 30);
        let mut label = text_frame(reg, *group, 15, Role::Body);
        label.set_label_font(Font::HelveticaBold);
        row.fixed(&label, 220);
        plain_frame(reg, items, 14, Role::Muted);
        row.end();
    }
    section.end();
    h
}

fn build_awards(reg: &mut Registry, x: i32, y: i32, w: i32) -> i32 {
    let h = HEADING_HEIGHT + AWARDS.len() as i32 * 40;
    let mut section = begin_section(reg, x, y, w, h, "awards");
    for award in AWARDS {
        let frame = text_frame(reg, *award, 15, Role::Body);
        section.fixed(&frame, 30);
    }
    section.end();
    h
}

fn build_contact(reg: &mut Registry, sender: &Sender<Message>, x: i32, y: i32, w: i32) -> i32 {
    let h = HEADING_HEIGHT + 60;
    let mut section = begin_section(reg, x, y, w, h, "contact");
    let mut row = Flex::default().row();
    row.set_spacing(16);
    section.fixed(&row, 44);
    for (label, url) in CONTACT_LINKS {
        let mut card = Button::default();
        card.set_frame(FrameType::FlatBox);
        card.set_label_size(15);
        card.set_tooltip(url);
        reg.bilingual(&mut card, label.localized(), Role::Button);
        let s = sender.clone();
        let url: &'static str = *url;
        card.set_callback(move |_| s.send(Message::OpenLink(url)));
    }
    row.end();
    section.end();
    h
}

fn build_footer(reg: &mut Registry, x: i32, y: i32, w: i32) -> (Frame, i32) {
    let h = 40;
    let mut footer = Flex::new(x, y, w, h, None).row();
    footer.set_frame(FrameType::FlatBox);
    reg.style(&footer, Role::Surface);
    let year = plain_frame(reg, "©", 13, Role::Muted);
    footer.fixed(&year, 260);
    text_frame(reg, FOOTER_NOTE, 13, Role::Muted);
    footer.end();
    (year, h)
}

/// Build the scrolled page inside the current group.
pub fn build_page(
    reg: &mut Registry,
    catalog: &ContentCatalog,
    sender: &Sender<Message>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) -> PageWidgets {
    let mut scroll = Scroll::new(x, y, w, h, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);
    scroll.set_scrollbar_size(SCROLLBAR_WIDTH);
    reg.style(&scroll, Role::Surface);

    let inner_x = x + PAGE_MARGIN;
    let inner_w = w - 2 * PAGE_MARGIN - SCROLLBAR_WIDTH;
    let mut cursor = y + PAGE_MARGIN;

    cursor += build_hero(reg, inner_x, cursor, inner_w) + SECTION_SPACING;
    cursor += build_about(reg, inner_x, cursor, inner_w) + SECTION_SPACING;
    cursor += build_projects(reg, catalog, sender, inner_x, cursor, inner_w) + SECTION_SPACING;
    cursor += build_skills(reg, inner_x, cursor, inner_w) + SECTION_SPACING;
    cursor += build_awards(reg, inner_x, cursor, inner_w) + SECTION_SPACING;
    cursor += build_contact(reg, sender, inner_x, cursor, inner_w) + SECTION_SPACING;
    let (footer_year, footer_h) = build_footer(reg, inner_x, cursor, inner_w);
    cursor += footer_h + PAGE_MARGIN;

    scroll.end();

    PageWidgets {
        scroll,
        footer_year,
        content_height: cursor - y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_escapes_markup() {
        assert_eq!(label_text("Ödüller & Başarılar"), "Ödüller && Başarılar");
        assert_eq!(label_text("mail@site"), "mail@@site");
        assert_eq!(label_text("plain"), "plain");
    }
}
