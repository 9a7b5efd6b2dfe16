use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, Font, FrameType, Key},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::document::FltkDocument;
use super::lightbox::build_lightbox;
use super::page::{PAGE_MARGIN, Registry, build_page, label_text};
use super::theme::Role;
use crate::app::domain::{CloseReason, Message};
use crate::app::services::catalog::ContentCatalog;
use crate::app::services::page_content::{HERO_NAME, NAV_LINKS, PAGE_TITLE};

const WINDOW_WIDTH: i32 = 1100;
const WINDOW_HEIGHT: i32 = 760;
const HEADER_HEIGHT: i32 = 56;

fn header_button(reg: &mut Registry, label: &str, width: i32, header: &mut Flex) -> Button {
    let mut button = Button::default().with_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_label_size(15);
    button.clear_visible_focus();
    header.fixed(&button, width);
    reg.style(&button, Role::Button);
    button
}

/// Whether the page scroll must swallow `event` while the lightbox is open.
/// Keys the focused widget ignores come back as `Shortcut` and would reach
/// the scrollbars. Escape is let through so the window can close the
/// lightbox.
fn blocked_while_locked(event: Event, key: Key) -> bool {
    match event {
        Event::MouseWheel => true,
        Event::KeyDown | Event::Shortcut => key != Key::Escape,
        _ => false,
    }
}

/// Build the portfolio window: header bar, scrolled page and the hidden
/// lightbox overlay stacked on top of both.
pub fn build_main_window(catalog: &ContentCatalog, sender: &Sender<Message>) -> FltkDocument {
    let mut reg = Registry::default();

    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    wind.set_label(PAGE_TITLE.tr);
    wind.set_xclass("Folio");

    let mut header = Flex::new(0, 0, WINDOW_WIDTH, HEADER_HEIGHT, None).row();
    header.set_frame(FrameType::FlatBox);
    header.set_margins(PAGE_MARGIN, 10, PAGE_MARGIN, 10);
    header.set_spacing(8);
    reg.style(&header, Role::Header);

    let mut brand = Frame::default().with_label(&label_text(HERO_NAME));
    brand.set_frame(FrameType::FlatBox);
    brand.set_label_size(18);
    brand.set_label_font(Font::HelveticaBold);
    header.fixed(&brand, 220);
    reg.style(&brand, Role::Header);

    let mut nav_toggle = header_button(&mut reg, "☰", 40, &mut header);
    let s = sender.clone();
    nav_toggle.set_callback(move |_| s.send(Message::ToggleNav));

    let mut nav_list = Flex::default().row();
    nav_list.set_spacing(6);
    for (key, label) in NAV_LINKS {
        let key: &'static str = *key;
        let mut link = Button::default();
        link.set_frame(FrameType::FlatBox);
        link.set_label_size(14);
        link.clear_visible_focus();
        reg.bilingual(&mut link, label.localized(), Role::Button);
        reg.nav_buttons.push((key, link.as_base_widget()));
        let s = sender.clone();
        link.set_callback(move |_| s.send(Message::NavLinkActivated(key)));
    }
    nav_list.end();
    nav_list.hide();

    Frame::default();

    let mut theme_button = header_button(&mut reg, "◐", 44, &mut header);
    theme_button.set_tooltip("Theme");
    let s = sender.clone();
    theme_button.set_callback(move |_| s.send(Message::ToggleTheme));

    let mut lang_button = header_button(&mut reg, "EN", 52, &mut header);
    let s = sender.clone();
    lang_button.set_callback(move |_| s.send(Message::ToggleLanguage));

    header.end();

    let page = build_page(
        &mut reg,
        catalog,
        sender,
        0,
        HEADER_HEIGHT,
        WINDOW_WIDTH,
        WINDOW_HEIGHT - HEADER_HEIGHT,
    );
    let mut scroll = page.scroll;

    let scroll_locked = Rc::new(Cell::new(false));
    let locked = scroll_locked.clone();
    let s = sender.clone();
    scroll.handle(move |_, event| match event {
        _ if locked.get() && blocked_while_locked(event, app::event_key()) => true,
        Event::MouseWheel | Event::Drag | Event::Released | Event::KeyUp => {
            s.send(Message::Scrolled);
            false
        }
        _ => false,
    });

    let lightbox = build_lightbox(&mut reg, sender, WINDOW_WIDTH, WINDOW_HEIGHT);

    wind.end();
    wind.resizable(&scroll);

    // Escape reaches the window callback before FLTK would close it
    let s = sender.clone();
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        } else if app::event_key() == Key::Escape {
            s.send(Message::CloseLightbox(CloseReason::Escape));
        }
    });

    FltkDocument::new(
        wind,
        header,
        nav_list,
        nav_toggle,
        lang_button,
        scroll,
        page.footer_year,
        lightbox,
        scroll_locked,
        reg,
        page.content_height,
    )
}
