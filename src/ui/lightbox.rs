use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, Group, Pack, PackType},
    prelude::*,
};

use super::page::Registry;
use super::theme::Role;
use crate::app::domain::{CloseReason, Message};

pub const LIGHTBOX_IMAGE_HEIGHT: i32 = 300;

pub struct LightboxWidgets {
    pub overlay: Group,
    pub image: Frame,
    pub title: Frame,
    pub description: Frame,
    pub tags: Pack,
}

/// Build the overlay covering `w`x`h`. It starts hidden; the backdrop and
/// the close button both ask for the lightbox to be closed.
pub fn build_lightbox(reg: &mut Registry, sender: &Sender<Message>, w: i32, h: i32) -> LightboxWidgets {
    let mut overlay = Group::new(0, 0, w, h, None);

    let mut backdrop = Button::new(0, 0, w, h, None);
    backdrop.set_frame(FrameType::FlatBox);
    backdrop.clear_visible_focus();
    reg.style(&backdrop, Role::Backdrop);
    let s = sender.clone();
    backdrop.set_callback(move |_| s.send(Message::CloseLightbox(CloseReason::Backdrop)));

    let panel_w = (w - 160).min(760);
    let panel_h = (h - 80).min(620);
    let mut panel = Flex::new((w - panel_w) / 2, (h - panel_h) / 2, panel_w, panel_h, None).column();
    panel.set_frame(FrameType::FlatBox);
    panel.set_margins(20, 16, 20, 16);
    panel.set_spacing(10);
    reg.style(&panel, Role::Panel);

    let mut top = Flex::default().row();
    panel.fixed(&top, 30);
    Frame::default();
    let mut close = Button::default().with_label("✕");
    close.set_frame(FrameType::FlatBox);
    close.set_label_size(16);
    top.fixed(&close, 36);
    reg.style(&close, Role::Button);
    let s = sender.clone();
    close.set_callback(move |_| s.send(Message::CloseLightbox(CloseReason::CloseButton)));
    top.end();

    let mut image = Frame::default();
    image.set_frame(FrameType::FlatBox);
    image.set_align(Align::Center | Align::Inside | Align::Wrap);
    panel.fixed(&image, LIGHTBOX_IMAGE_HEIGHT);
    reg.style(&image, Role::Card);

    let mut title = Frame::default();
    title.set_frame(FrameType::FlatBox);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Left | Align::Inside | Align::Wrap);
    panel.fixed(&title, 40);
    reg.style(&title, Role::Heading);

    let mut description = Frame::default();
    description.set_frame(FrameType::FlatBox);
    description.set_label_size(14);
    description.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);
    reg.style(&description, Role::Body);

    let mut tags = Pack::default();
    tags.set_type(PackType::Horizontal);
    tags.set_spacing(8);
    tags.end();
    panel.fixed(&tags, 28);

    panel.end();
    overlay.end();
    overlay.hide();

    LightboxWidgets {
        overlay,
        image,
        title,
        description,
        tags,
    }
}
