use fltk::{
    enums::{Color, FrameType},
    prelude::*,
    widget::Widget,
    window::Window,
};

/// What a widget is on the page; decides which palette colors it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Surface,
    Header,
    Card,
    Heading,
    Body,
    Muted,
    Button,
    ActiveNav,
    Tag,
    Backdrop,
    Panel,
}

struct Palette {
    background: Color,
    header: Color,
    card: Color,
    text: Color,
    muted: Color,
    brand: Color,
    button: Color,
    button_text: Color,
    tag: Color,
    backdrop: Color,
}

fn palette(light: bool) -> Palette {
    if light {
        Palette {
            background: Color::from_rgb(246, 247, 251),
            header: Color::from_rgb(255, 255, 255),
            card: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(20, 24, 33),
            muted: Color::from_rgb(96, 104, 120),
            brand: Color::from_rgb(37, 99, 235),
            button: Color::from_rgb(232, 236, 244),
            button_text: Color::from_rgb(20, 24, 33),
            tag: Color::from_rgb(219, 234, 254),
            backdrop: Color::from_rgb(200, 204, 214),
        }
    } else {
        Palette {
            background: Color::from_rgb(11, 15, 23),
            header: Color::from_rgb(17, 22, 33),
            card: Color::from_rgb(22, 28, 41),
            text: Color::from_rgb(230, 234, 242),
            muted: Color::from_rgb(148, 158, 178),
            brand: Color::from_rgb(96, 165, 250),
            button: Color::from_rgb(34, 42, 60),
            button_text: Color::from_rgb(230, 234, 242),
            tag: Color::from_rgb(30, 58, 98),
            backdrop: Color::from_rgb(4, 6, 10),
        }
    }
}

/// Color one widget for its role.
pub fn style_widget(widget: &mut Widget, role: Role, light: bool) {
    let p = palette(light);
    match role {
        Role::Surface => {
            widget.set_color(p.background);
            widget.set_label_color(p.text);
        }
        Role::Header => {
            widget.set_color(p.header);
            widget.set_label_color(p.text);
        }
        Role::Card | Role::Panel => {
            widget.set_color(p.card);
            widget.set_label_color(p.text);
        }
        Role::Heading => {
            widget.set_color(p.background);
            widget.set_label_color(p.brand);
        }
        Role::Body => {
            widget.set_color(p.card);
            widget.set_label_color(p.text);
        }
        Role::Muted => {
            widget.set_color(p.card);
            widget.set_label_color(p.muted);
        }
        Role::Button => {
            widget.set_color(p.button);
            widget.set_selection_color(p.brand);
            widget.set_label_color(p.button_text);
        }
        Role::ActiveNav => {
            widget.set_color(p.brand);
            widget.set_selection_color(p.brand);
            widget.set_label_color(p.background);
        }
        Role::Tag => {
            widget.set_color(p.tag);
            widget.set_label_color(p.text);
        }
        Role::Backdrop => {
            widget.set_color(p.backdrop);
            widget.set_selection_color(p.backdrop);
        }
    }
    widget.redraw();
}

/// Dim an image slot whose picture failed to load.
pub fn style_broken_image(widget: &mut Widget, light: bool) {
    let p = palette(light);
    widget.set_frame(FrameType::BorderBox);
    widget.set_color(p.card);
    widget.set_label_color(p.muted);
    widget.redraw();
}

pub fn apply_theme(window: &mut Window, styled: &mut [(Widget, Role)], light: bool) {
    let p = palette(light);
    window.set_color(p.background);
    window.set_label_color(p.text);

    for (widget, role) in styled.iter_mut() {
        style_widget(widget, *role, light);
    }

    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
