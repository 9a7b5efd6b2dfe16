/// Why the lightbox was closed. All reasons close it the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Header
    ToggleLanguage,
    ToggleTheme,
    ToggleNav,
    NavLinkActivated(&'static str),

    // Page
    Scrolled,
    OpenProject(String),
    OpenLink(&'static str),

    // Lightbox
    CloseLightbox(CloseReason),

    WindowClose,
}
