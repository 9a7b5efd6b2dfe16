pub mod document;
pub mod lightbox;
pub mod main_window;
pub mod page;
pub mod theme;
