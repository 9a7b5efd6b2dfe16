//! Services layer - content and pure helpers.
//!
//! This module contains the static content and logic with no UI coupling:
//! - The project catalog
//! - Page text in both languages
//! - Active section detection

pub mod catalog;
pub mod page_content;
pub mod scroll_spy;
