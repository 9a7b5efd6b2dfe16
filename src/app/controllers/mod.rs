//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the document:
//! - Rendering language and theme
//! - Language and theme toggles
//! - The project lightbox
//! - Navigation

pub mod lightbox;
pub mod navigation;
pub mod render;
pub mod toggles;
