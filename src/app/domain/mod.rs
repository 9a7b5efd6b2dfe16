//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Languages and bilingual text
//! - Theme mode
//! - Project records
//! - The view state and the message types for the event system

pub mod language;
pub mod messages;
pub mod project;
pub mod theme;
pub mod view_state;

pub use language::{LanguageCode, LocalizedText};
pub use messages::{CloseReason, Message};
pub use project::{ProjectId, ProjectRecord};
pub use theme::{LIGHT_THEME_CLASS, ThemeMode};
pub use view_state::{LANGUAGE_KEY, LightboxState, THEME_KEY, ViewState};
