//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (languages, theme, projects, view state, messages)
//! - `controllers/` - Orchestration (rendering, toggles, lightbox, navigation)
//! - `services/` - Static content and pure helpers (catalog, page text, scroll spy)
//! - `infrastructure/` - External integrations (document contract, preferences, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{CloseReason, LanguageCode, LocalizedText, Message, ProjectId, ProjectRecord, ThemeMode, ViewState};
pub use infrastructure::document::{Document, MemoryDocument};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use services::catalog::ContentCatalog;
pub use state::AppState;
