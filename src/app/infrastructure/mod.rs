//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The document contract and a headless document
//! - Preference persistence
//! - Error types

pub mod document;
pub mod error;
pub mod preferences;
