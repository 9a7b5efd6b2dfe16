use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Durable key-value storage for user choices.
///
/// Implementations never fail outward: when storage is unavailable `get`
/// returns `None` and `set` does nothing.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Preferences kept as a flat JSON object in the user's config directory.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: Option<PathBuf>,
}

impl JsonPreferenceStore {
    /// Store at the platform config location, or an unavailable store when
    /// the platform has no config directory.
    pub fn open_default() -> Self {
        let path = Self::get_config_path();
        if path.is_none() {
            tracing::warn!("no config directory; preferences will not persist");
        }
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("folio");
        path.push("preferences.json");
        Some(path)
    }

    fn require_path(&self) -> Result<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| AppError::Preferences("storage unavailable".to_string()))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.require_path()?;
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            // Nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<()> {
        let path = self.require_path()?;

        let mut entries = writable_base(self.read_all())?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// The map a write starts from. A corrupt file is replaced; any other read
/// failure aborts the write so the keys already stored are not lost.
fn writable_base(current: Result<BTreeMap<String, String>>) -> Result<BTreeMap<String, String>> {
    match current {
        Ok(entries) => Ok(entries),
        Err(AppError::Json(e)) => {
            tracing::warn!(error = %e, "replacing corrupt preferences file");
            Ok(BTreeMap::new())
        }
        Err(e) => Err(e),
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read preferences");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.write_entry(key, value) {
            tracing::warn!(key, value, error = %e, "failed to save preference");
        }
    }
}

/// In-process store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that behaves like storage disabled by the user.
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            unavailable: true,
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.unavailable {
            return;
        }
        self.entries.insert(key.to_string(), value.to_string());
    }
}
