// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for marfil
//!
//! A flat key-value store persisted as pretty-printed JSON (`config.vtha`).
//! Built-in defaults are always present; values from the file overlay them and
//! unknown keys are carried through untouched. Every mutation is written back
//! to disk immediately.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::Result;

mod io;
pub mod schema;
mod validation;

pub use schema::{
    ScaleMode, KEY_ACCENT_COLOR, KEY_BG_CUSTOM_SCALE, KEY_BG_SCALE_MODE, KEY_FONDOS_DIR,
};
pub use validation::parse_value;

/// Default settings file name, relative to the workspace root
pub const SETTINGS_FILE_NAME: &str = "config.vtha";

/// JSON-backed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Path of the settings file
    path: PathBuf,
    /// Current values, defaults first then file order
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Create a store holding only the built-in defaults. Nothing is read or
    /// written until [`SettingsStore::load`] or a mutation.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: schema::defaults(),
        }
    }

    /// Create a store with defaults and load the file at `path`, creating it
    /// when missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::with_defaults(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a stored value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a stored value or the supplied default
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Store a value and persist the whole mapping.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        tracing::debug!(key = %key, value = %value, "setting updated");
        self.values.insert(key, value);
        self.save()
    }

    /// Restore the built-in defaults, dropping every other key, and persist.
    pub fn reset(&mut self) -> Result<()> {
        self.values = schema::defaults();
        self.save()
    }

    /// All current values in on-disk order
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Render the mapping the way it is written to disk
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::open(dir.path().join(SETTINGS_FILE_NAME)).unwrap()
    }

    #[test]
    fn test_fresh_store_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let written = std::fs::read_to_string(store.path()).unwrap();
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            parsed,
            json!({"fondos_dir": "fondos", "bg_scale_mode": "expand", "bg_custom_scale": 1.0})
        );
    }

    #[test]
    fn test_defaults_written_with_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.starts_with("{\n  \"fondos_dir\": \"fondos\","));
    }

    #[test]
    fn test_get_or_returns_supplied_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get_or("missing", json!(7)), json!(7));
        assert_eq!(store.get_or(KEY_FONDOS_DIR, json!("x")), json!("fondos"));
    }

    #[test]
    fn test_set_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set(KEY_BG_SCALE_MODE, json!("fit")).unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.get(KEY_BG_SCALE_MODE), Some(&json!("fit")));
    }

    #[test]
    fn test_reset_drops_extra_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("window_title", json!("Torre")).unwrap();
        store.reset().unwrap();

        let reloaded = store_in(&dir);
        assert!(reloaded.get("window_title").is_none());
        assert_eq!(reloaded.values().len(), 3);
    }

    #[test]
    fn test_with_defaults_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let store = SettingsStore::with_defaults(&path);

        assert!(!path.exists());
        assert_eq!(store.get(KEY_BG_CUSTOM_SCALE), Some(&json!(1.0)));
    }
}
