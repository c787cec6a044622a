// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::{Map, Value};

use crate::error::{MarfilError, Result};

use super::SettingsStore;

impl SettingsStore {
    /// Overlay the settings file onto the current values.
    ///
    /// A missing file is created from the current values. Malformed JSON, or
    /// a document that is not an object, is returned as an error.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "settings file missing, writing defaults");
            return self.save();
        }

        let content = std::fs::read_to_string(&self.path)?;
        let raw: Value = serde_json::from_str(&content)?;
        let Value::Object(file_values) = raw else {
            return Err(MarfilError::Config(format!(
                "{} must contain a JSON object",
                self.path.display()
            )));
        };

        overlay(&mut self.values, file_values);
        tracing::debug!(
            path = %self.path.display(),
            keys = self.values.len(),
            "settings loaded"
        );
        Ok(())
    }

    /// Write the whole mapping, pretty-printed with 2-space indentation.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = self.to_pretty_json()?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Flat merge: keys from `overlay` replace or extend `base`. Existing keys keep
/// their position, new keys are appended in overlay order.
fn overlay(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{KEY_BG_SCALE_MODE, KEY_FONDOS_DIR, SETTINGS_FILE_NAME};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"bg_scale_mode": "fill"}"#).unwrap();

        let store = SettingsStore::open(&path).unwrap();
        assert_eq!(store.get(KEY_BG_SCALE_MODE), Some(&json!("fill")));
        assert_eq!(store.get(KEY_FONDOS_DIR), Some(&json!("fondos")));
    }

    #[test]
    fn test_unknown_keys_survive_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"font": "Old English", "fondos_dir": "bg"}"#).unwrap();

        let mut store = SettingsStore::open(&path).unwrap();
        store.set(KEY_BG_SCALE_MODE, json!("fit")).unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["font"], json!("Old English"));
        assert_eq!(saved["fondos_dir"], json!("bg"));
        assert_eq!(saved["bg_scale_mode"], json!("fit"));
    }

    #[test]
    fn test_overlay_keeps_default_positions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"extra": 1, "fondos_dir": "bg"}"#).unwrap();

        let store = SettingsStore::open(&path).unwrap();
        let keys: Vec<_> = store.values().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["fondos_dir", "bg_scale_mode", "bg_custom_scale", "extra"]
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = SettingsStore::open(&path).unwrap_err();
        assert!(matches!(err, MarfilError::Json(_)));
        // The broken file is left for the user to inspect.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_non_object_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = SettingsStore::open(&path).unwrap_err();
        assert!(matches!(err, MarfilError::Config(_)));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(SETTINGS_FILE_NAME);

        SettingsStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overlay_replaces_and_appends() {
        let mut base = Map::new();
        base.insert("a".into(), json!(1));
        base.insert("b".into(), json!(2));
        let mut top = Map::new();
        top.insert("c".into(), json!(3));
        top.insert("a".into(), json!(10));

        overlay(&mut base, top);
        assert_eq!(Value::Object(base), json!({"a": 10, "b": 2, "c": 3}));
    }
}
