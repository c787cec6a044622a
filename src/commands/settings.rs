// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command

use serde_json::Value;

use crate::cli::args::{OutputFormat, SettingsArgs, SettingsCommands};
use crate::config::{
    parse_value, ScaleMode, SettingsStore, KEY_BG_CUSTOM_SCALE, KEY_BG_SCALE_MODE,
};
use crate::error::{MarfilError, Result};
use crate::workspace::WorkspacePaths;

/// Execute the settings command
pub fn execute(args: SettingsArgs, format: &OutputFormat, paths: &WorkspacePaths) -> Result<()> {
    let mut store = SettingsStore::open(&paths.settings_file)?;

    match args.command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {
            match format {
                OutputFormat::Json => println!("{}", store.to_pretty_json()?),
                OutputFormat::Text => {
                    for (key, value) in store.values() {
                        println!("{} = {}", key, display_value(value));
                    }
                }
            }
        }
        SettingsCommands::Get { key } => {
            let value = store
                .get(&key)
                .ok_or_else(|| MarfilError::InvalidInput(format!("Unknown setting: {}", key)))?;
            match format {
                OutputFormat::Json => println!("{}", value),
                OutputFormat::Text => println!("{}", display_value(value)),
            }
        }
        SettingsCommands::Set { key, value } => {
            let stored = apply_set(&mut store, &key, &value)?;
            println!("Set {} = {}", key, display_value(&stored));
        }
        SettingsCommands::Reset => {
            store.reset()?;
            println!("Settings reset to defaults.");
        }
    }

    Ok(())
}

/// Validate and store one value from the command line, returning what was
/// persisted. A custom scale factor also switches the scale mode to `custom`.
pub fn apply_set(store: &mut SettingsStore, key: &str, raw: &str) -> Result<Value> {
    let value = parse_value(key, raw)?;
    match key {
        KEY_BG_CUSTOM_SCALE => {
            let factor = value.as_f64().unwrap_or_else(|| store.custom_scale());
            store.set_custom_scale(factor)?;
        }
        KEY_BG_SCALE_MODE => {
            let mode: ScaleMode = raw.parse().map_err(MarfilError::InvalidInput)?;
            store.set_scale_mode(mode)?;
        }
        _ => store.set(key, value)?,
    }
    Ok(store.get(key).cloned().unwrap_or(Value::Null))
}

/// Strings print bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_ACCENT_COLOR;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_apply_set_validates() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open(dir.path().join("config.vtha")).unwrap();

        assert!(apply_set(&mut store, KEY_BG_SCALE_MODE, "zoom").is_err());
        apply_set(&mut store, KEY_BG_SCALE_MODE, "fill").unwrap();
        assert_eq!(store.scale_mode(), ScaleMode::Fill);
    }

    #[test]
    fn test_apply_set_custom_scale_switches_mode() {
        let dir = TempDir::new().unwrap();
        let paths = WorkspacePaths::new(dir.path());
        let args = SettingsArgs {
            command: Some(SettingsCommands::Set {
                key: KEY_BG_CUSTOM_SCALE.to_string(),
                value: "2.5".to_string(),
            }),
        };
        execute(args, &OutputFormat::Text, &paths).unwrap();

        let reloaded = SettingsStore::open(&paths.settings_file).unwrap();
        assert_eq!(reloaded.scale_mode(), ScaleMode::Custom);
        assert_eq!(reloaded.custom_scale(), 2.5);
    }

    #[test]
    fn test_apply_set_returns_stored_value() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open(dir.path().join("config.vtha")).unwrap();

        assert_eq!(
            apply_set(&mut store, KEY_BG_CUSTOM_SCALE, "50").unwrap(),
            json!(10.0)
        );
        assert_eq!(
            apply_set(&mut store, KEY_ACCENT_COLOR, "#FF66CC").unwrap(),
            json!("#ff66cc")
        );
        assert_eq!(
            apply_set(&mut store, KEY_BG_SCALE_MODE, "FIT").unwrap(),
            json!("fit")
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("fondos")), "fondos");
        assert_eq!(display_value(&json!(1.0)), "1.0");
        assert_eq!(display_value(&json!(true)), "true");
    }

    #[test]
    fn test_execute_get_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let paths = WorkspacePaths::new(dir.path());
        let args = SettingsArgs {
            command: Some(SettingsCommands::Get {
                key: "nope".to_string(),
            }),
        };
        let err = execute(args, &OutputFormat::Text, &paths).unwrap_err();
        assert!(err.to_string().contains("Unknown setting"));
    }
}
