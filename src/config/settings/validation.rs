// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::{MarfilError, Result};
use crate::theme::Rgb;

use super::schema::{
    ScaleMode, DEFAULT_CUSTOM_SCALE, DEFAULT_FONDOS_DIR, DEFAULT_SCALE_MODE, KEY_ACCENT_COLOR,
    KEY_BG_CUSTOM_SCALE, KEY_BG_SCALE_MODE, KEY_FONDOS_DIR, MAX_CUSTOM_SCALE, MIN_CUSTOM_SCALE,
};
use super::SettingsStore;

impl SettingsStore {
    /// Folder holding background images, as stored (may be relative).
    pub fn fondos_dir(&self) -> PathBuf {
        match self.get(KEY_FONDOS_DIR) {
            Some(Value::String(dir)) if !dir.is_empty() => PathBuf::from(dir),
            Some(other) => {
                tracing::warn!(value = %other, "ignoring invalid {}", KEY_FONDOS_DIR);
                PathBuf::from(DEFAULT_FONDOS_DIR)
            }
            None => PathBuf::from(DEFAULT_FONDOS_DIR),
        }
    }

    /// Background scale mode, falling back to `expand` like the painter does
    /// for anything that is not exactly one of the stored names.
    pub fn scale_mode(&self) -> ScaleMode {
        match self.get(KEY_BG_SCALE_MODE) {
            Some(Value::String(mode)) => ScaleMode::from_stored(mode).unwrap_or_else(|| {
                tracing::warn!(
                    value = %mode,
                    "unknown {}, using {}",
                    KEY_BG_SCALE_MODE,
                    DEFAULT_SCALE_MODE
                );
                DEFAULT_SCALE_MODE
            }),
            Some(other) => {
                tracing::warn!(value = %other, "ignoring invalid {}", KEY_BG_SCALE_MODE);
                DEFAULT_SCALE_MODE
            }
            None => DEFAULT_SCALE_MODE,
        }
    }

    /// Custom scale factor; non-numeric or non-positive values read as 1.0.
    pub fn custom_scale(&self) -> f64 {
        match self.get(KEY_BG_CUSTOM_SCALE).and_then(Value::as_f64) {
            Some(factor) if factor.is_finite() && factor > 0.0 => factor,
            Some(factor) => {
                tracing::warn!(factor, "ignoring non-positive {}", KEY_BG_CUSTOM_SCALE);
                DEFAULT_CUSTOM_SCALE
            }
            None => DEFAULT_CUSTOM_SCALE,
        }
    }

    /// Fixed slogan color, if one is configured and valid.
    pub fn accent_color(&self) -> Option<Rgb> {
        let raw = self.get(KEY_ACCENT_COLOR)?.as_str()?;
        match Rgb::parse_hex(raw) {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", KEY_ACCENT_COLOR, e);
                None
            }
        }
    }

    /// Switch the background scale mode and persist.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> Result<()> {
        self.set(KEY_BG_SCALE_MODE, Value::from(mode.as_str()))
    }

    /// Store a custom scale factor and switch to `custom` mode.
    pub fn set_custom_scale(&mut self, factor: f64) -> Result<()> {
        let factor = validate_custom_scale(factor)?;
        self.set_scale_mode(ScaleMode::Custom)?;
        self.set(KEY_BG_CUSTOM_SCALE, Value::from(factor))
    }
}

fn validate_custom_scale(factor: f64) -> Result<f64> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(MarfilError::InvalidInput(format!(
            "scale factor must be a positive number, got {}",
            factor
        )));
    }
    Ok(factor.clamp(MIN_CUSTOM_SCALE, MAX_CUSTOM_SCALE))
}

/// Turn command-line text into the JSON value stored under `key`.
///
/// Known keys are validated. Anything else is parsed as JSON when it can be,
/// otherwise kept as a plain string.
pub fn parse_value(key: &str, raw: &str) -> Result<Value> {
    match key {
        KEY_FONDOS_DIR => {
            if raw.trim().is_empty() {
                return Err(MarfilError::InvalidInput(format!("{} cannot be empty", key)));
            }
            Ok(Value::from(raw))
        }
        KEY_BG_SCALE_MODE => {
            let mode: ScaleMode = raw.parse().map_err(MarfilError::InvalidInput)?;
            Ok(Value::from(mode.as_str()))
        }
        KEY_BG_CUSTOM_SCALE => {
            let factor: f64 = raw.trim().parse().map_err(|_| {
                MarfilError::InvalidInput(format!("{} must be a number, got {}", key, raw))
            })?;
            Ok(Value::from(validate_custom_scale(factor)?))
        }
        KEY_ACCENT_COLOR => {
            let color = Rgb::parse_hex(raw).map_err(MarfilError::InvalidInput)?;
            Ok(Value::from(color.to_hex()))
        }
        _ => Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))),
    }
}
