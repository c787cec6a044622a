// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Known settings keys, their defaults, and the background scale mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Folder holding background images
pub const KEY_FONDOS_DIR: &str = "fondos_dir";
/// How backgrounds are scaled to the window
pub const KEY_BG_SCALE_MODE: &str = "bg_scale_mode";
/// Factor used when the scale mode is `custom`
pub const KEY_BG_CUSTOM_SCALE: &str = "bg_custom_scale";
/// Optional fixed color for the slogan
pub const KEY_ACCENT_COLOR: &str = "accent_color";

pub const DEFAULT_FONDOS_DIR: &str = "fondos";
pub const DEFAULT_SCALE_MODE: ScaleMode = ScaleMode::Expand;
pub const DEFAULT_CUSTOM_SCALE: f64 = 1.0;

/// Bounds accepted for a user-entered custom scale
pub const MIN_CUSTOM_SCALE: f64 = 0.1;
pub const MAX_CUSTOM_SCALE: f64 = 10.0;

/// Built-in defaults, in the order they are written to disk.
pub fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(KEY_FONDOS_DIR.to_string(), Value::from(DEFAULT_FONDOS_DIR));
    map.insert(
        KEY_BG_SCALE_MODE.to_string(),
        Value::from(DEFAULT_SCALE_MODE.as_str()),
    );
    map.insert(
        KEY_BG_CUSTOM_SCALE.to_string(),
        Value::from(DEFAULT_CUSTOM_SCALE),
    );
    map
}

/// Background scale mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Stretch to the window, ignoring aspect ratio
    Fill,
    /// Fit inside the window, keeping aspect ratio
    Fit,
    /// Cover the window, keeping aspect ratio
    #[default]
    Expand,
    /// Scale the image by the custom factor
    Custom,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 4] = [
        ScaleMode::Fill,
        ScaleMode::Fit,
        ScaleMode::Expand,
        ScaleMode::Custom,
    ];

    /// Name as stored in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleMode::Fill => "fill",
            ScaleMode::Fit => "fit",
            ScaleMode::Expand => "expand",
            ScaleMode::Custom => "custom",
        }
    }

    /// Exact match against the stored name. Case and whitespace variants are
    /// not recognised here, only in command-line input.
    pub fn from_stored(s: &str) -> Option<ScaleMode> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fill" => Ok(ScaleMode::Fill),
            "fit" => Ok(ScaleMode::Fit),
            "expand" => Ok(ScaleMode::Expand),
            "custom" => Ok(ScaleMode::Custom),
            _ => Err(format!(
                "Unknown scale mode: {} (expected fill, fit, expand or custom)",
                s
            )),
        }
    }
}
