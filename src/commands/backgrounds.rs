// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Background listing command

use serde::Serialize;

use crate::backgrounds::BackgroundRotation;
use crate::cli::args::{BackgroundsArgs, OutputFormat};
use crate::config::SettingsStore;
use crate::error::Result;
use crate::workspace::WorkspacePaths;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackgroundsInfo {
    folder: String,
    scale_mode: String,
    custom_scale: f64,
    images: Vec<String>,
    current: Option<String>,
    index: usize,
}

/// Execute the backgrounds command
pub fn execute(args: &BackgroundsArgs, format: &OutputFormat, paths: &WorkspacePaths) -> Result<()> {
    let settings = SettingsStore::open(&paths.settings_file)?;
    let folder = paths.resolve(&settings.fondos_dir());
    let mut rotation = BackgroundRotation::scan(&folder)?;
    advance(&mut rotation, args.rotate);

    let info = BackgroundsInfo {
        folder: folder.display().to_string(),
        scale_mode: settings.scale_mode().to_string(),
        custom_scale: settings.custom_scale(),
        images: rotation
            .images()
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        current: rotation.current().map(|p| p.display().to_string()),
        index: rotation.index(),
    };

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Folder: {}", info.folder);
    println!("Scale: {} (custom factor {})", info.scale_mode, info.custom_scale);
    if info.images.is_empty() {
        println!("No backgrounds found; rotation disabled.");
        return Ok(());
    }
    for (i, image) in info.images.iter().enumerate() {
        let marker = if i == info.index { "▶" } else { " " };
        println!("{} {}", marker, image);
    }

    Ok(())
}

/// Rotate `times` steps; only the remainder modulo the list length matters.
fn advance(rotation: &mut BackgroundRotation, times: usize) {
    if rotation.is_empty() {
        return;
    }
    for _ in 0..(times % rotation.len()) {
        rotation.rotate();
    }
}
