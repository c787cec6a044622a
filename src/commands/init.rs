// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace initialization command

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{InitArgs, OutputFormat};
use crate::error::Result;
use crate::workspace::{Workspace, WorkspacePaths};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitSummary {
    root: String,
    settings_file: String,
    scaffold_root: String,
    dirs_created: usize,
    files_created: usize,
    backgrounds: usize,
    memories: usize,
}

/// Execute the init command
pub fn execute(args: &InitArgs, format: &OutputFormat, paths: WorkspacePaths) -> Result<()> {
    let ws = Workspace::open(paths)?;
    let memories = ws.memory.entries()?.len();

    if matches!(format, OutputFormat::Json) {
        let summary = InitSummary {
            root: ws.paths.root.display().to_string(),
            settings_file: ws.paths.settings_file.display().to_string(),
            scaffold_root: ws.paths.scaffold_root.display().to_string(),
            dirs_created: ws.scaffold.dirs_created,
            files_created: ws.scaffold.files_created,
            backgrounds: ws.backgrounds.len(),
            memories,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if ws.scaffold.is_unchanged() {
        println!("Scaffold up to date: {}", ws.paths.scaffold_root.display());
    } else {
        println!(
            "Scaffold ready: {} ({} folders, {} files created)",
            ws.paths.scaffold_root.display(),
            ws.scaffold.dirs_created,
            ws.scaffold.files_created
        );
    }
    println!("Settings: {}", ws.paths.settings_file.display());
    println!("Backgrounds: {}", ws.backgrounds.len());
    println!("Memories: {}", memories);

    if args.show {
        println!();
        for line in tree_lines(&ws.paths.scaffold_root) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Indented listing of everything under `root`, folders before files.
pub fn tree_lines(root: &Path) -> Vec<String> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .sort_by(|a, b| {
            b.file_type()
                .is_dir()
                .cmp(&a.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| {
            let indent = "  ".repeat(entry.depth() - 1);
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                format!("{}{}/", indent, name)
            } else {
                format!("{}{}", indent, name)
            }
        })
        .collect()
}
