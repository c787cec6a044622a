// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Append-only memory log (`pangetyum.vtha`)
//!
//! Each snapshot is written as a newline, the `[RECUERDO]` tag, a space, the
//! verbatim text and a trailing newline. Nothing is ever rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default memory file name, relative to the workspace root
pub const MEMORY_FILE_NAME: &str = "pangetyum.vtha";

/// Tag that opens every block
pub const MEMORY_TAG: &str = "[RECUERDO]";

/// Handle to the memory log file
#[derive(Debug, Clone)]
pub struct MemoryLog {
    path: PathBuf,
}

impl MemoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one snapshot block.
    pub fn append(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n{} {}\n", MEMORY_TAG, content)?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "memory stored");
        Ok(())
    }

    /// Whole log text, or `None` when the file is missing or empty.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(if content.is_empty() { None } else { Some(content) })
    }

    /// Stored snapshots in the order they were written.
    pub fn entries(&self) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .map(|content| split_entries(&content))
            .unwrap_or_default())
    }
}

/// Split log text into blocks on the tag, dropping the framing newlines.
/// Text before the first tag (hand edits) is discarded.
fn split_entries(content: &str) -> Vec<String> {
    let marker = format!("\n{} ", MEMORY_TAG);
    // Treat the start of the file like a preceding newline.
    let normalized = if content.starts_with(&marker[1..]) {
        format!("\n{}", content)
    } else {
        content.to_string()
    };

    normalized
        .split(&marker)
        .skip(1)
        .map(|block| block.strip_suffix('\n').unwrap_or(block).to_string())
        .collect()
}
