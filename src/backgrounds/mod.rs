// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Background image rotation
//!
//! The image list is read once from the backgrounds folder. A missing folder
//! simply disables rotation.

mod placement;

pub use placement::{placement, Placement, Size};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File extensions recognised as background images (compared lowercase)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Cyclic list of background images
#[derive(Debug, Clone, Default)]
pub struct BackgroundRotation {
    images: Vec<PathBuf>,
    index: usize,
}

impl BackgroundRotation {
    pub fn new(images: Vec<PathBuf>) -> Self {
        Self { images, index: 0 }
    }

    /// Collect the images directly inside `dir`, sorted by file name.
    ///
    /// A missing folder, or a path that is not a folder, yields an empty
    /// rotation. Errors while listing an existing folder are returned.
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "no backgrounds folder");
            return Ok(Self::default());
        }

        let mut images = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_image(&path) {
                images.push(path);
            }
        }
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        tracing::debug!(dir = %dir.display(), count = images.len(), "backgrounds scanned");
        Ok(Self::new(images))
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Image currently shown
    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.index).map(PathBuf::as_path)
    }

    /// Advance to the next image, wrapping at the end. No-op when empty.
    pub fn rotate(&mut self) -> Option<&Path> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
