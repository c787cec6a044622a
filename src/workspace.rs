// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace paths and the startup sequence
//!
//! All file locations are carried in [`WorkspacePaths`] and handed to
//! [`Workspace::open`]; nothing is read from globals or the environment.

use std::path::{Path, PathBuf};

use crate::backgrounds::BackgroundRotation;
use crate::config::{SettingsStore, SETTINGS_FILE_NAME};
use crate::error::Result;
use crate::memory::{MemoryLog, MEMORY_FILE_NAME};
use crate::scaffold::{self, ScaffoldReport, DEFAULT_SCAFFOLD_ROOT};

/// Locations of every file the application touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    /// Directory relative paths (including `fondos_dir`) resolve against
    pub root: PathBuf,
    pub settings_file: PathBuf,
    pub memory_file: PathBuf,
    pub scaffold_root: PathBuf,
}

impl WorkspacePaths {
    /// Default layout inside `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            settings_file: root.join(SETTINGS_FILE_NAME),
            memory_file: root.join(MEMORY_FILE_NAME),
            scaffold_root: root.join(DEFAULT_SCAFFOLD_ROOT),
            root,
        }
    }

    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = path.into();
        self
    }

    pub fn with_memory_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.memory_file = path.into();
        self
    }

    pub fn with_scaffold_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.scaffold_root = path.into();
        self
    }

    /// Resolve a possibly relative path against the workspace root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Everything loaded at startup
#[derive(Debug)]
pub struct Workspace {
    pub paths: WorkspacePaths,
    pub settings: SettingsStore,
    pub backgrounds: BackgroundRotation,
    pub memory: MemoryLog,
    /// What the scaffold pass created on this run
    pub scaffold: ScaffoldReport,
}

impl Workspace {
    /// Load settings, scan backgrounds, ensure the scaffold and open the
    /// memory log, in that order. Any failure aborts startup.
    pub fn open(paths: WorkspacePaths) -> Result<Self> {
        let settings = SettingsStore::open(&paths.settings_file)?;

        let fondos = paths.resolve(&settings.fondos_dir());
        let backgrounds = BackgroundRotation::scan(&fondos)?;

        let layout = scaffold::dark_site_layout();
        let scaffold = scaffold::ensure(&paths.scaffold_root, &layout)?;

        let memory = MemoryLog::new(&paths.memory_file);

        tracing::info!(
            root = %paths.root.display(),
            backgrounds = backgrounds.len(),
            dirs_created = scaffold.dirs_created,
            files_created = scaffold.files_created,
            "workspace ready"
        );

        Ok(Self {
            paths,
            settings,
            backgrounds,
            memory,
            scaffold,
        })
    }

    /// Rescan the backgrounds folder, e.g. after `fondos_dir` changed.
    pub fn reload_backgrounds(&mut self) -> Result<()> {
        let fondos = self.paths.resolve(&self.settings.fondos_dir());
        self.backgrounds = BackgroundRotation::scan(&fondos)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_FONDOS_DIR;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let paths = WorkspacePaths::new("/work");
        assert_eq!(paths.settings_file, PathBuf::from("/work/config.vtha"));
        assert_eq!(paths.memory_file, PathBuf::from("/work/pangetyum.vtha"));
        assert_eq!(paths.scaffold_root, PathBuf::from("/work/DARK SITE"));
    }

    #[test]
    fn test_overrides() {
        let paths = WorkspacePaths::new("/work")
            .with_settings_file("/etc/marfil.json")
            .with_scaffold_root("/work/DARK_SITE");
        assert_eq!(paths.settings_file, PathBuf::from("/etc/marfil.json"));
        assert_eq!(paths.scaffold_root, PathBuf::from("/work/DARK_SITE"));
        assert_eq!(paths.memory_file, PathBuf::from("/work/pangetyum.vtha"));
    }

    #[test]
    fn test_resolve() {
        let paths = WorkspacePaths::new("/work");
        assert_eq!(paths.resolve(Path::new("fondos")), PathBuf::from("/work/fondos"));
        assert_eq!(paths.resolve(Path::new("/imgs")), PathBuf::from("/imgs"));
    }

    #[test]
    fn test_open_fresh_workspace() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(WorkspacePaths::new(dir.path())).unwrap();

        assert!(dir.path().join("config.vtha").is_file());
        assert!(dir.path().join("DARK SITE").is_dir());
        assert!(ws.backgrounds.is_empty());
        assert_eq!(ws.scaffold.files_created, 18);
        assert!(ws.memory.read().unwrap().is_none());
    }

    #[test]
    fn test_open_twice_changes_nothing() {
        let dir = TempDir::new().unwrap();
        Workspace::open(WorkspacePaths::new(dir.path())).unwrap();
        let second = Workspace::open(WorkspacePaths::new(dir.path())).unwrap();
        assert!(second.scaffold.is_unchanged());
    }

    #[test]
    fn test_open_scans_relative_fondos_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("fondos")).unwrap();
        std::fs::write(dir.path().join("fondos/uno.png"), b"").unwrap();

        let ws = Workspace::open(WorkspacePaths::new(dir.path())).unwrap();
        assert_eq!(ws.backgrounds.len(), 1);
    }

    #[test]
    fn test_reload_backgrounds_follows_setting() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("imgs")).unwrap();
        std::fs::write(dir.path().join("imgs/a.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("imgs/b.jpeg"), b"").unwrap();

        let mut ws = Workspace::open(WorkspacePaths::new(dir.path())).unwrap();
        assert!(ws.backgrounds.is_empty());

        ws.settings.set(KEY_FONDOS_DIR, json!("imgs")).unwrap();
        ws.reload_backgrounds().unwrap();
        assert_eq!(ws.backgrounds.len(), 2);
    }

    #[test]
    fn test_open_fails_on_malformed_settings() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.vtha"), "{").unwrap();
        assert!(Workspace::open(WorkspacePaths::new(dir.path())).is_err());
        // Startup stops before the scaffold is touched.
        assert!(!dir.path().join("DARK SITE").exists());
    }
}
