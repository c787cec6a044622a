// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! On-disk memory scaffold
//!
//! The layout is a flat list of `(relative path, kind)` entries. [`ensure`]
//! walks it once, creating missing directories recursively and touching
//! missing files. Existing directories and files are never modified, so
//! applying the layout any number of times leaves the same tree.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{MarfilError, Result};

/// Default scaffold root, relative to the workspace
pub const DEFAULT_SCAFFOLD_ROOT: &str = "DARK SITE";

const BDK_ROOT: &str = "MOSCÚ PANDA XL.BDK";
const VTHA_ROOT: &str = "MISIFÚS FUMADOX.VTHA";
const FAIRY_ROOT: &str = "FAIRY BLACK";
const LOGS_DIR: &str = "LOGS_DIARIOS";
const RULES_DIR: &str = "DIRECTRICES_Y_REGLAS_OPERATIVAS";

/// Shared files present in every persona's VTHA slot
const VTHA_SHARED_FILES: [&str; 2] = ["PANGETYUM.VTHA", "MEMORIA ETERNA.VTHA"];

const FAIRY_FOLDERS: [&str; 5] = [
    "IMAGENES_DE_FONDO",
    "CONFIGURACIONES_GENERALES",
    "RUTAS_LINKS",
    "GALERIAS",
    "DOCS_GENERALES",
];

/// A model persona with its two slot folders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    /// Upper-case name used in file names
    pub name: &'static str,
    /// Folder under the BDK root
    pub bdk_slot: &'static str,
    /// Folder under the VTHA root
    pub vtha_slot: &'static str,
}

pub const PERSONAS: [Persona; 3] = [
    Persona {
        name: "GPT",
        bdk_slot: "VS-1",
        vtha_slot: "VS00-1",
    },
    Persona {
        name: "GEMINI",
        bdk_slot: "M1",
        vtha_slot: "M1",
    },
    Persona {
        name: "GROK",
        bdk_slot: "CY1",
        vtha_slot: "CY1",
    },
];

/// What a scaffold entry is on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One path in the scaffold, relative to its root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ScaffoldEntry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    /// Whether the entry already exists under `base` with the right kind
    pub fn exists_in(&self, base: &Path) -> bool {
        let full = base.join(&self.path);
        match self.kind {
            EntryKind::Dir => full.is_dir(),
            EntryKind::File => full.is_file(),
        }
    }
}

/// The full memory layout for every persona.
pub fn dark_site_layout() -> Vec<ScaffoldEntry> {
    let mut entries = Vec::new();

    let bdk = Path::new(BDK_ROOT);
    for persona in &PERSONAS {
        let slot = bdk.join(persona.bdk_slot);
        entries.push(ScaffoldEntry::dir(&slot));
        for n in 1..=2 {
            entries.push(ScaffoldEntry::file(
                slot.join(format!("{}_BDK_{}.BDK", persona.name, n)),
            ));
        }
    }

    let vtha = Path::new(VTHA_ROOT);
    for persona in &PERSONAS {
        let slot = vtha.join(persona.vtha_slot);
        entries.push(ScaffoldEntry::dir(&slot));
        for file in VTHA_SHARED_FILES {
            entries.push(ScaffoldEntry::file(slot.join(file)));
        }
        entries.push(ScaffoldEntry::dir(slot.join(LOGS_DIR)));
        entries.push(ScaffoldEntry::file(
            slot.join(LOGS_DIR)
                .join(format!("LOG_{}_DIARIO.VTHA", persona.name)),
        ));
        entries.push(ScaffoldEntry::dir(slot.join(RULES_DIR)));
        entries.push(ScaffoldEntry::file(
            slot.join(RULES_DIR)
                .join(format!("REGLAS_{}.VTHA", persona.name)),
        ));
    }

    let fairy = Path::new(FAIRY_ROOT);
    for folder in FAIRY_FOLDERS {
        entries.push(ScaffoldEntry::dir(fairy.join(folder)));
    }

    entries
}

/// What a call to [`ensure`] created. `dirs_created` counts every directory
/// level that did not exist before, including implicit parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub dirs_created: usize,
    pub files_created: usize,
}

impl ScaffoldReport {
    /// True when nothing had to be created
    pub fn is_unchanged(&self) -> bool {
        self.dirs_created == 0 && self.files_created == 0
    }
}

/// Make sure every entry exists under `base`.
///
/// Directories are created recursively; files are opened create+append so
/// existing content is never truncated. The first I/O failure is returned.
pub fn ensure(base: &Path, entries: &[ScaffoldEntry]) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    report.dirs_created += create_dir(base)?;

    for entry in entries {
        let full = base.join(&entry.path);
        match entry.kind {
            EntryKind::Dir => {
                let created = create_dir(&full)?;
                if created > 0 {
                    tracing::debug!(path = %full.display(), "created scaffold directory");
                }
                report.dirs_created += created;
            }
            EntryKind::File => {
                if let Some(parent) = full.parent() {
                    report.dirs_created += create_dir(parent)?;
                }
                let existed = full.exists();
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&full)
                    .map_err(|source| MarfilError::Scaffold {
                        path: full.clone(),
                        source,
                    })?;
                if !existed {
                    tracing::debug!(path = %full.display(), "created scaffold file");
                    report.files_created += 1;
                }
            }
        }
    }

    Ok(report)
}

/// Entries that do not exist under `base`
pub fn missing<'a>(base: &Path, entries: &'a [ScaffoldEntry]) -> Vec<&'a ScaffoldEntry> {
    entries.iter().filter(|e| !e.exists_in(base)).collect()
}

/// Create `path` and any missing ancestors, returning how many levels were
/// actually created.
fn create_dir(path: &Path) -> Result<usize> {
    let missing = path
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.is_dir())
        .count();
    if missing == 0 {
        return Ok(0);
    }
    std::fs::create_dir_all(path).map_err(|source| MarfilError::Scaffold {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(missing)
}
