// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Memory log commands (`remember`, `recall`)

use std::io::Read;

use crate::cli::args::{OutputFormat, RememberArgs};
use crate::error::Result;
use crate::memory::MemoryLog;
use crate::workspace::WorkspacePaths;

/// Append a snapshot from the argument, a file, or stdin.
pub fn remember(args: RememberArgs, paths: &WorkspacePaths) -> Result<()> {
    let content = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(file)) => std::fs::read_to_string(file)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if content.trim().is_empty() {
        tracing::warn!("storing an empty snapshot");
    }

    let log = MemoryLog::new(&paths.memory_file);
    log.append(&content)?;
    println!("Stored in {}", log.path().display());
    Ok(())
}

/// Print every stored snapshot.
pub fn recall(format: &OutputFormat, paths: &WorkspacePaths) -> Result<()> {
    let log = MemoryLog::new(&paths.memory_file);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&log.entries()?)?);
        }
        OutputFormat::Text => match log.read()? {
            Some(content) => {
                println!("🧬 RECUERDOS CARGADOS:");
                print!("{}", content);
            }
            None => println!("No memories stored."),
        },
    }

    Ok(())
}
