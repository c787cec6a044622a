// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! marfil - workspace tools for the Torre de Marfil editor
//!
//! Entry point for the marfil CLI application.

use clap::Parser;

use marfil::cli::{Cli, Commands, InitArgs};
use marfil::commands;
use marfil::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on the library's file-level diagnostics; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "marfil=trace"
        } else {
            "marfil=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = cli.workspace_paths();

    // Dispatch to appropriate command
    match cli.command {
        None => {
            commands::init::execute(&InitArgs::default(), &cli.format, paths)?;
        }
        Some(Commands::Init(args)) => {
            commands::init::execute(&args, &cli.format, paths)?;
        }
        Some(Commands::Settings(args)) => {
            commands::settings::execute(args, &cli.format, &paths)?;
        }
        Some(Commands::Remember(args)) => {
            commands::memory::remember(args, &paths)?;
        }
        Some(Commands::Recall) => {
            commands::memory::recall(&cli.format, &paths)?;
        }
        Some(Commands::Backgrounds(args)) => {
            commands::backgrounds::execute(&args, &cli.format, &paths)?;
        }
        Some(Commands::Banner(args)) => {
            commands::banner::execute(&args, paths).await?;
        }
    }

    Ok(())
}
