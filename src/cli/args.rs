// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for marfil.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::workspace::WorkspacePaths;

/// marfil - settings, memory log and scaffold for the Torre de Marfil editor
#[derive(Parser, Debug)]
#[command(name = "marfil")]
#[command(version, about = "Workspace tools for the Torre de Marfil editor")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace directory (defaults to current)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Settings file path (defaults to <workspace>/config.vtha)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Workspace paths selected by the global flags
    pub fn workspace_paths(&self) -> WorkspacePaths {
        let root = self
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let paths = WorkspacePaths::new(root);
        match &self.config {
            Some(config) => paths.with_settings_file(config),
            None => paths,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the DARK SITE scaffold (default when no command given)
    Init(InitArgs),

    /// Show or change settings
    #[command(alias = "config")]
    Settings(SettingsArgs),

    /// Append a snapshot to the memory log
    Remember(RememberArgs),

    /// Print the memory log
    Recall,

    /// List background images
    #[command(alias = "fondos")]
    Backgrounds(BackgroundsArgs),

    /// Show the slogan with the cycling color
    Banner(BannerArgs),
}

/// Arguments for the init subcommand
#[derive(clap::Args, Debug, Default)]
pub struct InitArgs {
    /// List the scaffold tree after creating it
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "bg_scale_mode", "accent_color")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Arguments for the remember subcommand
#[derive(clap::Args, Debug)]
pub struct RememberArgs {
    /// Text to store (read from stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for the backgrounds subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BackgroundsArgs {
    /// Report which image is shown after this many rotations
    #[arg(long, default_value_t = 0)]
    pub rotate: usize,
}

/// Arguments for the banner subcommand
#[derive(clap::Args, Debug)]
pub struct BannerArgs {
    /// Number of color ticks to show before exiting
    #[arg(long, default_value_t = 25)]
    pub ticks: u32,
}

/// Output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
