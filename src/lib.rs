// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! marfil - workspace tools for the Torre de Marfil editor.
//!
//! This crate holds everything the editor does outside its window:
//! - `config`: JSON settings store (`config.vtha`) with defaults and typed accessors
//! - `scaffold`: the idempotent `DARK SITE` memory folder layout
//! - `memory`: the append-only `[RECUERDO]` log (`pangetyum.vtha`)
//! - `backgrounds`: background image rotation and placement
//! - `theme`: slogan color cycling
//! - `workspace`: explicit paths and the startup sequence
//! - `cli`, `commands`: the `marfil` terminal front end

pub mod backgrounds;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod memory;
pub mod scaffold;
pub mod theme;
pub mod workspace;

pub use error::{MarfilError, Result};
