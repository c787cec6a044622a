// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each module exposes an `execute` entry point called from `main.rs`.

pub mod backgrounds;
pub mod banner;
pub mod init;
pub mod memory;
pub mod settings;
