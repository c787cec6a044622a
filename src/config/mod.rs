// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for marfil
//!
//! Handles the JSON settings store and the workspace paths it lives in.

pub mod settings;

pub use settings::*;
