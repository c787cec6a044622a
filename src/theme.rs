// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Slogan colors and the cosmetic timer intervals.

use std::fmt;
use std::time::Duration;

/// Banner text shown under the editor
pub const SLOGAN: &str = "🕷🕸👁‍🗨¡HOY CONSTRUIMOS EL IMPERIO!💜🖤🔥🚀";

/// How often the slogan color advances
pub const COLOR_TICK: Duration = Duration::from_millis(200);

/// How often the background image rotates
pub const BACKGROUND_TICK: Duration = Duration::from_secs(20);

/// Hue advance per color tick, in degrees
pub const DEFAULT_HUE_STEP: u32 = 5;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an HSV color (hue in degrees, saturation and value in 0..=255)
    /// to RGB. Hue wraps at 360. Channels are computed in floating point and
    /// rounded, so half steps land on the upper value (hue 30 is `#ff8000`).
    pub fn from_hsv(hue: u32, saturation: u8, value: u8) -> Self {
        if saturation == 0 {
            return Self::new(value, value, value);
        }

        let h = (hue % 360) as f64 / 60.0;
        let s = saturation as f64 / 255.0;
        let v = value as f64 / 255.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case insensitive).
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("expected a #rrggbb color, got {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(format!("expected a #rrggbb color, got {}", s)),
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Endless walk around the color wheel at full saturation and value.
#[derive(Debug, Clone)]
pub struct HueCycle {
    hue: u32,
    step: u32,
}

impl HueCycle {
    pub fn new(step: u32) -> Self {
        Self { hue: 0, step }
    }

    /// Hue in degrees, always below 360
    pub fn hue(&self) -> u32 {
        self.hue
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_hsv(self.hue, 255, 255)
    }

    /// Advance one step and return the new color.
    pub fn tick(&mut self) -> Rgb {
        self.hue = (self.hue + self.step) % 360;
        self.color()
    }
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(DEFAULT_HUE_STEP)
    }
}
