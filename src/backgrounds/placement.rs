// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Where a background lands inside the window for each scale mode.

use crate::config::ScaleMode;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Scaled image size and its top-left corner, centered on the target.
/// Offsets are negative when the image overflows the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub size: Size,
    pub x: i64,
    pub y: i64,
}

/// Compute the placement of `image` inside `target`.
pub fn placement(image: Size, target: Size, mode: ScaleMode, factor: f64) -> Placement {
    let size = if image.is_empty() {
        Size::new(0, 0)
    } else {
        match mode {
            ScaleMode::Fill => target,
            ScaleMode::Fit => keep_aspect(image, target, false),
            ScaleMode::Expand => keep_aspect(image, target, true),
            ScaleMode::Custom => Size::new(
                scale_dimension(image.width, factor),
                scale_dimension(image.height, factor),
            ),
        }
    };

    Placement {
        size,
        x: centered(target.width, size.width),
        y: centered(target.height, size.height),
    }
}

/// Scale `image` to `target` keeping its aspect ratio, either fitting inside
/// or covering it.
fn keep_aspect(image: Size, target: Size, cover: bool) -> Size {
    let (iw, ih) = (image.width as u64, image.height as u64);
    let (tw, th) = (target.width as u64, target.height as u64);

    // Width if the height were matched exactly.
    let width_at_target_height = th * iw / ih;
    let use_height = if cover {
        width_at_target_height >= tw
    } else {
        width_at_target_height <= tw
    };

    if use_height {
        Size::new(clamp_u32(width_at_target_height), target.height)
    } else {
        Size::new(target.width, clamp_u32(tw * ih / iw))
    }
}

fn scale_dimension(value: u32, factor: f64) -> u32 {
    if !factor.is_finite() || factor <= 0.0 {
        return value;
    }
    let scaled = (value as f64 * factor).round();
    if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        scaled as u32
    }
}

fn centered(outer: u32, inner: u32) -> i64 {
    (outer as i64 - inner as i64) / 2
}

fn clamp_u32(value: u64) -> u32 {
    value.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size::new(1200, 800);

    #[test]
    fn test_fill_ignores_aspect() {
        let p = placement(Size::new(100, 100), WINDOW, ScaleMode::Fill, 1.0);
        assert_eq!(p.size, WINDOW);
        assert_eq!((p.x, p.y), (0, 0));
    }

    #[test]
    fn test_fit_letterboxes() {
        let p = placement(Size::new(400, 400), WINDOW, ScaleMode::Fit, 1.0);
        assert_eq!(p.size, Size::new(800, 800));
        assert_eq!((p.x, p.y), (200, 0));
    }

    #[test]
    fn test_fit_wide_image() {
        let p = placement(Size::new(1600, 400), WINDOW, ScaleMode::Fit, 1.0);
        assert_eq!(p.size, Size::new(1200, 300));
        assert_eq!((p.x, p.y), (0, 250));
    }

    #[test]
    fn test_expand_covers_and_crops() {
        let p = placement(Size::new(400, 400), WINDOW, ScaleMode::Expand, 1.0);
        assert_eq!(p.size, Size::new(1200, 1200));
        assert_eq!((p.x, p.y), (0, -200));
    }

    #[test]
    fn test_custom_uses_factor() {
        let p = placement(Size::new(300, 200), WINDOW, ScaleMode::Custom, 2.5);
        assert_eq!(p.size, Size::new(750, 500));
        assert_eq!((p.x, p.y), (225, 150));
    }

    #[test]
    fn test_custom_ignores_invalid_factor() {
        let p = placement(Size::new(300, 200), WINDOW, ScaleMode::Custom, 0.0);
        assert_eq!(p.size, Size::new(300, 200));
    }

    #[test]
    fn test_empty_image() {
        let p = placement(Size::new(0, 50), WINDOW, ScaleMode::Expand, 1.0);
        assert_eq!(p.size, Size::new(0, 0));
        assert_eq!((p.x, p.y), (600, 400));
    }
}
