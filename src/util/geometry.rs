// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for mapping between the fixed logical
//! canvas space and the rectangle the canvas is actually rendered into.

use crate::models::poster::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// The rendered placement of the logical canvas inside an available area:
/// offsets from the area origin plus the rendered size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSurface {
    pub x_offset: f32,
    pub y_offset: f32,
    pub width: f32,
    pub height: f32,
}

impl FittedSurface {
    /// Scale factor from logical units to device pixels.
    ///
    /// Width-only by design: the surface is always letterboxed at the
    /// logical aspect ratio, so height scaling is proportional.
    pub fn scale(&self) -> f32 {
        self.width / LOGICAL_WIDTH
    }
}

/// Fit the 1280x720 logical canvas into the available area, preserving
/// aspect ratio and centering the result.
pub fn fit_surface(available_width: f32, available_height: f32) -> FittedSurface {
    let logical_aspect = LOGICAL_WIDTH / LOGICAL_HEIGHT;
    let available_aspect = if available_height > 0.0 {
        available_width / available_height
    } else {
        logical_aspect
    };

    let (width, height) = if available_aspect > logical_aspect {
        // Area is wider than the canvas - fit to height
        let height = available_height;
        (height * logical_aspect, height)
    } else {
        // Area is taller than the canvas - fit to width
        let width = available_width;
        (width, width / logical_aspect)
    };

    FittedSurface {
        x_offset: (available_width - width) / 2.0,
        y_offset: (available_height - height) / 2.0,
        width,
        height,
    }
}

/// Convert a logical position to device-pixel offsets from the surface origin.
pub fn logical_to_surface(x: f32, y: f32, scale: f32) -> (f32, f32) {
    (x * scale, y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_area_letterboxes_sides() {
        let surface = fit_surface(2000.0, 720.0);
        assert!((surface.height - 720.0).abs() < 0.001);
        assert!((surface.width - 1280.0).abs() < 0.001);
        assert!((surface.x_offset - 360.0).abs() < 0.001);
        assert_eq!(surface.y_offset, 0.0);
    }

    #[test]
    fn test_fit_tall_area_letterboxes_top_and_bottom() {
        let surface = fit_surface(640.0, 1000.0);
        assert!((surface.width - 640.0).abs() < 0.001);
        assert!((surface.height - 360.0).abs() < 0.001);
        assert_eq!(surface.x_offset, 0.0);
        assert!((surface.y_offset - 320.0).abs() < 0.001);
    }

    #[test]
    fn test_scale_is_width_ratio() {
        let surface = fit_surface(640.0, 1000.0);
        assert!((surface.scale() - 0.5).abs() < 0.0001);

        let native = fit_surface(1280.0, 720.0);
        assert!((native.scale() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_logical_to_surface_roundtrip() {
        let scale = 0.5;
        let (sx, sy) = logical_to_surface(400.0, 120.0, scale);
        assert!((sx - 200.0).abs() < 0.0001);
        assert!((sy - 60.0).abs() < 0.0001);
        assert!((sx / scale - 400.0).abs() < 0.0001);
        assert!((sy / scale - 120.0).abs() < 0.0001);
    }
}
