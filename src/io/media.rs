// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module handles loading background image files and converting them
//! to RGBA pixel data suitable for display in egui and for export.

use std::path::Path;

use anyhow::{Context, Result};

/// A decoded image: dimensions plus RGBA8 pixel data.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file from disk and decode it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?;
    let rgba = image.to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
