// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Poster rendering and PNG export.
//!
//! Renders the composition at its native 1280x720 logical size: the
//! background image (resized to fill) or a solid backdrop, then each text
//! element shaped with cosmic-text. `Shaping::Advanced` is required for
//! correct Arabic letter joining and bidirectional layout.

use std::path::Path;

use anyhow::{Context, Result};
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use image::{imageops, Rgba, RgbaImage};

use crate::models::poster::{PosterState, TextElement, LOGICAL_HEIGHT, LOGICAL_WIDTH};

const EXPORT_WIDTH: u32 = LOGICAL_WIDTH as u32;
const EXPORT_HEIGHT: u32 = LOGICAL_HEIGHT as u32;

/// Backdrop used when no background image is set.
const BACKDROP: Rgba<u8> = Rgba([20, 24, 34, 255]);

/// Extra fonts shipped with the application, loaded on top of system fonts.
pub const FONT_ASSETS_DIR: &str = "assets/fonts";

/// Render the poster and write it to `path` as PNG.
pub fn export_png(poster: &PosterState, path: &Path) -> Result<()> {
    let rendered = render_poster(poster)?;
    rendered
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("exported poster to {}", path.display());
    Ok(())
}

/// Render the poster into an RGBA image at native logical size.
pub fn render_poster(poster: &PosterState) -> Result<RgbaImage> {
    let mut canvas = base_layer(poster);

    let mut font_system = FontSystem::new();
    if Path::new(FONT_ASSETS_DIR).is_dir() {
        font_system.db_mut().load_fonts_dir(FONT_ASSETS_DIR);
    }
    let mut swash_cache = SwashCache::new();

    for element in poster.elements.values() {
        draw_element(&mut canvas, &mut font_system, &mut swash_cache, element);
    }

    Ok(canvas)
}

/// Background image resized to fill the canvas, or the solid backdrop.
fn base_layer(poster: &PosterState) -> RgbaImage {
    if let Some(background) = &poster.background {
        let source = RgbaImage::from_raw(
            background.width,
            background.height,
            background.pixels.clone(),
        );
        if let Some(source) = source {
            return imageops::resize(
                &source,
                EXPORT_WIDTH,
                EXPORT_HEIGHT,
                imageops::FilterType::Lanczos3,
            );
        }
        log::warn!("background pixel buffer has inconsistent dimensions, using backdrop");
    }
    RgbaImage::from_pixel(EXPORT_WIDTH, EXPORT_HEIGHT, BACKDROP)
}

/// Shape one element and composite its glyphs onto the canvas.
fn draw_element(
    canvas: &mut RgbaImage,
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    element: &TextElement,
) {
    let metrics = Metrics::new(element.font_size, element.font_size * 1.3);
    let mut buffer = Buffer::new(font_system, metrics);

    // Unwrapped elements still get a layout width so shaping has a line box;
    // anything past the canvas edge is clipped by the pixel blend below.
    let wrap_width = element
        .width
        .unwrap_or(LOGICAL_WIDTH - element.x)
        .max(1.0);
    buffer.set_size(font_system, Some(wrap_width), Some(LOGICAL_HEIGHT));

    let attrs = Attrs::new().family(Family::Name(element.font.family_name()));
    buffer.set_text(font_system, &element.text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let [r, g, b, a] = element.color.rgba();
    let color = cosmic_text::Color::rgba(r, g, b, a);
    let origin_x = element.x.round() as i32;
    let origin_y = element.y.round() as i32;

    buffer.draw(font_system, swash_cache, color, |x, y, w, h, color| {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                blend_pixel(canvas, origin_x + x + dx, origin_y + y + dy, color);
            }
        }
    });
}

/// Source-over blend of one glyph pixel onto the opaque canvas.
fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: cosmic_text::Color) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let alpha = color.a() as u32;
    if alpha == 0 {
        return;
    }

    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    let src = [color.r(), color.g(), color.b()];
    for (channel, value) in pixel.0.iter_mut().take(3).zip(src) {
        *channel = ((value as u32 * alpha + *channel as u32 * (255 - alpha)) / 255) as u8;
    }
    pixel.0[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::poster::BackgroundImage;

    #[test]
    fn render_without_background_uses_backdrop_at_native_size() {
        let poster = PosterState::new();
        let rendered = render_poster(&poster).expect("render failed");

        assert_eq!(rendered.width(), 1280);
        assert_eq!(rendered.height(), 720);
        // Corners are never covered by the default element layout.
        assert_eq!(*rendered.get_pixel(0, 0), BACKDROP);
        assert_eq!(*rendered.get_pixel(1279, 719), BACKDROP);
    }

    #[test]
    fn render_scales_background_to_fill_the_canvas() {
        let mut poster = PosterState::new();
        let red = [200u8, 30, 30, 255];
        poster.background = Some(BackgroundImage {
            width: 2,
            height: 2,
            pixels: red.repeat(4),
        });

        let rendered = render_poster(&poster).expect("render failed");
        assert_eq!(rendered.width(), 1280);
        assert_eq!(rendered.height(), 720);
        assert_eq!(rendered.get_pixel(0, 0).0, red);
        assert_eq!(rendered.get_pixel(1279, 719).0, red);
    }

    #[test]
    fn inconsistent_background_buffer_falls_back_to_backdrop() {
        let mut poster = PosterState::new();
        poster.background = Some(BackgroundImage {
            width: 100,
            height: 100,
            pixels: vec![0u8; 16],
        });

        let rendered = render_poster(&poster).expect("render failed");
        assert_eq!(*rendered.get_pixel(0, 0), BACKDROP);
    }
}
