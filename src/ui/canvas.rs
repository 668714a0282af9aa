// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Poster canvas.
//!
//! Renders the 1280x720 logical canvas aspect-fitted into the available
//! panel space and forwards pointer events to the drag controller. Element
//! positions are stored in logical units; everything drawn here is scaled
//! by the rendered-width ratio.

use crate::app::EditorHost;
use crate::interact::drag::{DevicePoint, DragController};
use crate::models::style::{FontFamily, SwatchColor};
use crate::util::geometry;

/// Display the poster canvas and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    host: &mut EditorHost<'_>,
    background: &Option<egui::TextureHandle>,
    drag: &mut DragController,
) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let available = ui.available_size();
        let fitted = geometry::fit_surface(available.x, available.y);
        let origin = ui.min_rect().min + egui::vec2(fitted.x_offset, fitted.y_offset);
        let surface_rect =
            egui::Rect::from_min_size(origin, egui::vec2(fitted.width, fitted.height));
        let scale = fitted.scale();

        let painter = ui.painter_at(surface_rect);

        // Background layer
        if let Some(texture) = background {
            painter.image(
                texture.id(),
                surface_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_filled(surface_rect, 0.0, egui::Color32::from_rgb(20, 24, 34));
            painter.text(
                surface_rect.center_bottom() - egui::vec2(0.0, 24.0),
                egui::Align2::CENTER_CENTER,
                "File → Open Background…",
                egui::FontId::proportional(13.0),
                egui::Color32::from_gray(110),
            );
        }

        // Text elements, laid out at the rendered scale
        let mut hit_rects: Vec<(crate::models::poster::ElementId, egui::Rect)> = Vec::new();
        for element in host.poster.elements.values() {
            let font_id = egui::FontId::new(
                (element.font_size * scale).max(1.0),
                egui_family(element.font),
            );
            let color = color32(element.color);
            let wrap_width = element.width.map(|w| w * scale).unwrap_or(f32::INFINITY);

            let galley = painter.layout(element.text.clone(), font_id, color, wrap_width);
            let (sx, sy) = geometry::logical_to_surface(element.x, element.y, scale);
            let pos = origin + egui::vec2(sx, sy);
            painter.galley(pos, galley.clone(), color);

            hit_rects.push((element.id, egui::Rect::from_min_size(pos, galley.size())));
        }

        // Pointer handling: press starts (or takes over) a drag, moves are
        // converted to logical deltas, and a release anywhere ends it.
        let pointer = ui.ctx().input(|i| i.pointer.clone());

        for (id, rect) in &hit_rects {
            let response = ui.interact(
                *rect,
                ui.id().with("poster-element").with(*id),
                egui::Sense::click_and_drag(),
            );
            if response.is_pointer_button_down_on() && pointer.any_pressed() {
                if let Some(pos) = pointer.interact_pos() {
                    drag.pointer_down(host, *id, DevicePoint::new(pos.x, pos.y));
                }
            }
        }

        if drag.is_dragging() {
            if pointer.delta() != egui::Vec2::ZERO {
                if let Some(pos) = pointer.latest_pos() {
                    drag.pointer_moved(
                        host,
                        DevicePoint::new(pos.x, pos.y),
                        Some(surface_rect.width()),
                    );
                }
            }
            // Document-level fallback: any release ends the drag, even
            // outside the element or the canvas.
            if pointer.any_released() {
                drag.pointer_up();
            }
        }

        // Selection and hover outlines on top
        let overlay = ui.painter();
        for (id, rect) in &hit_rects {
            if *host.selected == Some(*id) {
                overlay.rect_stroke(
                    rect.expand(4.0),
                    4.0,
                    egui::Stroke::new(1.8, egui::Color32::from_rgb(77, 141, 255)),
                );
            } else if ui.rect_contains_pointer(*rect) {
                overlay.rect_stroke(
                    rect.expand(4.0),
                    4.0,
                    egui::Stroke::new(1.0, egui::Color32::from_white_alpha(60)),
                );
            }
        }
    });

    // Status line
    ui.separator();
    ui.horizontal(|ui| {
        match *host.selected {
            Some(id) => {
                let label = host
                    .poster
                    .element(id)
                    .map(|element| element.label.as_str())
                    .unwrap_or("?");
                ui.label(format!("Selected: {label}"));
            }
            None => {
                ui.label("No element selected");
            }
        }
        ui.separator();
        if host.poster.background.is_some() {
            ui.label("Background loaded");
        } else {
            ui.label("No background");
        }
    });
}

/// Map a poster font family onto the registered egui family.
fn egui_family(family: FontFamily) -> egui::FontFamily {
    egui::FontFamily::Name(family.family_name().into())
}

fn color32(color: SwatchColor) -> egui::Color32 {
    let [r, g, b, a] = color.rgba();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
