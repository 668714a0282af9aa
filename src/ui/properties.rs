// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Element properties panel.
//!
//! Lists the poster elements for selection and edits the selected
//! element's text content and style attributes.

use crate::models::poster::{ElementId, PosterState, LOGICAL_WIDTH};
use crate::models::style::{FontFamily, SwatchColor};

/// Result of properties panel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesAction {
    None,
    SelectElement(ElementId),
    EnhanceText(ElementId),
}

/// Display the properties panel.
pub fn show(
    ui: &mut egui::Ui,
    poster: &mut PosterState,
    selected: Option<ElementId>,
    enhance_busy: bool,
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Elements");
    ui.add_space(4.0);

    for id in ElementId::ALL {
        let label = poster
            .element(id)
            .map(|element| element.label.clone())
            .unwrap_or_else(|| id.label().to_string());
        if ui.selectable_label(selected == Some(id), label).clicked() {
            action = PropertiesAction::SelectElement(id);
        }
    }

    ui.separator();

    let Some(element) = selected.and_then(|id| poster.element_mut(id)) else {
        ui.label(
            egui::RichText::new("Select an element to edit its text and style")
                .italics()
                .weak(),
        );
        return action;
    };

    ui.heading(&element.label);
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(&mut element.text)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Size");
        ui.add(egui::Slider::new(&mut element.font_size, 12.0..=160.0).suffix(" pt"));
    });

    ui.horizontal(|ui| {
        ui.label("Font");
        egui::ComboBox::from_id_source("element_font")
            .selected_text(element.font.family_name())
            .show_ui(ui, |ui| {
                for family in FontFamily::ALL {
                    ui.selectable_value(&mut element.font, family, family.family_name());
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("Color");
        for color in SwatchColor::ALL {
            let [r, g, b, _] = color.rgba();
            let stroke = if element.color == color {
                egui::Stroke::new(2.0, egui::Color32::WHITE)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            let swatch = egui::Button::new("")
                .fill(egui::Color32::from_rgb(r, g, b))
                .stroke(stroke)
                .min_size(egui::vec2(20.0, 20.0));
            if ui.add(swatch).on_hover_text(color.name()).clicked() {
                element.color = color;
            }
        }
    });

    ui.horizontal(|ui| {
        let mut wrapped = element.width.is_some();
        if ui.checkbox(&mut wrapped, "Wrap width").changed() {
            element.width = wrapped.then_some(600.0);
        }
        if let Some(width) = element.width.as_mut() {
            ui.add(egui::Slider::new(width, 120.0..=LOGICAL_WIDTH));
        }
    });

    ui.label(
        egui::RichText::new(format!("Position: {:.0}, {:.0}", element.x, element.y)).weak(),
    );

    ui.separator();

    let element_id = element.id;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!enhance_busy, egui::Button::new("✨ Enhance wording"))
            .clicked()
        {
            action = PropertiesAction::EnhanceText(element_id);
        }
        if enhance_busy {
            ui.spinner();
            ui.label("Asking the writing assistant…");
        }
    });

    action
}
