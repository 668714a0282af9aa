// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar UI.
//!
//! This module provides the toolbar with the background and export
//! controls. Export is disabled while a render is already in flight.

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    OpenBackground,
    ExportPng,
}

/// Display the toolbar buttons.
pub fn show(ui: &mut egui::Ui, exporting: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(egui::RichText::new("Lawha").strong());

        ui.separator();

        if ui.button("🖼 Open Background…").clicked() {
            action = ToolbarAction::OpenBackground;
        }

        if ui
            .add_enabled(!exporting, egui::Button::new("💾 Export PNG…"))
            .clicked()
        {
            action = ToolbarAction::ExportPng;
        }

        if exporting {
            ui.spinner();
            ui.label("Exporting…");
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Drag a text element to position it on the poster")
                .italics()
                .weak(),
        );
    });

    action
}
