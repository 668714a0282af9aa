// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the poster state, the drag controller,
//! and the worker threads for background loading, export, and text
//! enhancement.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

use crate::interact::drag::{DragController, PosterHost};
use crate::io::media::LoadedImage;
use crate::models::poster::{BackgroundImage, ElementId, PosterState};
use crate::models::style::FontFamily;
use crate::net::enhance::EnhanceClient;
use crate::ui::{canvas, properties, toolbar};

/// Adapter giving the drag controller capability-style access to the
/// poster and the selection slot, without handing it the whole app.
pub struct EditorHost<'a> {
    pub poster: &'a mut PosterState,
    pub selected: &'a mut Option<ElementId>,
}

impl PosterHost for EditorHost<'_> {
    fn select_element(&mut self, id: ElementId) {
        *self.selected = Some(id);
    }

    fn element_position(&self, id: ElementId) -> Option<(f32, f32)> {
        self.poster.element(id).map(|element| (element.x, element.y))
    }

    fn update_element_position(&mut self, id: ElementId, x: f32, y: f32) {
        if let Some(element) = self.poster.element_mut(id) {
            element.x = x;
            element.y = y;
        }
    }
}

/// An in-flight text-enhancement request.
struct EnhanceTask {
    element: ElementId,
    receiver: Receiver<Result<String, String>>,
}

/// Main application state.
pub struct LawhaApp {
    /// Poster being composed
    poster: PosterState,

    /// Currently selected element
    selected: Option<ElementId>,

    /// Active drag gesture
    drag: DragController,

    /// Uploaded background texture for display
    background_texture: Option<egui::TextureHandle>,

    /// Receiver for background image decoding
    background_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Receiver for the in-flight export, if any
    export_task: Option<Receiver<Result<PathBuf, String>>>,

    /// In-flight enhancement request, if any
    enhance_task: Option<EnhanceTask>,

    /// Loading state message
    loading_message: Option<String>,

    /// Blocking notice shown to the user (errors, about box)
    notice: Option<String>,
}

impl LawhaApp {
    /// Create a new Lawha application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        install_fonts(&cc.egui_ctx);

        let mut poster = PosterState::new();
        // Optional default family override; unrecognized names fall back.
        if let Ok(name) = std::env::var("LAWHA_DEFAULT_FONT") {
            let family = FontFamily::from_name(&name);
            for element in poster.elements.values_mut() {
                element.font = family;
            }
        }

        Self {
            poster,
            selected: None,
            drag: DragController::new(),
            background_texture: None,
            background_loader: None,
            export_task: None,
            enhance_task: None,
            loading_message: None,
            notice: None,
        }
    }

    fn open_background_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "webp"])
            .pick_file()
        {
            self.load_background(path);
        }
    }

    /// Decode a background image on a worker thread.
    fn load_background(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.background_loader = Some(receiver);
        self.loading_message = Some("Loading background image...".to_string());

        std::thread::spawn(move || {
            let result = crate::io::media::load_image(&path).map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    fn export_dialog(&mut self) {
        if self.export_task.is_some() {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("poster.png")
            .save_file()
        {
            self.start_export(path);
        }
    }

    /// Render and save the poster on a worker thread.
    fn start_export(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.export_task = Some(receiver);
        let poster = self.poster.clone();

        std::thread::spawn(move || {
            let result = crate::io::export::export_png(&poster, &path)
                .map(|_| path)
                .map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    /// Send the selected element's text to the enhancement service.
    fn start_enhance(&mut self, id: ElementId) {
        if self.enhance_task.is_some() {
            return;
        }
        let Some(text) = self.poster.element(id).map(|element| element.text.clone()) else {
            return;
        };

        let (sender, receiver) = channel();
        self.enhance_task = Some(EnhanceTask {
            element: id,
            receiver,
        });

        std::thread::spawn(move || {
            let result = EnhanceClient::from_env()
                .and_then(|client| client.enhance(&text))
                .map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    /// Poll worker-thread channels for completed operations.
    fn poll_workers(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.background_loader {
            if let Ok(result) = receiver.try_recv() {
                self.background_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => {
                        let size = [loaded.width as usize, loaded.height as usize];
                        let color_image =
                            egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                        let texture = ctx.load_texture(
                            "poster_background",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );

                        self.background_texture = Some(texture);
                        self.poster.background = Some(BackgroundImage {
                            width: loaded.width,
                            height: loaded.height,
                            pixels: loaded.pixels,
                        });
                        log::info!("Background image loaded ({}x{})", loaded.width, loaded.height);
                    }
                    Err(e) => {
                        log::error!("Failed to load background: {}", e);
                        self.notice = Some(format!("Failed to load background: {e}"));
                    }
                }
            }
        }

        if let Some(receiver) = &self.export_task {
            if let Ok(result) = receiver.try_recv() {
                self.export_task = None;

                match result {
                    Ok(path) => log::info!("Poster exported to {}", path.display()),
                    Err(e) => {
                        log::error!("Export failed: {}", e);
                        self.notice = Some(format!("Export failed: {e}"));
                    }
                }
            }
        }

        if let Some(task) = &self.enhance_task {
            if let Ok(result) = task.receiver.try_recv() {
                let element_id = task.element;
                self.enhance_task = None;

                match result {
                    Ok(text) => {
                        if let Some(element) = self.poster.element_mut(element_id) {
                            log::info!("Enhanced text for {:?}", element_id);
                            element.text = text;
                        }
                    }
                    Err(e) => {
                        log::error!("Enhancement failed: {}", e);
                        self.notice = Some(format!("Enhancement failed: {e}"));
                    }
                }
            }
        }
    }
}

impl eframe::App for LawhaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers(ctx);

        // Request repaint while any worker is running (to update spinners)
        if self.loading_message.is_some()
            || self.export_task.is_some()
            || self.enhance_task.is_some()
        {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Background…").clicked() {
                        self.open_background_dialog();
                        ui.close_menu();
                    }
                    let can_export = self.export_task.is_none();
                    if ui
                        .add_enabled(can_export, egui::Button::new("Export PNG…"))
                        .clicked()
                    {
                        self.export_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.notice = Some(
                            "Lawha — a poster designer for Arabic lecture announcements."
                                .to_string(),
                        );
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            match toolbar::show(ui, self.export_task.is_some()) {
                toolbar::ToolbarAction::OpenBackground => self.open_background_dialog(),
                toolbar::ToolbarAction::ExportPng => self.export_dialog(),
                toolbar::ToolbarAction::None => {}
            }
        });

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(280.0)
            .show(ctx, |ui| {
                properties::show(
                    ui,
                    &mut self.poster,
                    self.selected,
                    self.enhance_task.is_some(),
                )
            })
            .inner;

        match properties_action {
            properties::PropertiesAction::SelectElement(id) => {
                self.selected = Some(id);
            }
            properties::PropertiesAction::EnhanceText(id) => {
                self.start_enhance(id);
            }
            properties::PropertiesAction::None => {}
        }

        // Escape deselects
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.selected = None;
        }

        // Main canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                let mut host = EditorHost {
                    poster: &mut self.poster,
                    selected: &mut self.selected,
                };
                canvas::show(ui, &mut host, &self.background_texture, &mut self.drag);
            }
        });

        // Blocking notice dialog
        if let Some(message) = self.notice.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            self.notice = None;
                        }
                    });
                });
        }
    }
}

/// Register the Arabic font families with egui.
///
/// Fonts are loaded at runtime from `assets/fonts/`. Every family in the
/// closed set is registered even when its file is missing, so element
/// layout can never hit an unknown family; missing files fall back to the
/// default proportional chain.
fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let fallback = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for family in FontFamily::ALL {
        let mut chain = fallback.clone();
        let path = std::path::Path::new(crate::io::export::FONT_ASSETS_DIR)
            .join(family.asset_file());

        match std::fs::read(&path) {
            Ok(bytes) => {
                let key = family.family_name().to_string();
                fonts
                    .font_data
                    .insert(key.clone(), egui::FontData::from_owned(bytes));
                chain.insert(0, key);
                log::info!("Registered font {}", family.family_name());
            }
            Err(e) => {
                log::warn!(
                    "Font {} not available ({}), using default fallback",
                    family.family_name(),
                    e
                );
            }
        }

        fonts
            .families
            .insert(egui::FontFamily::Name(family.family_name().into()), chain);
    }

    ctx.set_fonts(fonts);
}
