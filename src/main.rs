// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lawha (لوحة) - Arabic lecture announcement poster designer
//!
//! A cross-platform desktop application for composing lecture announcement
//! posters: position and style Arabic text elements over a background
//! image and export the composition as a PNG.

mod app;
mod interact;
mod io;
mod models;
mod net;
mod ui;
mod util;

use anyhow::Result;
use app::LawhaApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Lawha - Lecture Announcement Poster Designer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Lawha",
        options,
        Box::new(|cc| Ok(Box::new(LawhaApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
