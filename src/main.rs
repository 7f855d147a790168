#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use mandala_maker::config::DEFAULT_CANVAS_SIZE;

/// Room for the toolbar above the canvas
const TOOLBAR_HEIGHT: f32 = 32.0;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let canvas = DEFAULT_CANVAS_SIZE as f32;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mandala Maker")
            .with_inner_size([canvas, canvas + TOOLBAR_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Mandala Maker",
        native_options,
        Box::new(|cc| Ok(Box::new(mandala_maker::MandalaApp::new(cc)))),
    )
}
