use std::path::{Path, PathBuf};

use egui::{Color32, LayerId, Rect};

use crate::canvas::RasterCanvas;
use crate::config::{DrawConfig, DrawMode, StrokeWidth};
use crate::error::Result;
use crate::input::{InputHandler, StrokeTracker};
use crate::panels;
use crate::renderer::Renderer;
use crate::replicator::replicate;
use crate::stroke::Segment;

pub const DEFAULT_EXPORT_PATH: &str = "mandala.png";

/// Pending "save as" dialog
#[derive(Debug, Clone, PartialEq)]
pub struct SaveDialog {
    pub path: String,
}

/// Application state: the tool configuration, the canvas it paints into and
/// the toolbar widget values.
#[derive(Debug)]
pub struct MandalaApp {
    config: DrawConfig,
    canvas: RasterCanvas,
    renderer: Renderer,
    input: InputHandler,
    tracker: StrokeTracker,
    stroke_width: StrokeWidth,
    /// Value shown by the symmetry spinner; can differ from the config outside Mandala mode
    symmetry_input: u32,
    save_dialog: Option<SaveDialog>,
    last_export_path: PathBuf,
    error_message: Option<String>,
}

impl Default for MandalaApp {
    fn default() -> Self {
        Self::with_config(DrawConfig::default())
    }
}

impl MandalaApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Starting Mandala Maker");
        Self::default()
    }

    pub fn with_config(config: DrawConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("Starting with a configuration strokes will be skipped under: {err}");
        }
        let canvas = RasterCanvas::new(config.canvas_width(), config.canvas_height());
        let stroke_width = StrokeWidth::from_pixels(config.stroke_width()).unwrap_or(StrokeWidth::Medium);
        let symmetry_input = config.symmetry_count();
        Self {
            config,
            canvas,
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
            tracker: StrokeTracker::new(),
            stroke_width,
            symmetry_input,
            save_dialog: None,
            last_export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            error_message: None,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn canvas(&self) -> &RasterCanvas {
        &self.canvas
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn stroke_width(&self) -> StrokeWidth {
        self.stroke_width
    }

    pub fn symmetry_input(&self) -> u32 {
        self.symmetry_input
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn save_dialog(&self) -> Option<&SaveDialog> {
        self.save_dialog.as_ref()
    }

    pub fn set_color(&mut self, color: Color32) {
        self.config.set_color(color);
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.config.set_mode(mode);
    }

    pub fn set_stroke_width(&mut self, width: StrokeWidth) {
        match self.config.set_stroke_width(width.pixels()) {
            Ok(()) => self.stroke_width = width,
            Err(err) => log::warn!("{err}"),
        }
    }

    /// Spinner callback. The config ignores the value outside Mandala mode.
    pub fn set_symmetry(&mut self, count: u32) {
        self.symmetry_input = count;
        if let Err(err) = self.config.set_symmetry(count) {
            log::warn!("{err}");
        }
    }

    /// Replicate one drag segment under the current mode and rasterize every copy
    pub fn apply_segment(&mut self, segment: Segment) {
        match replicate(segment, &self.config) {
            Ok(segments) => {
                for styled in &segments {
                    self.canvas.draw_segment(styled);
                }
            }
            Err(err) => log::warn!("Skipping segment: {err}"),
        }
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Write the canvas to `path`; on failure the message is kept for the error dialog
    pub fn export(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.canvas.export_png(path) {
            Ok(()) => {
                self.last_export_path = path.to_path_buf();
                Ok(())
            }
            Err(err) => {
                log::error!("{err}");
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn open_save_dialog(&mut self) {
        self.save_dialog = Some(SaveDialog {
            path: self.last_export_path.display().to_string(),
        });
    }

    pub fn save_dialog_mut(&mut self) -> Option<&mut SaveDialog> {
        self.save_dialog.as_mut()
    }

    pub fn close_save_dialog(&mut self) {
        self.save_dialog = None;
    }

    /// Export to the path typed into the save dialog and close it
    pub fn confirm_save_dialog(&mut self) {
        if let Some(dialog) = self.save_dialog.take() {
            let path = dialog.path.trim().to_owned();
            // The error is already recorded for the error dialog.
            let _ = self.export(path);
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Screen rectangle the canvas occupied in the last frame that routed input
    pub fn canvas_rect(&self) -> Rect {
        self.input.canvas_rect()
    }

    /// Route this frame's pointer input through the stroke tracker. `canvas_layer`
    /// is the layer the canvas is painted on; presses where another layer is on
    /// top (popups, windows) do not start a stroke.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, canvas_layer: LayerId) {
        self.input.set_canvas(canvas_rect, canvas_layer);
        for event in self.input.process_input(ctx) {
            if let Some(segment) = self.tracker.handle_event(&event, &self.input) {
                self.apply_segment(segment);
            }
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect) {
        self.renderer.render(ctx, painter, rect, &self.canvas);
    }
}

impl eframe::App for MandalaApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::save_dialog(self, ctx);
        panels::error_dialog(self, ctx);
    }
}
