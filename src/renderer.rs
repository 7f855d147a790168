use egui::{Color32, Painter, Rect, TextureHandle, TextureOptions, pos2};

use crate::canvas::RasterCanvas;

const CANVAS_TEXTURE_NAME: &str = "mandala_canvas";

/// Displays the raster canvas through an egui texture.
///
/// The texture is only re-uploaded when the canvas version moved since the
/// last frame.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next `render` will upload the canvas
    pub fn needs_upload(&self, canvas: &RasterCanvas) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(canvas.version())
    }

    /// Paints the canvas over a white background into `rect`
    pub fn render(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, canvas: &RasterCanvas) {
        if self.needs_upload(canvas) {
            let image = canvas.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture(CANVAS_TEXTURE_NAME, image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_version = Some(canvas.version());
        }

        painter.rect_filled(rect, 0.0, Color32::WHITE);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
