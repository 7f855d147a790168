use std::path::Path;

use egui::ColorImage;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{MandalaError, Result};
use crate::stroke::{Point, StyledSegment};

/// RGBA pixel buffer the strokes are rasterized into.
///
/// Pixels are stored non-premultiplied so the buffer can be written to PNG
/// as-is. Every mutation bumps `version`, which the renderer compares against
/// the last uploaded texture.
pub struct RasterCanvas {
    image: RgbaImage,
    version: u64,
}

impl std::fmt::Debug for RasterCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("version", &self.version)
            .finish()
    }
}

impl RasterCanvas {
    /// Creates a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Rasterizes a segment with round caps.
    ///
    /// Pixels whose centers lie within half the stroke width (plus half a pixel
    /// of anti-aliasing) are blended over the existing content. Anything outside
    /// the buffer is clipped.
    pub fn draw_segment(&mut self, styled: &StyledSegment) {
        let segment = styled.segment;
        let radius = styled.style.width.max(0.0) as f64 / 2.0;
        let reach = radius + 0.5;
        let [r, g, b, a] = styled.style.color.to_srgba_unmultiplied();

        let min_x = segment.start.x.min(segment.end.x) - reach;
        let max_x = segment.start.x.max(segment.end.x) + reach;
        let min_y = segment.start.y.min(segment.end.y) - reach;
        let max_y = segment.start.y.max(segment.end.y) + reach;

        let (Some((x0, x1)), Some((y0, y1))) = (
            clip_span(min_x, max_x, self.image.width()),
            clip_span(min_y, max_y, self.image.height()),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let coverage = (reach - segment.distance_to(center)).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let alpha = a as f32 / 255.0 * coverage as f32;
                blend_over(self.image.get_pixel_mut(x, y), [r, g, b], alpha);
            }
        }
        self.version += 1;
    }

    /// Resets every pixel to fully transparent
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.version += 1;
        log::info!("Canvas cleared");
    }

    /// Snapshot for uploading as an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    /// Writes the canvas as PNG, whatever extension `path` carries
    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| MandalaError::ExportFailure {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "Exported {}x{} drawing to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

/// Clamp a real-valued span to pixel indices `0..len`, or `None` if it misses entirely
fn clip_span(min: f64, max: f64, len: u32) -> Option<(u32, u32)> {
    if len == 0 || max < 0.0 || min >= len as f64 || min.is_nan() || max.is_nan() {
        return None;
    }
    let lo = min.floor().max(0.0) as u32;
    let hi = (max.floor() as i64).min(len as i64 - 1) as u32;
    (lo <= hi).then_some((lo, hi))
}

/// Source-over compositing of a non-premultiplied color
fn blend_over(pixel: &mut Rgba<u8>, color: [u8; 3], src_alpha: f32) {
    let dst_alpha = pixel[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return;
    }
    for channel in 0..3 {
        let src = color[channel] as f32;
        let dst = pixel[channel] as f32;
        let value = (src * src_alpha + dst * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        pixel[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}
