use egui::Color32;

use crate::error::{MandalaError, Result};
use crate::stroke::StrokeStyle;

pub const DEFAULT_CANVAS_SIZE: u32 = 500;
pub const DEFAULT_SYMMETRY: u32 = 8;
/// Range offered by the symmetry spinner. `replicate` itself accepts any count >= 1.
pub const SYMMETRY_RANGE: std::ops::RangeInclusive<u32> = 2..=24;
/// Grid mode tiles the canvas into this many cells per axis
pub const GRID_CELLS: u32 = 3;

/// Active replication policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Rotational symmetry about the canvas center
    #[default]
    Mandala,
    /// Reflection across the horizontal center line
    Mirror,
    /// Translation into every cell of a 3x3 grid
    Grid,
}

impl DrawMode {
    pub const ALL: [DrawMode; 3] = [DrawMode::Mandala, DrawMode::Mirror, DrawMode::Grid];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mandala => "Mandala",
            Self::Mirror => "Mirror",
            Self::Grid => "Grid",
        }
    }
}

/// Stroke widths offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeWidth {
    Thin,
    Medium,
    Thick,
}

impl StrokeWidth {
    pub const ALL: [StrokeWidth; 3] = [StrokeWidth::Thin, StrokeWidth::Medium, StrokeWidth::Thick];

    pub fn pixels(self) -> f32 {
        match self {
            Self::Thin => 1.0,
            Self::Medium => 5.0,
            Self::Thick => 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Medium => "Medium",
            Self::Thick => "Thick",
        }
    }

    /// The preset matching `width` exactly, if any
    pub fn from_pixels(width: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.pixels() == width)
    }
}

/// Current tool settings.
///
/// Mutated only through the setters between draw calls, each of which rejects
/// values `replicate` could not handle so that a configured value is always
/// valid when it reaches the replicator.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    mode: DrawMode,
    symmetry_count: u32,
    color: Color32,
    stroke_width: f32,
    canvas_width: u32,
    canvas_height: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            mode: DrawMode::Mandala,
            symmetry_count: DEFAULT_SYMMETRY,
            color: Color32::BLACK,
            stroke_width: StrokeWidth::Medium.pixels(),
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl DrawConfig {
    /// Default settings for a canvas of the given size
    pub fn new(canvas_width: u32, canvas_height: u32) -> Result<Self> {
        let config = Self {
            canvas_width,
            canvas_height,
            ..Self::default()
        };
        config.validate_canvas()?;
        Ok(config)
    }

    /// Assemble a config without validating it. Default color and stroke width;
    /// `replicate` re-checks whatever the mode depends on.
    #[doc(hidden)]
    pub fn unchecked(
        mode: DrawMode,
        symmetry_count: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        Self {
            mode,
            symmetry_count,
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn symmetry_count(&self) -> u32 {
        self.symmetry_count
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.stroke_width)
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode != mode {
            log::info!("Drawing mode changed: {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(MandalaError::invalid_config(format!(
                "stroke width must be positive, got {width}"
            )));
        }
        log::debug!("Stroke width set to {width}");
        self.stroke_width = width;
        Ok(())
    }

    /// Set the rotational symmetry count.
    ///
    /// Outside Mandala mode this is a no-op: the count is only ever changed
    /// while Mandala is the active mode.
    pub fn set_symmetry(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(MandalaError::invalid_config("symmetry count must be at least 1"));
        }
        if self.mode != DrawMode::Mandala {
            log::debug!(
                "Ignoring symmetry {count} while in {} mode",
                self.mode.label()
            );
            return Ok(());
        }
        self.symmetry_count = count;
        Ok(())
    }

    /// Check every rule the replicator enforces for the active mode
    pub fn validate(&self) -> Result<()> {
        self.validate_canvas()?;
        match self.mode {
            DrawMode::Mandala if self.symmetry_count == 0 => Err(MandalaError::invalid_config(
                "symmetry count must be at least 1",
            )),
            DrawMode::Grid
                if self.canvas_width < GRID_CELLS || self.canvas_height < GRID_CELLS =>
            {
                Err(MandalaError::invalid_config(format!(
                    "canvas {}x{} is too small for a {GRID_CELLS}x{GRID_CELLS} grid",
                    self.canvas_width, self.canvas_height
                )))
            }
            _ => Ok(()),
        }
    }

    fn validate_canvas(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(MandalaError::invalid_config(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }
}
