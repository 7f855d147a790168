#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod replicator;
pub mod stroke;

pub use app::MandalaApp;
pub use canvas::RasterCanvas;
pub use config::{DrawConfig, DrawMode, StrokeWidth};
pub use error::{MandalaError, Result};
pub use input::{InputEvent, InputHandler, InputLocation, StrokeTracker};
pub use renderer::Renderer;
pub use replicator::replicate;
pub use stroke::{Point, Segment, StrokeStyle, StyledSegment};
