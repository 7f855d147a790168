use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring, replicating or exporting a drawing
#[derive(Debug, Error)]
pub enum MandalaError {
    /// Degenerate geometry: zero canvas dimension, empty grid cell,
    /// zero symmetry count or a non-positive stroke width
    #[error("Invalid drawing configuration: {0}")]
    InvalidConfig(String),

    /// The image writer failed while saving the canvas
    #[error("Failed to export drawing to {}: {source}", path.display())]
    ExportFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for drawing operations
pub type Result<T> = std::result::Result<T, MandalaError>;

impl MandalaError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
