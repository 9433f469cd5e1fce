use thiserror::Error;

/// Errors surfaced by the sketchpad's fallible actions.
///
/// Drawing itself never fails; only parsing user-supplied values,
/// loading configuration and exporting the canvas can.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Unknown tool id: {0}")]
    UnknownTool(String),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Brush width must be a positive number of pixels")]
    ZeroBrushWidth,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("Download failed: {0}")]
    Download(String),
}

/// Result type for fallible sketchpad operations
pub type SketchResult<T> = Result<T, SketchError>;
