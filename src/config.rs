use crate::error::{SketchError, SketchResult};
use crate::palette::parse_hex_color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Startup configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Active color at startup, as `#rgb` or `#rrggbb`
    pub default_color: String,
    /// Brush width selected at startup, in pixels
    pub default_brush_width: u32,
    /// Lower bound of the size slider
    pub min_brush_width: u32,
    /// Upper bound of the size slider
    pub max_brush_width: u32,
    /// JPEG quality used for exports (1-100)
    pub jpeg_quality: u8,
    /// Directory exported images are written to (native only)
    pub export_dir: PathBuf,
    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            default_color: "#000".to_owned(),
            default_brush_width: 5,
            min_brush_width: 1,
            max_brush_width: 30,
            jpeg_quality: 90,
            export_dir: PathBuf::from("."),
            window_size: [1000.0, 700.0],
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SketchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring configuration {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        parse_hex_color(&self.default_color)?;
        if self.min_brush_width == 0 {
            return Err(SketchError::InvalidConfig(
                "min_brush_width must be at least 1".to_owned(),
            ));
        }
        if self.min_brush_width > self.max_brush_width {
            return Err(SketchError::InvalidConfig(format!(
                "min_brush_width {} exceeds max_brush_width {}",
                self.min_brush_width, self.max_brush_width
            )));
        }
        if !(self.min_brush_width..=self.max_brush_width).contains(&self.default_brush_width) {
            return Err(SketchError::InvalidConfig(format!(
                "default_brush_width {} outside {}..={}",
                self.default_brush_width, self.min_brush_width, self.max_brush_width
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(SketchError::InvalidConfig(format!(
                "jpeg_quality {} outside 1..=100",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
