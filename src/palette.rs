use crate::error::{SketchError, SketchResult};
use egui::Color32;

/// Initial color of the custom swatch.
pub const DEFAULT_CUSTOM: Color32 = Color32::from_rgb(0x4A, 0x98, 0xF7);

/// Fixed color swatches followed by one custom swatch driven by a color picker.
///
/// Exactly one swatch is selected at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Color32>,
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            swatches: vec![
                Color32::WHITE,
                Color32::BLACK,
                Color32::from_rgb(0xE0, 0x20, 0x20),
                Color32::from_rgb(0x6D, 0xD4, 0x00),
                DEFAULT_CUSTOM,
            ],
            selected: 1,
        }
    }
}

impl Palette {
    pub fn swatches(&self) -> &[Color32] {
        &self.swatches
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn custom_index(&self) -> usize {
        self.swatches.len() - 1
    }

    pub fn custom_color(&self) -> Color32 {
        self.swatches[self.custom_index()]
    }

    /// Select a swatch, returning its color. Out-of-range indices leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> Option<Color32> {
        let color = *self.swatches.get(index)?;
        self.selected = index;
        Some(color)
    }

    /// Recolor the custom swatch and select it.
    pub fn set_custom(&mut self, color: Color32) -> Color32 {
        let index = self.custom_index();
        self.swatches[index] = color;
        self.selected = index;
        color
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional) into an opaque color.
pub fn parse_hex_color(text: &str) -> SketchResult<Color32> {
    let invalid = || SketchError::InvalidColor(text.to_owned());
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        6 => Ok(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}
