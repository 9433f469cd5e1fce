use crate::error::SketchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pointer movement on the canvas is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand strokes in the active color
    #[default]
    Brush,
    /// Freehand strokes in white
    Eraser,
    Rectangle,
    Circle,
    /// Isosceles triangle with its apex at the drag origin
    Triangle,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    /// Stable identifier, as used in configuration and by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Eraser => "eraser",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Triangle => "🔺",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tool {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| SketchError::UnknownTool(s.to_owned()))
    }
}
