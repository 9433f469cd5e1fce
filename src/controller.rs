use crate::canvas::Canvas;
use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::geometry::shapes;
use crate::palette::parse_hex_color;
use crate::state::StrokeState;
use crate::surface::Surface;
use crate::tools::Tool;
use egui::{Color32, Pos2};
use std::f32::consts::TAU;

/// Owns the drawing surface and all interaction state.
///
/// Driven strictly in the order begin → continue* → end by a single
/// pointer stream. Every mutation goes through a method here.
#[derive(Debug, Clone)]
pub struct SketchController {
    surface: Surface,
    tool: Tool,
    brush_width: u32,
    color: Color32,
    fill_shapes: bool,
    stroke: StrokeState,
}

impl SketchController {
    /// Create a controller with a white canvas and default settings.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(width, height, &SketchConfig::default())
    }

    pub fn with_config(width: usize, height: usize, config: &SketchConfig) -> Self {
        let mut surface = Surface::new(width, height);
        surface.reset_background();
        let color = parse_hex_color(&config.default_color).unwrap_or_else(|err| {
            log::warn!("{err}, starting with black");
            Color32::BLACK
        });
        Self {
            surface,
            tool: Tool::default(),
            brush_width: config.default_brush_width.max(1),
            color,
            fill_shapes: false,
            stroke: StrokeState::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        self.surface.canvas()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn fill_shapes(&self) -> bool {
        self.fill_shapes
    }

    pub fn stroke_state(&self) -> &StrokeState {
        &self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// Size the canvas to its displayed dimensions and paint the background.
    pub fn resize(&mut self, width: usize, height: usize) {
        log::info!("Canvas sized to {width}x{height}");
        self.surface.resize(width, height);
        self.surface.reset_background();
    }

    /// Wipe all drawing and repaint the white background. Cannot be undone.
    pub fn clear(&mut self) {
        log::info!("Canvas cleared");
        self.surface.reset_background();
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::info!("Tool selected: {tool}");
        }
        self.tool = tool;
    }

    /// Select a tool by its id (`brush`, `eraser`, `rectangle`, `circle`, `triangle`).
    pub fn select_tool_by_id(&mut self, id: &str) -> SketchResult<()> {
        let tool = id.parse()?;
        self.select_tool(tool);
        Ok(())
    }

    pub fn set_brush_width(&mut self, width: u32) -> SketchResult<()> {
        if width == 0 {
            log::warn!("Rejected brush width 0, keeping {}", self.brush_width);
            return Err(SketchError::ZeroBrushWidth);
        }
        log::info!("Brush width set to {width}");
        self.brush_width = width;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        log::info!("Color set to {color:?}");
        self.color = color;
    }

    pub fn set_fill_shapes(&mut self, fill: bool) {
        self.fill_shapes = fill;
    }

    /// Pointer-down: record the origin, reset the pen and snapshot the canvas.
    ///
    /// Paints nothing. Calling this mid-stroke starts over from `pos`.
    pub fn begin_stroke(&mut self, pos: Pos2) {
        log::debug!("Begin {} stroke at {pos:?}", self.tool);
        self.surface.begin_path();
        self.surface.set_line_width(self.brush_width as f32);
        self.surface.set_stroke_color(self.color);
        self.surface.set_fill_color(self.color);
        self.stroke = StrokeState::Drawing {
            origin: pos,
            snapshot: self.surface.snapshot(),
        };
    }

    /// Pointer-move: restore the snapshot and render the tool at `pos`.
    ///
    /// Does nothing unless a stroke is in progress.
    pub fn continue_stroke(&mut self, pos: Pos2) {
        let StrokeState::Drawing { origin, snapshot } = &self.stroke else {
            return;
        };
        let origin = *origin;
        self.surface.restore(snapshot);

        match self.tool {
            Tool::Brush | Tool::Eraser => {
                let color = if self.tool == Tool::Eraser {
                    Color32::WHITE
                } else {
                    self.color
                };
                self.surface.set_stroke_color(color);
                self.surface.line_to(pos);
                self.surface.stroke();
            }
            Tool::Rectangle => {
                let (corner, size) = shapes::drag_rect(origin, pos);
                if self.fill_shapes {
                    self.surface.fill_rect(corner, size);
                } else {
                    self.surface.stroke_rect(corner, size);
                }
            }
            Tool::Circle => {
                self.surface.begin_path();
                self.surface.arc(origin, shapes::drag_radius(origin, pos), 0.0, TAU);
                self.paint_shape();
            }
            Tool::Triangle => {
                let [apex, base, mirrored] = shapes::drag_triangle(origin, pos);
                self.surface.begin_path();
                self.surface.move_to(apex);
                self.surface.line_to(base);
                self.surface.line_to(mirrored);
                self.surface.close_path();
                self.paint_shape();
            }
        }
    }

    /// Pointer-up: leave the drawing state. Whatever was last rendered stays.
    pub fn end_stroke(&mut self) {
        if self.stroke.is_drawing() {
            log::debug!("End {} stroke", self.tool);
        }
        self.stroke = StrokeState::Idle;
    }

    fn paint_shape(&mut self) {
        if self.fill_shapes {
            self.surface.fill();
        } else {
            self.surface.stroke();
        }
    }
}
