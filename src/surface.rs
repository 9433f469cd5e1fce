use crate::canvas::{Canvas, Snapshot};
use crate::geometry::Path;
use crate::raster;
use egui::{Color32, Pos2, Vec2};

/// The drawing context: a canvas plus the pen state used to paint on it.
///
/// Mirrors a 2D canvas context: path construction is separate from
/// rendering, and `stroke`/`fill` paint the whole current path with the
/// current line width and colors.
#[derive(Debug, Clone)]
pub struct Surface {
    canvas: Canvas,
    line_width: f32,
    stroke_color: Color32,
    fill_color: Color32,
    path: Path,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            path: Path::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    /// Resize the pixel buffer. The new buffer is transparent.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.canvas.resize(width, height);
    }

    /// Wipe the canvas and repaint the white background.
    pub fn reset_background(&mut self) {
        self.canvas.clear();
        self.canvas.fill_background();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.canvas.snapshot()
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.canvas.restore(snapshot);
    }

    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    pub fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    pub fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    pub fn close_path(&mut self) {
        self.path.close();
    }

    pub fn arc(&mut self, center: Pos2, radius: f32, start: f32, end: f32) {
        self.path.arc(center, radius, start, end);
    }

    pub fn stroke(&mut self) {
        raster::stroke_path(&mut self.canvas, &self.path, self.line_width, self.stroke_color);
    }

    pub fn fill(&mut self) {
        raster::fill_path(&mut self.canvas, &self.path, self.fill_color);
    }

    /// Outline a rectangle given a corner and a signed size; leaves the current path alone.
    pub fn stroke_rect(&mut self, corner: Pos2, size: Vec2) {
        let mut outline = Path::new();
        outline.rect(corner, size);
        raster::stroke_path(&mut self.canvas, &outline, self.line_width, self.stroke_color);
    }

    /// Fill a rectangle given a corner and a signed size; leaves the current path alone.
    pub fn fill_rect(&mut self, corner: Pos2, size: Vec2) {
        let rect = crate::geometry::shapes::normalized_rect(corner, size);
        raster::fill_rect(&mut self.canvas, rect, self.fill_color);
    }
}
