use egui::{Color32, ColorImage};

/// Color every fresh or cleared canvas is painted with.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A fixed-size grid of pixels.
///
/// Backed by an [`egui::ColorImage`] so the renderer can upload it as a
/// texture without conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: ColorImage,
}

/// A full copy of a canvas' pixels, taken with [`Canvas::snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    size: [usize; 2],
    pixels: Vec<Color32>,
}

impl Canvas {
    /// Create a canvas of the given size, painted with [`BACKGROUND`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: ColorImage::new([width, height], BACKGROUND),
        }
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// Replace the pixel buffer with a transparent one of the new size.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.image = ColorImage::new([width, height], Color32::TRANSPARENT);
    }

    /// Wipe every pixel to transparent.
    pub fn clear(&mut self) {
        self.image.pixels.fill(Color32::TRANSPARENT);
    }

    /// Paint every pixel with [`BACKGROUND`].
    pub fn fill_background(&mut self) {
        self.image.pixels.fill(BACKGROUND);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x < self.width() && y < self.height() {
            Some(self.image.pixels[y * self.width() + x])
        } else {
            None
        }
    }

    /// Set a pixel; coordinates outside the canvas are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return;
        }
        let idx = y * self.width() + x;
        self.image.pixels[idx] = color;
    }

    /// Fill the half-open pixel span `[x0, x1)` on row `y`, clipped to the canvas.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color32) {
        if y < 0 || y as usize >= self.height() {
            return;
        }
        let x0 = x0.max(0) as usize;
        let x1 = (x1.max(0) as usize).min(self.width());
        if x0 >= x1 {
            return;
        }
        let row = y as usize * self.width();
        self.image.pixels[row + x0..row + x1].fill(color);
    }

    /// True when every pixel equals `color`.
    pub fn is_uniform(&self, color: Color32) -> bool {
        self.image.pixels.iter().all(|&p| p == color)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.image.size,
            pixels: self.image.pixels.clone(),
        }
    }

    /// Put a snapshot back at the origin.
    ///
    /// If the canvas was resized since the snapshot was taken only the
    /// overlapping region is written.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.size == self.image.size {
            self.image.pixels.copy_from_slice(&snapshot.pixels);
            return;
        }

        let [snap_w, snap_h] = snapshot.size;
        let w = snap_w.min(self.width());
        let h = snap_h.min(self.height());
        for y in 0..h {
            let src = y * snap_w;
            let dst = y * self.width();
            self.image.pixels[dst..dst + w].copy_from_slice(&snapshot.pixels[src..src + w]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(8, 4);
        assert_eq!(canvas.size(), [8, 4]);
        assert!(canvas.is_uniform(BACKGROUND));
    }

    #[test]
    fn test_set_pixel_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(-1, 0, Color32::RED);
        canvas.set_pixel(4, 1, Color32::RED);
        canvas.set_pixel(1, 4, Color32::RED);
        assert!(canvas.is_uniform(BACKGROUND));

        canvas.set_pixel(2, 3, Color32::RED);
        assert_eq!(canvas.pixel(2, 3), Some(Color32::RED));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut canvas = Canvas::new(4, 4);
        let snapshot = canvas.snapshot();

        canvas.set_pixel(1, 1, Color32::BLUE);
        canvas.fill_span(2, 0, 4, Color32::GREEN);
        assert!(!canvas.is_uniform(BACKGROUND));

        canvas.restore(&snapshot);
        assert!(canvas.is_uniform(BACKGROUND));
    }

    #[test]
    fn test_restore_after_resize_copies_overlap() {
        let mut canvas = Canvas::new(3, 3);
        canvas.set_pixel(0, 0, Color32::RED);
        canvas.set_pixel(2, 2, Color32::RED);
        let snapshot = canvas.snapshot();

        canvas.resize(2, 4);
        canvas.restore(&snapshot);

        assert_eq!(canvas.pixel(0, 0), Some(Color32::RED));
        assert_eq!(canvas.pixel(1, 1), Some(BACKGROUND));
        // Row 3 lies outside the snapshot
        assert_eq!(canvas.pixel(0, 3), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_clear_then_background() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear();
        assert!(canvas.is_uniform(Color32::TRANSPARENT));
        canvas.fill_background();
        assert!(canvas.is_uniform(BACKGROUND));
    }
}
