use egui::{Pos2, Rect, Vec2, pos2};
use std::f32::consts::TAU;

/// A run of connected points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Pos2>,
    pub closed: bool,
}

impl SubPath {
    fn starting_at(point: Pos2) -> Self {
        Self {
            points: vec![point],
            closed: false,
        }
    }

    /// Line segments of this subpath, including the closing edge if closed.
    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        let closing = if self.closed && self.points.len() > 2 {
            Some((self.points[self.points.len() - 1], self.points[0]))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

/// Path under construction, following the 2D canvas model.
///
/// `line_to` on an empty path acts as `move_to`, and `close` starts a new
/// subpath at the first point of the one it closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// Last point of the current subpath, if any.
    pub fn current_point(&self) -> Option<Pos2> {
        self.subpaths.last().and_then(|s| s.points.last().copied())
    }

    pub fn move_to(&mut self, point: Pos2) {
        self.subpaths.push(SubPath::starting_at(point));
    }

    pub fn line_to(&mut self, point: Pos2) {
        match self.subpaths.last_mut() {
            Some(sub) => sub.points.push(point),
            None => self.move_to(point),
        }
    }

    pub fn close(&mut self) {
        let Some(sub) = self.subpaths.last_mut() else {
            return;
        };
        let Some(&first) = sub.points.first() else {
            return;
        };
        sub.closed = true;
        self.move_to(first);
    }

    /// Append a clockwise arc around `center` from `start` to `end` (radians).
    ///
    /// The arc is flattened into line segments. If the path already has a
    /// current point, a straight line joins it to the arc's start.
    pub fn arc(&mut self, center: Pos2, radius: f32, start: f32, end: f32) {
        let radius = radius.max(0.0);
        let sweep = (end - start).clamp(-TAU, TAU);
        let at = |angle: f32| pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin());

        if self.current_point().is_some() {
            self.line_to(at(start));
        } else {
            self.move_to(at(start));
        }

        let steps = arc_steps(radius, sweep);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.line_to(at(start + sweep * t));
        }
    }

    /// Append a closed rectangle with corner `origin` and signed `size`.
    pub fn rect(&mut self, origin: Pos2, size: Vec2) {
        self.move_to(origin);
        self.line_to(pos2(origin.x + size.x, origin.y));
        self.line_to(origin + size);
        self.line_to(pos2(origin.x, origin.y + size.y));
        self.close();
    }

    /// Bounding box of every point on the path.
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::NOTHING;
        for point in self.subpaths.iter().flat_map(|s| s.points.iter()) {
            rect.extend_with(*point);
        }
        rect
    }
}

// Roughly one segment every two pixels of arc length.
fn arc_steps(radius: f32, sweep: f32) -> usize {
    ((radius * sweep.abs()) / 2.0).ceil().clamp(8.0, 720.0) as usize
}
