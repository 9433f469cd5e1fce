//! Coordinate formulas turning a drag (origin to current pointer) into a shape.

use egui::{Pos2, Rect, Vec2, pos2};

/// Corner and signed size of the rectangle previewed for a drag.
///
/// The corner is the current pointer and the size is `origin - current`,
/// so dragging towards the lower right yields a negative size. Rendering
/// flips negative sizes, which puts the opposite corner back at the origin.
pub fn drag_rect(origin: Pos2, current: Pos2) -> (Pos2, Vec2) {
    (current, origin - current)
}

/// Normalized rectangle covered by a corner and a signed size.
pub fn normalized_rect(corner: Pos2, size: Vec2) -> Rect {
    Rect::from_two_pos(corner, corner + size)
}

/// Radius of the circle centered on the drag origin.
pub fn drag_radius(origin: Pos2, current: Pos2) -> f32 {
    origin.distance(current)
}

/// Vertices of the isosceles triangle for a drag: apex at the origin, one
/// base vertex under the pointer, the other mirrored across the origin's x.
pub fn drag_triangle(origin: Pos2, current: Pos2) -> [Pos2; 3] {
    [origin, current, pos2(2.0 * origin.x - current.x, current.y)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_rect_keeps_signed_size() {
        let (corner, size) = drag_rect(pos2(50.0, 50.0), pos2(150.0, 120.0));
        assert_eq!(corner, pos2(150.0, 120.0));
        assert_eq!(size, egui::vec2(-100.0, -70.0));

        let rect = normalized_rect(corner, size);
        assert_eq!(rect.min, pos2(50.0, 50.0));
        assert_eq!(rect.max, pos2(150.0, 120.0));
    }

    #[test]
    fn test_drag_rect_towards_upper_left() {
        let (corner, size) = drag_rect(pos2(150.0, 120.0), pos2(50.0, 50.0));
        assert_eq!(size, egui::vec2(100.0, 70.0));
        assert_eq!(normalized_rect(corner, size), Rect::from_min_max(pos2(50.0, 50.0), pos2(150.0, 120.0)));
    }

    #[test]
    fn test_drag_radius() {
        assert_eq!(drag_radius(pos2(100.0, 100.0), pos2(130.0, 100.0)), 30.0);
        assert_eq!(drag_radius(pos2(0.0, 0.0), pos2(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_drag_triangle_mirrors_base() {
        let vertices = drag_triangle(pos2(100.0, 100.0), pos2(120.0, 150.0));
        assert_eq!(vertices, [pos2(100.0, 100.0), pos2(120.0, 150.0), pos2(80.0, 150.0)]);
    }
}
