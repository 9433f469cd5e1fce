//! Software rasterization of paths onto a [`Canvas`].
//!
//! Pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`. No
//! antialiasing: a pixel is either painted or left alone.

use crate::canvas::Canvas;
use crate::geometry::Path;
use egui::{Color32, Pos2, Rect};

/// Stroke every subpath of `path` with round caps and joins.
///
/// Zero-length segments paint nothing, so a subpath that never leaves its
/// first point leaves no mark.
pub fn stroke_path(canvas: &mut Canvas, path: &Path, width: f32, color: Color32) {
    for sub in path.subpaths() {
        for (a, b) in sub.segments().filter(|(a, b)| a != b) {
            stroke_segment(canvas, a, b, width, color);
        }
    }
}

/// Fill `path` with the non-zero winding rule. Every subpath is implicitly closed.
pub fn fill_path(canvas: &mut Canvas, path: &Path, color: Color32) {
    let mut edges = Vec::new();
    for sub in path.subpaths() {
        let n = sub.points.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            edges.push((sub.points[i], sub.points[(i + 1) % n]));
        }
    }
    fill_edges(canvas, &edges, path.bounds(), color);
}

/// Fill the pixels whose centers fall inside `rect` (half-open on max).
pub fn fill_rect(canvas: &mut Canvas, rect: Rect, color: Color32) {
    if !rect.is_positive() {
        return;
    }
    let x0 = first_center_at_or_after(rect.min.x);
    let x1 = first_center_at_or_after(rect.max.x);
    let y0 = first_center_at_or_after(rect.min.y);
    let y1 = first_center_at_or_after(rect.max.y);
    for y in y0..y1 {
        canvas.fill_span(y, x0, x1, color);
    }
}

/// Paint the capsule of the given width around segment `a`-`b`.
pub fn stroke_segment(canvas: &mut Canvas, a: Pos2, b: Pos2, width: f32, color: Color32) {
    let half = (width * 0.5).max(0.5);
    let min_x = (a.x.min(b.x) - half).floor() as i32;
    let max_x = (a.x.max(b.x) + half).ceil() as i32;
    let min_y = (a.y.min(b.y) - half).floor() as i32;
    let max_y = (a.y.max(b.y) + half).ceil() as i32;

    let max_x = max_x.min(canvas.width() as i32 - 1);
    let max_y = max_y.min(canvas.height() as i32 - 1);
    let half_sq = half * half;

    for y in min_y.max(0)..=max_y {
        for x in min_x.max(0)..=max_x {
            let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_sq_to_segment(p, a, b) <= half_sq {
                canvas.set_pixel(x, y, color);
            }
        }
    }
}

fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return (p - a).length_sq();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_sq()
}

// Index of the first pixel whose center is >= `v`.
fn first_center_at_or_after(v: f32) -> i32 {
    (v - 0.5).ceil() as i32
}

// Scanline fill: per row, collect signed edge crossings at the pixel
// center and fill the spans where the winding number is non-zero.
fn fill_edges(canvas: &mut Canvas, edges: &[(Pos2, Pos2)], bounds: Rect, color: Color32) {
    if edges.is_empty() || !bounds.is_finite() {
        return;
    }

    let y0 = first_center_at_or_after(bounds.min.y).max(0);
    let y1 = first_center_at_or_after(bounds.max.y).min(canvas.height() as i32);
    let mut crossings: Vec<(f32, i32)> = Vec::new();

    for y in y0..y1 {
        let yc = y as f32 + 0.5;
        crossings.clear();
        for &(a, b) in edges {
            let dir = if a.y <= yc && b.y > yc {
                1
            } else if b.y <= yc && a.y > yc {
                -1
            } else {
                continue;
            };
            let x = a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y);
            crossings.push((x, dir));
        }
        crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

        let mut winding = 0;
        let mut span_start = 0.0;
        for &(x, dir) in &crossings {
            let before = winding;
            winding += dir;
            if before == 0 && winding != 0 {
                span_start = x;
            } else if before != 0 && winding == 0 {
                canvas.fill_span(
                    y,
                    first_center_at_or_after(span_start),
                    first_center_at_or_after(x),
                    color,
                );
            }
        }
    }
}
