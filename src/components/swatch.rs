use egui::{Color32, Response, Sense, Stroke, Ui, vec2};

const RADIUS: f32 = 10.0;
const RING: Color32 = Color32::from_rgb(33, 150, 243);

/// Round color swatch; a ring marks the selected one.
pub fn swatch(ui: &mut Ui, color: Color32, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(24.0, 24.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let center = rect.center();
        painter.circle_filled(center, RADIUS, color);
        painter.circle_stroke(center, RADIUS, Stroke::new(1.0, Color32::GRAY));
        if selected {
            painter.circle_stroke(center, RADIUS + 2.0, Stroke::new(2.0, RING));
        } else if response.hovered() {
            painter.circle_stroke(center, RADIUS + 2.0, Stroke::new(1.0, Color32::GRAY));
        }
    }

    response
}
