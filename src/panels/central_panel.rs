use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            app.size_canvas(
                canvas_rect.width().floor().max(1.0) as usize,
                canvas_rect.height().floor().max(1.0) as usize,
            );

            // The canvas keeps its first size; display it 1:1 from the panel's corner
            let [width, height] = app.controller().canvas().size();
            let display_rect = egui::Rect::from_min_size(
                canvas_rect.min,
                egui::vec2(width as f32, height as f32),
            );
            ui.allocate_rect(canvas_rect, egui::Sense::drag());

            app.input_mut().set_canvas_area(display_rect, ui.layer_id());
            let events = app.input_mut().process_input(ctx);
            for event in &events {
                app.handle_event(event);
            }

            app.render_canvas(ui.painter(), display_rect);
        });
}
