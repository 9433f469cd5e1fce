use crate::SketchApp;
use crate::components::swatch;
use crate::tools::Tool;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Shapes");
            let active_tool = app.controller().tool();
            for tool in Tool::ALL {
                let text = format!("{} {}", tool.icon(), tool.label());
                if ui.selectable_label(tool == active_tool, text).clicked() {
                    app.select_tool(tool);
                }
            }

            let mut fill = app.controller().fill_shapes();
            if ui.checkbox(&mut fill, "Fill shapes").changed() {
                app.set_fill_shapes(fill);
            }
            ui.separator();

            ui.heading("Size");
            let mut width = app.controller().brush_width();
            let bounds = app.config().min_brush_width..=app.config().max_brush_width;
            if ui.add(egui::Slider::new(&mut width, bounds)).changed() {
                app.set_brush_width(width);
            }
            ui.separator();

            ui.heading("Colors");
            let selected = app.palette().selected_index();
            let custom = app.palette().custom_index();
            ui.horizontal(|ui| {
                let fixed = app.palette().swatches()[..custom].to_vec();
                for (index, color) in fixed.into_iter().enumerate() {
                    if swatch(ui, color, index == selected).clicked() {
                        app.select_swatch(index);
                    }
                }

                if swatch(ui, app.palette().custom_color(), selected == custom).clicked() {
                    app.select_swatch(custom);
                }
                let mut picked = app.palette().custom_color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut picked,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.set_custom_color(picked);
                }
            });
            ui.separator();

            ui.vertical_centered_justified(|ui| {
                if ui.button("Clear canvas").clicked() {
                    app.clear_canvas();
                }
                if ui.button("Save as image").clicked() {
                    // Failure is already logged and shown in the status line
                    let _ = app.save_image();
                }
            });

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
