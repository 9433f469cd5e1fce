use crate::config::SketchConfig;
use crate::controller::SketchController;
use crate::error::SketchResult;
use crate::export;
use crate::input::{InputEvent, InputHandler, route_event};
use crate::palette::Palette;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::Tool;
use egui::Color32;

pub struct SketchApp {
    config: SketchConfig,
    controller: SketchController,
    palette: Palette,
    input: InputHandler,
    // Absent only in headless use; GPU textures need a creation context
    renderer: Option<Renderer>,
    canvas_sized: bool,
    needs_upload: bool,
    status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let mut app = Self::headless(config);
        app.renderer = Some(Renderer::new(cc));
        app
    }

    /// An app without a renderer, sized on the first `size_canvas` call.
    pub fn headless(config: SketchConfig) -> Self {
        let controller = SketchController::with_config(0, 0, &config);
        let mut palette = Palette::default();
        if let Some(index) = palette.swatches().iter().position(|&c| c == controller.color()) {
            palette.select(index);
        } else {
            palette.set_custom(controller.color());
        }
        Self {
            config,
            controller,
            palette,
            input: InputHandler::new(),
            renderer: None,
            canvas_sized: false,
            needs_upload: true,
            status: None,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn controller(&self) -> &SketchController {
        &self.controller
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Size the canvas to the displayed area. Only the first call has an effect.
    pub fn size_canvas(&mut self, width: usize, height: usize) {
        if self.canvas_sized {
            return;
        }
        self.controller.resize(width, height);
        self.canvas_sized = true;
        self.needs_upload = true;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let was_drawing = self.controller.is_drawing();
        route_event(event, &mut self.controller);
        // Only strokes repaint; hovering leaves the pixels alone
        if was_drawing || self.controller.is_drawing() {
            self.needs_upload = true;
        }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.controller.select_tool(tool);
    }

    pub fn set_brush_width(&mut self, width: u32) {
        let width = width.clamp(self.config.min_brush_width, self.config.max_brush_width);
        if let Err(err) = self.controller.set_brush_width(width) {
            self.status = Some(err.to_string());
        }
    }

    pub fn set_fill_shapes(&mut self, fill: bool) {
        self.controller.set_fill_shapes(fill);
    }

    pub fn select_swatch(&mut self, index: usize) {
        if let Some(color) = self.palette.select(index) {
            self.controller.set_color(color);
        }
    }

    pub fn set_custom_color(&mut self, color: Color32) {
        let color = self.palette.set_custom(color);
        self.controller.set_color(color);
    }

    pub fn clear_canvas(&mut self) {
        self.controller.clear();
        self.needs_upload = true;
    }

    pub fn save_image(&mut self) -> SketchResult<String> {
        let result = export::save_canvas(self.controller.canvas(), &self.config);
        self.status = Some(match &result {
            Ok(target) => format!("Saved {target}"),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
        result
    }

    /// Push pending canvas changes to the GPU and paint the canvas.
    pub(crate) fn render_canvas(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        if self.needs_upload {
            renderer.upload(self.controller.canvas());
            self.needs_upload = false;
        }
        renderer.render(painter, rect);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
