// src/renderer.rs
use crate::canvas::Canvas;
use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

/// Uploads the canvas pixels to a texture and paints it on screen.
pub struct Renderer {
    texture: Option<TextureHandle>,
    ctx: egui::Context,
}

impl Renderer {
    /// Creates a new renderer bound to the app's egui context
    ///
    /// Args:
    ///     cc (CreationContext): The eframe creation context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_context(cc.egui_ctx.clone())
    }

    pub fn with_context(ctx: egui::Context) -> Self {
        Self { texture: None, ctx }
    }

    /// Re-upload the canvas pixels. Call after the canvas changed.
    pub fn upload(&mut self, canvas: &Canvas) {
        let image = canvas.image().clone();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
            }
        }
    }

    /// Paint the last uploaded canvas into `rect`
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The rectangle to draw in
    pub fn render(&self, painter: &egui::Painter, rect: egui::Rect) {
        match &self.texture {
            Some(texture) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => {
                painter.rect_filled(rect, 0.0, crate::canvas::BACKGROUND);
            }
        }
    }
}
