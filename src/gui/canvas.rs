use eframe::egui;
use crate::video::VideoFrame;

/// Drawing surface for decoded frames. Frames keep their native size and are anchored
/// at the top-left corner; anything beyond the canvas is clipped.
pub struct VideoCanvas {
    pub texture: Option<egui::TextureHandle>,
}

impl VideoCanvas {
    pub fn new() -> Self {
        Self { texture: None }
    }

    pub fn upload(&mut self, ctx: &egui::Context, frame: &VideoFrame) {
        let image = frame.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("video_frame", image, egui::TextureOptions::LINEAR));
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        if let Some(texture) = &self.texture {
            let image_rect = egui::Rect::from_min_size(rect.min, texture.size_vec2());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter_at(rect).image(texture.id(), image_rect, uv, egui::Color32::WHITE);
        }

        response
    }
}
