//! Windowed presenter for claro
//!
//! Shows the original image in the main window and the enhanced result
//! in a second window. Blocks until the user closes a window or presses
//! Escape.

use claro_core::{Presenter, PreviewImage};
use eframe::egui;

/// Largest initial window edge; bigger images are shown scaled by the OS
const MAX_WINDOW_EDGE: f32 = 1200.0;

/// Presenter that opens blocking preview windows
pub struct WindowPresenter;

impl Presenter for WindowPresenter {
    fn present(&self, original: &PreviewImage, enhanced: &PreviewImage) -> Result<(), String> {
        let app = ViewerApp::new(original.clone(), enhanced.clone());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size(original))
                .with_title("Original"),
            ..Default::default()
        };

        eframe::run_native("claro", options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|e| format!("Failed to open preview windows: {}", e))
    }
}

fn window_size(image: &PreviewImage) -> egui::Vec2 {
    egui::vec2(
        (image.width as f32).min(MAX_WINDOW_EDGE),
        (image.height as f32).min(MAX_WINDOW_EDGE),
    )
}

struct ViewerApp {
    original: PreviewImage,
    enhanced: PreviewImage,
    original_texture: Option<egui::TextureHandle>,
    enhanced_texture: Option<egui::TextureHandle>,
}

impl ViewerApp {
    fn new(original: PreviewImage, enhanced: PreviewImage) -> Self {
        Self {
            original,
            enhanced,
            original_texture: None,
            enhanced_texture: None,
        }
    }
}

fn texture(
    ctx: &egui::Context,
    slot: &mut Option<egui::TextureHandle>,
    name: &str,
    image: &PreviewImage,
) -> egui::TextureHandle {
    slot.get_or_insert_with(|| {
        let color = egui::ColorImage::from_rgb(
            [image.width as usize, image.height as usize],
            &image.rgb,
        );
        ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
    })
    .clone()
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let original = texture(ctx, &mut self.original_texture, "original", &self.original);
        let enhanced = texture(ctx, &mut self.enhanced_texture, "enhanced", &self.enhanced);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.image(&original);
        });

        // The enhanced result lives in its own OS window
        let mut dismissed = false;
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("claro-enhanced"),
            egui::ViewportBuilder::default()
                .with_title("Enhanced")
                .with_inner_size(window_size(&self.enhanced)),
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.image(&enhanced);
                });
                if ctx.input(|i| i.viewport().close_requested() || i.key_pressed(egui::Key::Escape))
                {
                    dismissed = true;
                }
            },
        );

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
