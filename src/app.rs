use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, ColorImage};

use crate::chart::figure::Figure;
use crate::state::AppState;
use crate::ui::figure;

pub const WINDOW_TITLE: &str = "Pay gap – Netherlands";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PayGapApp {
    pub state: AppState,
}

impl PayGapApp {
    pub fn new(figure: Figure, output_path: PathBuf) -> Self {
        Self {
            state: AppState::new(figure, output_path),
        }
    }
}

fn screenshot(ctx: &egui::Context) -> Option<Arc<ColorImage>> {
    ctx.input(|i| {
        i.raw.events.iter().find_map(|event| match event {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    })
}

impl eframe::App for PayGapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Screenshot of the previous frame ----
        if let Some(image) = screenshot(ctx) {
            self.state.finish_capture(&image);
        }

        // ---- Central panel: figure ----
        let frame = egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::WHITE);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            figure::draw_figure(ui, &self.state.figure, &self.state.shades);
        });

        if self.state.frame_painted() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if self.state.capture_in_progress() {
            ctx.request_repaint();
        }
    }
}
