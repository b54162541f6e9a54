use eframe::egui::{self, Color32, Stroke};

use crate::color::AXES_FACE;

/// Light theme with seaborn's "dark" axes background and no plot frame.
pub fn apply(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Light);
    ctx.style_mut(|style| {
        style.visuals.panel_fill = Color32::WHITE;
        style.visuals.extreme_bg_color = AXES_FACE;
        style.visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
    });
}
