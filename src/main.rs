use anyhow::{anyhow, Result};
use eframe::egui;

use pay_gap::app::{PayGapApp, WINDOW_TITLE};
use pay_gap::config::Settings;
use pay_gap::pipeline::prepare_figure;
use pay_gap::ui::theme;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let figure = prepare_figure(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.figure_size)
            .with_resizable(false),
        ..Default::default()
    };

    let output_path = settings.output_file.clone();
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(PayGapApp::new(figure, output_path)))
        }),
    )
    .map_err(|e| anyhow!("chart window: {e}"))
}
