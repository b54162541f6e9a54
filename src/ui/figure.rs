use eframe::egui::{self, pos2, Align2, Color32, FontId, Painter, Rect, Ui};

use crate::chart::figure::{Figure, FigureText};
use crate::chart::layout::FracRect;
use crate::color::Shades;

use super::plot;

/// Space kept free at the left edge of the figure.
const EDGE_PADDING: f32 = 8.0;
const TITLE_GAP: f32 = 4.0;
const TEXT_COLOR: Color32 = Color32::from_gray(30);

fn to_screen(area: Rect, rect: FracRect) -> Rect {
    Rect::from_min_max(
        pos2(
            area.left() + rect.left * area.width(),
            area.top() + rect.top * area.height(),
        ),
        pos2(
            area.left() + rect.right * area.width(),
            area.top() + rect.bottom * area.height(),
        ),
    )
}

fn figure_text(painter: &Painter, area: Rect, text: &FigureText, anchor: Align2) {
    let pos = pos2(
        area.left() + text.x * area.width(),
        area.top() + text.y * area.height(),
    );
    painter.text(
        pos,
        anchor,
        text.text,
        FontId::proportional(text.size),
        TEXT_COLOR,
    );
}

// ---------------------------------------------------------------------------
// Figure (central panel)
// ---------------------------------------------------------------------------

/// Draw title, caption and the three panels into the available area.
pub fn draw_figure(ui: &mut Ui, figure: &Figure, shades: &Shades) {
    let area = ui.max_rect();
    let painter = ui.painter().clone();

    figure_text(&painter, area, &figure.title, Align2::CENTER_TOP);
    figure_text(&painter, area, &figure.caption, Align2::CENTER_BOTTOM);

    let [total, by_age, by_sector] = figure.panel_rects().map(|r| to_screen(area, r));
    let titles = [
        (total, &figure.total.title),
        (by_age, &figure.by_age.title),
        (by_sector, &figure.by_sector.title),
    ];
    for (rect, title) in titles {
        painter.text(
            pos2(rect.center().x, rect.top() - TITLE_GAP),
            Align2::CENTER_BOTTOM,
            title,
            FontId::proportional(14.0),
            TEXT_COLOR,
        );
    }

    // the plot widget draws its own value labels, so it starts at the
    // figure edge and reserves the left margin for them
    let widget_rect = |rect: Rect| Rect::from_min_max(pos2(area.left() + EDGE_PADDING, rect.top()), rect.max);
    let label_width = |rect: Rect| (rect.left() - area.left() - EDGE_PADDING).max(0.0);

    let rect = widget_rect(total);
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        plot::total_panel(ui, &figure.total, shades, rect.size());
    });

    for (id, panel_rect, panel) in [
        ("by_age", by_age, &figure.by_age),
        ("by_sector", by_sector, &figure.by_sector),
    ] {
        let rect = widget_rect(panel_rect);
        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            plot::ranked_panel(ui, id, panel, shades, rect.size(), label_width(panel_rect));
        });
    }
}
