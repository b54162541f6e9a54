use eframe::egui::{Align2, Color32, RichText, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Plot, PlotBounds, PlotPoint, Text, VLine};

use crate::chart::panels::{Bounds, Layer, RankedPanel, TotalPanel, RANKED_LAYERS};
use crate::color::{reference_line, Shades};

const BAR_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Shared plot settings
// ---------------------------------------------------------------------------

/// A static plot: no panning, zooming or hover read-out.
fn static_plot(plot: Plot) -> Plot {
    plot.allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .set_margin_fraction(Vec2::ZERO)
}

fn plot_bounds(bounds: Bounds) -> PlotBounds {
    PlotBounds::from_min_max(bounds.min, bounds.max)
}

/// Grid spacer placing one mark at each of `values`.
fn marks_at(values: Vec<f64>, step_size: f64) -> impl Fn(GridInput) -> Vec<GridMark> {
    move |_input| {
        values
            .iter()
            .map(|&value| GridMark { value, step_size })
            .collect()
    }
}

/// Category label for a bar position, where position 0 is the bottom bar.
fn label_at(labels: &[&str], position: f64) -> String {
    let n = labels.len();
    if position < 0.0 || position.fract().abs() > 1e-6 || position as usize >= n {
        return String::new();
    }
    labels[n - 1 - position as usize].to_string()
}

// ---------------------------------------------------------------------------
// Total per year (vertical bars)
// ---------------------------------------------------------------------------

/// Render the total-gap panel: one bar per year, value written on the bar.
pub fn total_panel(ui: &mut Ui, panel: &TotalPanel, shades: &Shades, size: Vec2) {
    let years: Vec<f64> = panel.bars.iter().map(|b| b.year as f64).collect();
    let bounds = plot_bounds(panel.bounds());

    let bars: Vec<Bar> = panel
        .bars
        .iter()
        .map(|b| Bar::new(b.year as f64, b.value).width(BAR_WIDTH))
        .collect();

    static_plot(Plot::new("total_per_year"))
        .width(size.x)
        .height(size.y)
        .show_grid(false)
        .x_grid_spacer(marks_at(years, 1.0))
        .y_grid_spacer(marks_at(panel.ticks(), panel.tick_step))
        .x_axis_formatter(|mark, _range| format!("{}", mark.value.round() as i64))
        .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(bounds);
            plot_ui.bar_chart(BarChart::new(bars).color(shades.medium));
            for bar in &panel.bars {
                let position = PlotPoint::new(bar.year as f64, bar.label_height());
                plot_ui.text(
                    Text::new(position, RichText::new(bar.label()).color(Color32::WHITE))
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// By age / by sector (horizontal bars)
// ---------------------------------------------------------------------------

/// Render a horizontal panel. The first bar is drawn at the top; layers are
/// added in [`RANKED_LAYERS`] order so the parity line sits behind the bars.
pub fn ranked_panel(
    ui: &mut Ui,
    id: &str,
    panel: &RankedPanel,
    shades: &Shades,
    size: Vec2,
    label_width: f32,
) {
    let n = panel.bars.len();
    let bars: Vec<Bar> = panel
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(panel.position(i), bar.value)
                .width(BAR_WIDTH)
                .fill(shades.color(bar.shade))
        })
        .collect();
    let positions: Vec<f64> = (0..n).map(|i| panel.position(i)).collect();
    let labels: Vec<&'static str> = panel.bars.iter().map(|b| b.label).collect();
    let bounds = plot_bounds(panel.bounds());
    let mut bars = Some(BarChart::new(bars).horizontal());

    static_plot(Plot::new(id))
        .width(size.x)
        .height(size.y)
        .show_grid([true, false])
        .y_grid_spacer(marks_at(positions, 1.0))
        .y_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
        .y_axis_min_width(label_width)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(bounds);
            for layer in RANKED_LAYERS {
                match layer {
                    Layer::ParityLine => plot_ui.vline(
                        VLine::new(panel.reference)
                            .color(reference_line())
                            .width(0.9),
                    ),
                    Layer::Bars => {
                        if let Some(chart) = bars.take() {
                            plot_ui.bar_chart(chart);
                        }
                    }
                }
            }
        });
}
