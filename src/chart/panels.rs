use crate::color::Shade;
use crate::data::model::{AgeBracket, Category, Sector, YearTable};

/// Value axis of the total panel.
pub const TOTAL_RANGE: (f64, f64) = (60.0, 100.0);
pub const TOTAL_TICK_STEP: f64 = 20.0;
/// Bar labels sit this far below the top of their bar.
pub const LABEL_DROP: f64 = 9.0;

/// Value axis of the horizontal panels.
pub const GAP_RANGE: (f64, f64) = (70.0, 105.0);
/// Equal pay: women earn 100% of the male wage.
pub const PARITY: f64 = 100.0;

/// Space left and right of the outer year bars.
const YEAR_PADDING: f64 = 0.6;

/// Visible plot area, `[x, y]` corners in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

/// Drawing order of a horizontal panel, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    ParityLine,
    Bars,
}

pub const RANKED_LAYERS: [Layer; 2] = [Layer::ParityLine, Layer::Bars];

// ---------------------------------------------------------------------------
// Panel descriptions
// ---------------------------------------------------------------------------

/// One vertical bar of the total panel.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBar {
    pub year: i32,
    pub value: f64,
}

impl YearBar {
    /// Text drawn on the bar: the value rounded to a whole percentage.
    pub fn label(&self) -> String {
        format!("{}", self.value.round() as i64)
    }

    pub fn label_height(&self) -> f64 {
        self.value - LABEL_DROP
    }
}

/// Vertical bars, one per year.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalPanel {
    pub title: String,
    pub bars: Vec<YearBar>,
    pub value_range: (f64, f64),
    pub tick_step: f64,
}

impl TotalPanel {
    /// Years along x with some padding, the value axis clamped to its range.
    pub fn bounds(&self) -> Bounds {
        let (first, last) = match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => (first.year as f64, last.year as f64),
            _ => (0.0, 1.0),
        };
        let (min, max) = self.value_range;
        Bounds {
            min: [first - YEAR_PADDING, min],
            max: [last + YEAR_PADDING, max],
        }
    }

    /// Value-axis ticks from the bottom of the range to the top.
    pub fn ticks(&self) -> Vec<f64> {
        let (min, max) = self.value_range;
        let steps = ((max - min) / self.tick_step).floor() as usize;
        (0..=steps).map(|i| min + i as f64 * self.tick_step).collect()
    }
}

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub shade: Shade,
}

/// Horizontal bars listed top to bottom, with a parity reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPanel {
    pub title: String,
    pub bars: Vec<Bar>,
    pub value_range: (f64, f64),
    pub reference: f64,
}

impl RankedPanel {
    /// Plot `y` of bar `index`: the first bar gets the highest position.
    pub fn position(&self, index: usize) -> f64 {
        self.bars.len().saturating_sub(index + 1) as f64
    }

    /// Value range along x, half a bar of room above and below along y.
    pub fn bounds(&self) -> Bounds {
        let (min, max) = self.value_range;
        Bounds {
            min: [min, -0.5],
            max: [max, self.bars.len().max(1) as f64 - 0.5],
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn title(prefix: &str, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("{prefix}, {year}"),
        None => prefix.to_string(),
    }
}

fn ranked(prefix: &str, year: Option<i32>, bars: Vec<Bar>) -> RankedPanel {
    RankedPanel {
        title: title(prefix, year),
        bars,
        value_range: GAP_RANGE,
        reference: PARITY,
    }
}

/// The `Total` row of every year in the age table.
pub fn total_gap(age: &YearTable<AgeBracket>) -> TotalPanel {
    let bars = age
        .years()
        .into_iter()
        .filter_map(|year| match age.value(year, AgeBracket::Total) {
            Some(value) => Some(YearBar { year, value }),
            None => {
                log::warn!("No total for {year}, leaving it out");
                None
            }
        })
        .collect();

    TotalPanel {
        title: "Total per year".to_string(),
        bars,
        value_range: TOTAL_RANGE,
        tick_step: TOTAL_TICK_STEP,
    }
}

/// Every age bracket in `year`, youngest first, the largest gap highlighted.
pub fn gap_by_age(age: &YearTable<AgeBracket>, year: Option<i32>) -> RankedPanel {
    let mut bars: Vec<Bar> = match year {
        Some(year) => AgeBracket::ALL
            .iter()
            .filter(|bracket| !bracket.is_total())
            .filter_map(|&bracket| {
                age.value(year, bracket).map(|value| Bar {
                    label: bracket.label(),
                    value,
                    shade: Shade::Medium,
                })
            })
            .collect(),
        None => Vec::new(),
    };
    highlight_max(&mut bars);
    ranked("By age", year, bars)
}

/// Every sector in `year`, largest value first.
pub fn gap_by_sector(sector: &YearTable<Sector>, year: Option<i32>) -> RankedPanel {
    let mut bars: Vec<Bar> = match year {
        Some(year) => sector
            .in_year(year)
            .map(|row| Bar {
                label: row.category.label(),
                value: row.difference,
                shade: Shade::Medium,
            })
            .collect(),
        None => Vec::new(),
    };
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked("By sector", year, bars)
}

/// Darken the first bar holding the maximum value.
fn highlight_max(bars: &mut [Bar]) {
    let mut best: Option<usize> = None;
    for (i, bar) in bars.iter().enumerate() {
        if best.map_or(true, |b| bar.value > bars[b].value) {
            best = Some(i);
        }
    }
    if let Some(i) = best {
        bars[i].shade = Shade::Dark;
    }
}
