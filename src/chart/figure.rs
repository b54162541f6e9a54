use crate::data::align::AlignedTables;

use super::layout::{panel_rects, FracRect, Margins};
use super::panels::{gap_by_age, gap_by_sector, total_gap, RankedPanel, TotalPanel};

pub const TITLE: &str = "Average hourly wage of women in the Netherlands\n\
                         as percentage of the average hourly wage of men";
pub const CAPTION: &str = "Source: Centraal Bureau voor de Statistiek\n(https://www.cbs.nl/en-gb)";

/// Text placed at a fixed figure position, `y` measured from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureText {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

// ---------------------------------------------------------------------------
// Figure – everything the renderer needs, independent of egui
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: FigureText,
    pub caption: FigureText,
    pub margins: Margins,
    pub total: TotalPanel,
    pub by_age: RankedPanel,
    pub by_sector: RankedPanel,
}

impl Figure {
    /// Panel rectangles in drawing order: total, age, sector.
    pub fn panel_rects(&self) -> [FracRect; 3] {
        panel_rects(&self.margins)
    }
}

/// Build all three panels from the aligned tables.
///
/// Both horizontal panels show the last aligned year.
pub fn compose(tables: &AlignedTables) -> Figure {
    let year = Some(tables.last_year);
    Figure {
        title: FigureText {
            text: TITLE,
            x: 0.596,
            y: 0.02,
            size: 16.0,
        },
        caption: FigureText {
            text: CAPTION,
            x: 0.6,
            y: 0.965,
            size: 12.0,
        },
        margins: Margins::default(),
        total: total_gap(&tables.age),
        by_age: gap_by_age(&tables.age, year),
        by_sector: gap_by_sector(&tables.sector, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AgeBracket, Sector, YearObservation, YearTable};

    #[test]
    fn horizontal_panels_use_the_last_year() {
        let age = YearTable::new(vec![
            YearObservation {
                year: 2012,
                category: AgeBracket::Total,
                difference: 81.0,
            },
            YearObservation {
                year: 2013,
                category: AgeBracket::From40To45,
                difference: 83.0,
            },
        ]);
        let sector = YearTable::new(vec![YearObservation {
            year: 2013,
            category: Sector::RealEstate,
            difference: 79.0,
        }]);
        let figure = compose(&AlignedTables {
            age,
            sector,
            first_year: 2012,
            last_year: 2013,
        });

        assert_eq!(figure.by_age.title, "By age, 2013");
        assert_eq!(figure.by_sector.title, "By sector, 2013");
        assert_eq!(figure.total.bars.len(), 1);
        assert_eq!(figure.by_sector.bars[0].label, "Real estate");
        assert!(figure.caption.text.starts_with("Source: Centraal Bureau"));

        let [total, age, sector] = figure.panel_rects();
        assert!(total.top < age.top && age.top < sector.top);
    }
}
