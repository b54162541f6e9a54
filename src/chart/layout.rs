// ---------------------------------------------------------------------------
// Grid layout in figure fractions
// ---------------------------------------------------------------------------

/// Rows × columns of equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

/// A rectangular block of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub row: usize,
    pub row_span: usize,
    pub col: usize,
    pub col_span: usize,
}

/// Figure margins as fractions, `top`/`bottom` measured from the bottom edge.
/// `hspace`/`wspace` are gaps between cells as a fraction of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub hspace: f32,
    pub wspace: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 0.295,
            right: 0.9,
            top: 0.88,
            bottom: 0.11,
            hspace: 2.5,
            wspace: 0.2,
        }
    }
}

/// Rectangle in figure fractions, `y` growing downwards (screen convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl FracRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

pub const FIGURE_GRID: Grid = Grid { rows: 9, cols: 2 };

/// Total per year, by age, by sector.
pub const PANEL_REGIONS: [Region; 3] = [
    Region {
        row: 0,
        row_span: 2,
        col: 0,
        col_span: 2,
    },
    Region {
        row: 2,
        row_span: 3,
        col: 0,
        col_span: 2,
    },
    Region {
        row: 5,
        row_span: 4,
        col: 0,
        col_span: 2,
    },
];

/// Cell size and gap along one axis.
fn cell_and_gap(extent: f32, cells: usize, space: f32) -> (f32, f32) {
    let cells = cells as f32;
    let cell = extent / (cells + space * (cells - 1.0));
    (cell, cell * space)
}

/// Where `region` lands on the figure.
pub fn region_rect(grid: Grid, region: Region, margins: &Margins) -> FracRect {
    let (cell_h, gap_h) = cell_and_gap(margins.top - margins.bottom, grid.rows, margins.hspace);
    let (cell_w, gap_w) = cell_and_gap(margins.right - margins.left, grid.cols, margins.wspace);

    let span = |cell: f32, gap: f32, n: usize| n as f32 * cell + n.saturating_sub(1) as f32 * gap;

    // matplotlib counts rows from the top, fractions from the bottom
    let top = margins.top - region.row as f32 * (cell_h + gap_h);
    let bottom = top - span(cell_h, gap_h, region.row_span);
    let left = margins.left + region.col as f32 * (cell_w + gap_w);
    let right = left + span(cell_w, gap_w, region.col_span);

    FracRect {
        left,
        top: 1.0 - top,
        right,
        bottom: 1.0 - bottom,
    }
}

/// The three panel rectangles, top to bottom.
pub fn panel_rects(margins: &Margins) -> [FracRect; 3] {
    PANEL_REGIONS.map(|region| region_rect(FIGURE_GRID, region, margins))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn panels_span_full_width() {
        let margins = Margins::default();
        for rect in panel_rects(&margins) {
            assert!((rect.left - margins.left).abs() < EPS);
            assert!((rect.right - margins.right).abs() < EPS);
        }
    }

    #[test]
    fn panels_stack_top_to_bottom_within_margins() {
        let margins = Margins::default();
        let [total, age, sector] = panel_rects(&margins);

        assert!((total.top - (1.0 - margins.top)).abs() < EPS);
        assert!((sector.bottom - (1.0 - margins.bottom)).abs() < EPS);
        assert!(total.bottom < age.top);
        assert!(age.bottom < sector.top);
    }

    #[test]
    fn heights_follow_row_spans() {
        let [total, age, sector] = panel_rects(&Margins::default());
        // 2 cells + 1 gap, 3 cells + 2 gaps, 4 cells + 3 gaps at hspace 2.5
        assert!((age.height() / total.height() - 8.0 / 4.5).abs() < 1e-4);
        assert!((sector.height() / total.height() - 11.5 / 4.5).abs() < 1e-4);
    }

    #[test]
    fn single_cell_region() {
        let margins = Margins {
            left: 0.0,
            right: 1.0,
            top: 1.0,
            bottom: 0.0,
            hspace: 0.0,
            wspace: 0.0,
        };
        let grid = Grid { rows: 2, cols: 2 };
        let rect = region_rect(
            grid,
            Region {
                row: 1,
                row_span: 1,
                col: 1,
                col_span: 1,
            },
            &margins,
        );
        assert_eq!(
            rect,
            FracRect {
                left: 0.5,
                top: 0.5,
                right: 1.0,
                bottom: 1.0
            }
        );
    }
}
