use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Source column names (CBS StatLine "untyped" datasets)
// ---------------------------------------------------------------------------

/// Column holding the period label, e.g. `2008JJ00`.
pub const PERIOD_COLUMN: &str = "Perioden";

/// Column holding the female wage as percentage of the male wage.
pub const DIFFERENCE_COLUMN: &str = "BeloningsverschilTussenManEnVrouw_1";

/// Source column names of one dataset and the canonical names they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub period: &'static str,
    pub category: &'static str,
    pub difference: &'static str,
}

impl Columns {
    /// Dataset 81901NED, "Beloningsverschil man-vrouw; kenmerken".
    pub const AGE: Columns = Columns {
        period: PERIOD_COLUMN,
        category: "KenmerkenBaanWerknemer",
        difference: DIFFERENCE_COLUMN,
    };

    /// Dataset 81920NED, "Beloningsverschil man-vrouw; SBI 2008".
    pub const SECTOR: Columns = Columns {
        period: PERIOD_COLUMN,
        category: "BedrijfstakkenBranchesSBI2008",
        difference: DIFFERENCE_COLUMN,
    };
}

// ---------------------------------------------------------------------------
// Run settings
// ---------------------------------------------------------------------------

/// Everything the run needs to know about where files live.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub age_file: String,
    pub sector_file: String,
    pub delimiter: u8,
    pub output_file: PathBuf,
    /// Window (and saved image) size in points: 8×12 inches at 100 dpi.
    pub figure_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            age_file: "81901NED_UntypedDataSet_24102017_212134.csv".to_string(),
            sector_file: "81920NED_UntypedDataSet_24102017_212143.csv".to_string(),
            delimiter: b';',
            output_file: PathBuf::from("wage_gap.png"),
            figure_size: [800.0, 1200.0],
        }
    }
}

impl Settings {
    pub fn age_path(&self) -> PathBuf {
        self.data_dir.join(&self.age_file)
    }

    pub fn sector_path(&self) -> PathBuf {
        self.data_dir.join(&self.sector_file)
    }
}
