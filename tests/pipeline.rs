use std::fmt::Write as _;

use tempfile::TempDir;

use pay_gap::color::Shade;
use pay_gap::config::Settings;
use pay_gap::data::model::{AgeBracket, Category, Sector};
use pay_gap::error::DataError;
use pay_gap::pipeline::{load_aligned, prepare_figure};

fn age_csv(years: std::ops::RangeInclusive<i32>) -> String {
    let mut csv = String::from(
        "ID;KenmerkenBaanWerknemer;Perioden;BeloningsverschilTussenManEnVrouw_1\n",
    );
    let mut id = 0;
    for year in years {
        for (i, bracket) in AgeBracket::ALL.iter().enumerate() {
            // 30 to 35 is the highest bracket every year
            let value = match bracket {
                AgeBracket::Total => 78.0 + (year - 2008) as f64,
                AgeBracket::From30To35 => 99.0,
                _ => 80.0 + i as f64,
            };
            writeln!(csv, "{id};\"{:<8}\";\"{year}JJ00\";{value}", bracket.code()).unwrap();
            id += 1;
        }
        // a code the chart does not know
        writeln!(csv, "{id};\"10010   \";\"{year}JJ00\";91").unwrap();
        id += 1;
    }
    csv
}

fn sector_csv(years: std::ops::RangeInclusive<i32>) -> String {
    let mut csv = String::from(
        "ID;BedrijfstakkenBranchesSBI2008;Perioden;BeloningsverschilTussenManEnVrouw_1\n",
    );
    let mut id = 0;
    for year in years {
        for (i, sector) in Sector::ALL.iter().enumerate() {
            let value = 72.0 + ((i * 7) % Sector::ALL.len()) as f64;
            writeln!(csv, "{id};\"{:<8}\";\"{year}JJ00\";{value}", sector.code()).unwrap();
            id += 1;
        }
    }
    csv
}

/// Both input files written into a temporary data directory. The directory
/// is removed when the returned `TempDir` is dropped.
fn settings_with(
    age_years: std::ops::RangeInclusive<i32>,
    sector_years: std::ops::RangeInclusive<i32>,
) -> (TempDir, Settings) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        data_dir: dir.path().to_path_buf(),
        ..Settings::default()
    };
    std::fs::write(settings.age_path(), age_csv(age_years)).unwrap();
    std::fs::write(settings.sector_path(), sector_csv(sector_years)).unwrap();
    (dir, settings)
}

#[test]
fn tables_align_on_shared_years() {
    let (_dir, settings) = settings_with(2008..=2015, 2010..=2013);
    let tables = load_aligned(&settings).unwrap();

    assert_eq!((tables.first_year, tables.last_year), (2010, 2013));
    assert_eq!(tables.age.year_range(), Some((2010, 2013)));
    assert_eq!(tables.sector.year_range(), Some((2010, 2013)));
    // unknown codes were dropped while loading
    assert_eq!(tables.age.len(), 4 * AgeBracket::ALL.len());
    assert_eq!(tables.sector.len(), 4 * Sector::ALL.len());
}

#[test]
fn figure_shows_last_shared_year() {
    let (_dir, settings) = settings_with(2008..=2015, 2010..=2013);
    let figure = prepare_figure(&settings).unwrap();

    assert_eq!(figure.by_age.title, "By age, 2013");
    assert_eq!(figure.by_sector.title, "By sector, 2013");

    let years: Vec<i32> = figure.total.bars.iter().map(|b| b.year).collect();
    assert_eq!(years, vec![2010, 2011, 2012, 2013]);
    let totals: Vec<f64> = figure.total.bars.iter().map(|b| b.value).collect();
    assert_eq!(totals, vec![80.0, 81.0, 82.0, 83.0]);

    assert_eq!(figure.by_age.bars.len(), AgeBracket::ALL.len() - 1);
    let dark: Vec<&str> = figure
        .by_age
        .bars
        .iter()
        .filter(|b| b.shade == Shade::Dark)
        .map(|b| b.label)
        .collect();
    assert_eq!(dark, vec!["30 to 35"]);

    assert_eq!(figure.by_sector.bars.len(), Sector::ALL.len());
    assert!(figure
        .by_sector
        .bars
        .windows(2)
        .all(|w| w[0].value > w[1].value));
}

#[test]
fn disjoint_years_fail() {
    let (_dir, settings) = settings_with(2008..=2009, 2012..=2013);
    let err = load_aligned(&settings).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DataError>(),
        Some(DataError::NoOverlap { .. })
    ));
}

#[test]
fn missing_input_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        data_dir: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let err = prepare_figure(&settings).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("81901NED_UntypedDataSet_24102017_212134.csv"));
}

#[test]
fn data_directory_is_cleaned_up() {
    let (dir, settings) = settings_with(2010..=2011, 2010..=2011);
    load_aligned(&settings).unwrap();

    let path = dir.path().to_path_buf();
    assert!(path.exists());
    drop(dir);
    assert!(!path.exists());
}
