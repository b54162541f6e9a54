use crate::error::DataError;

use super::model::{AgeBracket, Category, Observation, Sector, YearObservation, YearTable};

// ---------------------------------------------------------------------------
// Period → year
// ---------------------------------------------------------------------------

/// Year of a CBS period label: its first four characters, e.g. `2008JJ00` → 2008.
pub fn period_year(label: &str) -> Option<i32> {
    let prefix = label.get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Convert loaded rows into a table keyed by year.
pub fn to_year_table<C: Category>(
    rows: Vec<Observation<C>>,
) -> Result<YearTable<C>, DataError> {
    rows.into_iter()
        .map(|obs| -> Result<YearObservation<C>, DataError> {
            let year = period_year(&obs.period).ok_or_else(|| DataError::InvalidPeriod {
                line: obs.line,
                label: obs.period.clone(),
            })?;
            Ok(YearObservation {
                year,
                category: obs.category,
                difference: obs.difference,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(YearTable::new)
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Both datasets restricted to the years they have in common.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTables {
    pub age: YearTable<AgeBracket>,
    pub sector: YearTable<Sector>,
    pub first_year: i32,
    pub last_year: i32,
}

/// Restrict both tables to `[max(mins), min(maxes)]`.
///
/// Disjoint year ranges are reported as [`DataError::NoOverlap`] rather than
/// producing an empty chart.
pub fn align(
    mut age: YearTable<AgeBracket>,
    mut sector: YearTable<Sector>,
) -> Result<AlignedTables, DataError> {
    let (age_min, age_max) = age
        .year_range()
        .ok_or(DataError::EmptyDataset(AgeBracket::KIND))?;
    let (sector_min, sector_max) = sector
        .year_range()
        .ok_or(DataError::EmptyDataset(Sector::KIND))?;

    let first_year = age_min.max(sector_min);
    let last_year = age_max.min(sector_max);
    if first_year > last_year {
        return Err(DataError::NoOverlap {
            age_min,
            age_max,
            sector_min,
            sector_max,
        });
    }

    age.retain_years(first_year, last_year);
    sector.retain_years(first_year, last_year);
    log::info!(
        "Aligned on {first_year}-{last_year}: {} age rows, {} sector rows",
        age.len(),
        sector.len()
    );

    Ok(AlignedTables {
        age,
        sector,
        first_year,
        last_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_rows(years: std::ops::RangeInclusive<i32>) -> YearTable<AgeBracket> {
        YearTable::new(
            years
                .flat_map(|year| {
                    [AgeBracket::Total, AgeBracket::From25To30].map(|category| YearObservation {
                        year,
                        category,
                        difference: 80.0,
                    })
                })
                .collect(),
        )
    }

    fn sector_rows(years: std::ops::RangeInclusive<i32>) -> YearTable<Sector> {
        YearTable::new(
            years
                .map(|year| YearObservation {
                    year,
                    category: Sector::Energy,
                    difference: 85.0,
                })
                .collect(),
        )
    }

    #[test]
    fn period_labels_truncate_to_year() {
        assert_eq!(period_year("2008JJ00"), Some(2008));
        assert_eq!(period_year("2015"), Some(2015));
        assert_eq!(period_year("201"), None);
        assert_eq!(period_year("JJ2008"), None);
        assert_eq!(period_year("+201JJ00"), None);
    }

    #[test]
    fn invalid_period_is_an_error() {
        let rows = vec![Observation {
            line: 7,
            period: "n/a".to_string(),
            category: Sector::Energy,
            difference: 1.0,
        }];
        let err = to_year_table(rows).unwrap_err();
        assert!(matches!(err, DataError::InvalidPeriod { line: 7, .. }));
    }

    #[test]
    fn invalid_period_points_at_source_line() {
        let csv = "\
Perioden;KenmerkenBaanWerknemer;BeloningsverschilTussenManEnVrouw_1
2012JJ00;10000;80
12;10000;81
";
        let rows = crate::data::loader::read_observations::<AgeBracket, _>(
            csv.as_bytes(),
            b';',
            &crate::config::Columns::AGE,
        )
        .unwrap();
        let err = to_year_table(rows).unwrap_err();
        assert!(matches!(err, DataError::InvalidPeriod { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3:"));
    }

    #[test]
    fn tables_share_the_overlapping_range() {
        let aligned = align(age_rows(2008..=2015), sector_rows(2010..=2013)).unwrap();

        assert_eq!((aligned.first_year, aligned.last_year), (2010, 2013));
        assert_eq!(aligned.age.year_range(), Some((2010, 2013)));
        assert_eq!(aligned.sector.year_range(), Some((2010, 2013)));
        assert_eq!(aligned.age.len(), 8);
        assert_eq!(aligned.sector.len(), 4);
    }

    #[test]
    fn alignment_is_symmetric() {
        let aligned = align(age_rows(2011..=2014), sector_rows(2009..=2016)).unwrap();
        assert_eq!(aligned.age.year_range(), Some((2011, 2014)));
        assert_eq!(aligned.sector.year_range(), Some((2011, 2014)));
    }

    #[test]
    fn single_shared_year() {
        let aligned = align(age_rows(2008..=2012), sector_rows(2012..=2015)).unwrap();
        assert_eq!(aligned.age.years(), vec![2012]);
        assert_eq!(aligned.sector.years(), vec![2012]);
    }

    #[test]
    fn disjoint_ranges_are_rejected() {
        let err = align(age_rows(2008..=2010), sector_rows(2012..=2015)).unwrap_err();
        match err {
            DataError::NoOverlap {
                age_max,
                sector_min,
                ..
            } => assert_eq!((age_max, sector_min), (2010, 2012)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = align(YearTable::new(Vec::new()), sector_rows(2012..=2015)).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset("age")));
    }
}
