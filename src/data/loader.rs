use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::Columns;
use crate::error::DataError;

use super::model::{Category, Observation};

/// CBS writes this for cells without an observation.
const MISSING_MARKER: &str = ".";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one CBS dataset from a delimited text file.
///
/// Only the period, category and difference columns are kept; rows whose
/// category code is not a member of `C` are dropped.
pub fn load_file<C: Category>(
    path: &Path,
    delimiter: u8,
    columns: &Columns,
) -> Result<Vec<Observation<C>>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_observations(file, delimiter, columns)?;
    log::info!(
        "Loaded {} {} rows from {}",
        rows.len(),
        C::KIND,
        path.display()
    );
    Ok(rows)
}

/// Parse delimited data from any reader. See [`load_file`].
pub fn read_observations<C: Category, R: Read>(
    reader: R,
    delimiter: u8,
    columns: &Columns,
) -> Result<Vec<Observation<C>>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    };
    let period_idx = position(columns.period)?;
    let category_idx = position(columns.category)?;
    let difference_idx = position(columns.difference)?;

    let mut rows = Vec::new();
    let mut unknown = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let record = result?;

        let Some(category) = record
            .get(category_idx)
            .and_then(|code| code.parse::<u32>().ok())
            .and_then(C::from_code)
        else {
            unknown += 1;
            continue;
        };

        let raw_difference = record.get(difference_idx).unwrap_or("");
        if raw_difference.is_empty() || raw_difference == MISSING_MARKER {
            log::warn!(
                "{} line {line}: no value for '{}', skipping",
                C::KIND,
                category.label()
            );
            continue;
        }
        let difference = raw_difference
            .parse::<f64>()
            .map_err(|_| DataError::InvalidDifference {
                line,
                value: raw_difference.to_string(),
            })?;

        rows.push(Observation {
            line,
            period: record.get(period_idx).unwrap_or("").to_string(),
            category,
            difference,
        });
    }

    if unknown > 0 {
        log::debug!("Dropped {unknown} {} rows with unlisted categories", C::KIND);
    }

    Ok(rows)
}
