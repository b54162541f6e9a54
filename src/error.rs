use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or aligning the source datasets.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("line {line}: period '{label}' does not start with a four digit year")]
    InvalidPeriod { line: usize, label: String },

    #[error("line {line}: difference '{value}' is not a number")]
    InvalidDifference { line: usize, value: String },

    #[error("{0} dataset has no rows")]
    EmptyDataset(&'static str),

    #[error(
        "no overlapping years: age data covers {age_min}-{age_max}, \
         sector data covers {sector_min}-{sector_max}"
    )]
    NoOverlap {
        age_min: i32,
        age_max: i32,
        sector_min: i32,
        sector_max: i32,
    },
}

/// Failures while writing the rendered figure.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("screenshot buffer of {width}x{height} does not hold {len} pixels")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("encoding {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
