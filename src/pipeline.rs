use anyhow::{Context, Result};

use crate::chart::figure::{compose, Figure};
use crate::config::{Columns, Settings};
use crate::data::align::{align, to_year_table, AlignedTables};
use crate::data::loader::load_file;
use crate::data::model::{AgeBracket, Sector};

/// Load both datasets and restrict them to their shared years.
pub fn load_aligned(settings: &Settings) -> Result<AlignedTables> {
    let age_path = settings.age_path();
    let age = load_file::<AgeBracket>(&age_path, settings.delimiter, &Columns::AGE)
        .and_then(to_year_table)
        .with_context(|| format!("loading age data from {}", age_path.display()))?;

    let sector_path = settings.sector_path();
    let sector = load_file::<Sector>(&sector_path, settings.delimiter, &Columns::SECTOR)
        .and_then(to_year_table)
        .with_context(|| format!("loading sector data from {}", sector_path.display()))?;

    align(age, sector).context("aligning periods")
}

/// Everything up to drawing: load, align, compose.
pub fn prepare_figure(settings: &Settings) -> Result<Figure> {
    let tables = load_aligned(settings)?;
    Ok(compose(&tables))
}
