use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use pay_gap::config::Settings;
use pay_gap::data::model::{AgeBracket, Category, Sector};

/// Codes present in the CBS tables that the chart does not use.
const UNLISTED_AGE_CODES: [u32; 2] = [10010, 10020];
const UNLISTED_SECTOR_CODES: [u32; 2] = [300000, 422500];

#[derive(Serialize)]
struct AgeRow {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "KenmerkenBaanWerknemer")]
    category: String,
    #[serde(rename = "Perioden")]
    period: String,
    #[serde(rename = "BeloningsverschilTussenManEnVrouw_1")]
    difference: String,
}

#[derive(Serialize)]
struct SectorRow {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "BedrijfstakkenBranchesSBI2008")]
    category: String,
    #[serde(rename = "Perioden")]
    period: String,
    #[serde(rename = "BeloningsverschilTussenManEnVrouw_1")]
    difference: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform noise in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}

/// CBS pads codes to a fixed width.
fn padded(code: u32) -> String {
    format!("{code:<8}")
}

fn period(year: i32) -> String {
    format!("{year}JJ00")
}

/// Young workers earn close to parity, the gap widens with age.
fn age_level(bracket: AgeBracket) -> f64 {
    match bracket {
        AgeBracket::Total => 80.0,
        other => {
            let index = AgeBracket::ALL.iter().position(|&b| b == other).unwrap_or(1) as f64;
            100.0 - 2.6 * index
        }
    }
}

fn sector_level(sector: Sector) -> f64 {
    let index = Sector::ALL.iter().position(|&s| s == sector).unwrap_or(0);
    // spread sectors over 72..96 in a scrambled order
    72.0 + ((index * 7) % Sector::ALL.len()) as f64 * 1.7
}

fn write_age(
    path: &Path,
    years: std::ops::RangeInclusive<i32>,
    rng: &mut SimpleRng,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut id = 0;
    for year in years {
        let trend = (year - 2008) as f64 * 0.6;
        let codes = AgeBracket::ALL
            .iter()
            .map(|&b| (b.code(), age_level(b)))
            .chain(UNLISTED_AGE_CODES.iter().map(|&code| (code, 90.0)));
        for (code, level) in codes {
            // one hole in the source, marked the way CBS marks it
            let difference = if year == 2009 && code == 10790 {
                ".".to_string()
            } else {
                format!("{:.0}", (level + trend + rng.jitter(1.5)).min(103.0))
            };
            writer.serialize(AgeRow {
                id,
                category: padded(code),
                period: period(year),
                difference,
            })?;
            id += 1;
        }
    }
    writer.flush()?;
    Ok(id)
}

fn write_sector(
    path: &Path,
    years: std::ops::RangeInclusive<i32>,
    rng: &mut SimpleRng,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut id = 0;
    for year in years {
        let trend = (year - 2010) as f64 * 0.5;
        let codes = Sector::ALL
            .iter()
            .map(|&s| (s.code(), sector_level(s)))
            .chain(UNLISTED_SECTOR_CODES.iter().map(|&code| (code, 84.0)));
        for (code, level) in codes {
            writer.serialize(SectorRow {
                id,
                category: padded(code),
                period: period(year),
                difference: format!("{:.0}", (level + trend + rng.jitter(2.0)).min(103.0)),
            })?;
            id += 1;
        }
    }
    writer.flush()?;
    Ok(id)
}

fn main() -> Result<()> {
    let settings = Settings::default();
    std::fs::create_dir_all(&settings.data_dir)
        .with_context(|| format!("creating {}", settings.data_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let age_path = settings.age_path();
    let age_rows = write_age(&age_path, 2008..=2015, &mut rng)?;
    println!("Wrote {age_rows} age rows to {}", age_path.display());

    let sector_path = settings.sector_path();
    let sector_rows = write_sector(&sector_path, 2010..=2015, &mut rng)?;
    println!("Wrote {sector_rows} sector rows to {}", sector_path.display());

    Ok(())
}
