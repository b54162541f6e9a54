use std::fmt;

// ---------------------------------------------------------------------------
// Category – a fixed CBS code → label lookup table
// ---------------------------------------------------------------------------

/// A closed set of CBS category codes with human readable labels.
pub trait Category: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Dataset name used in log and error messages.
    const KIND: &'static str;

    /// Every member, in ascending code order.
    const ALL: &'static [Self];

    fn code(self) -> u32;

    fn label(self) -> &'static str;

    fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Age brackets (dataset 81901NED)
// ---------------------------------------------------------------------------

/// Age brackets, ordered by CBS code. `Total` aggregates all brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBracket {
    Total,
    From15To20,
    From20To25,
    From25To30,
    From30To35,
    From35To40,
    From40To45,
    From45To50,
    From50To55,
    From55To60,
    From60To65,
    From65To75,
}

impl AgeBracket {
    /// The sentinel code for the aggregate over all ages.
    pub const TOTAL_CODE: u32 = 10000;

    pub fn is_total(self) -> bool {
        self == AgeBracket::Total
    }
}

impl Category for AgeBracket {
    const KIND: &'static str = "age";

    const ALL: &'static [Self] = &[
        AgeBracket::Total,
        AgeBracket::From15To20,
        AgeBracket::From20To25,
        AgeBracket::From25To30,
        AgeBracket::From30To35,
        AgeBracket::From35To40,
        AgeBracket::From40To45,
        AgeBracket::From45To50,
        AgeBracket::From50To55,
        AgeBracket::From55To60,
        AgeBracket::From60To65,
        AgeBracket::From65To75,
    ];

    fn code(self) -> u32 {
        match self {
            AgeBracket::Total => Self::TOTAL_CODE,
            AgeBracket::From15To20 => 10690,
            AgeBracket::From20To25 => 10700,
            AgeBracket::From25To30 => 10710,
            AgeBracket::From30To35 => 10720,
            AgeBracket::From35To40 => 10730,
            AgeBracket::From40To45 => 10740,
            AgeBracket::From45To50 => 10750,
            AgeBracket::From50To55 => 10760,
            AgeBracket::From55To60 => 10770,
            AgeBracket::From60To65 => 10780,
            AgeBracket::From65To75 => 10790,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeBracket::Total => "Total",
            AgeBracket::From15To20 => "15 to 20",
            AgeBracket::From20To25 => "20 to 25",
            AgeBracket::From25To30 => "25 to 30",
            AgeBracket::From30To35 => "30 to 35",
            AgeBracket::From35To40 => "35 to 40",
            AgeBracket::From40To45 => "40 to 45",
            AgeBracket::From45To50 => "45 to 50",
            AgeBracket::From50To55 => "50 to 55",
            AgeBracket::From55To60 => "55 to 60",
            AgeBracket::From60To65 => "60 to 65",
            AgeBracket::From65To75 => "65 to 75",
        }
    }
}

// ---------------------------------------------------------------------------
// Industry sectors (dataset 81920NED, SBI 2008)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sector {
    Agriculture,
    Manufacturing,
    Energy,
    WaterAndWaste,
    Construction,
    WholesaleAndRetail,
    Transportation,
    HotelAndFood,
    InformationAndCommunication,
    Financial,
    RealEstate,
    Consultancy,
    Government,
    Education,
    HealthAndSocialWork,
}

impl Category for Sector {
    const KIND: &'static str = "sector";

    const ALL: &'static [Self] = &[
        Sector::Agriculture,
        Sector::Manufacturing,
        Sector::Energy,
        Sector::WaterAndWaste,
        Sector::Construction,
        Sector::WholesaleAndRetail,
        Sector::Transportation,
        Sector::HotelAndFood,
        Sector::InformationAndCommunication,
        Sector::Financial,
        Sector::RealEstate,
        Sector::Consultancy,
        Sector::Government,
        Sector::Education,
        Sector::HealthAndSocialWork,
    ];

    fn code(self) -> u32 {
        match self {
            Sector::Agriculture => 301000,
            Sector::Manufacturing => 307500,
            Sector::Energy => 346600,
            Sector::WaterAndWaste => 348000,
            Sector::Construction => 350000,
            Sector::WholesaleAndRetail => 354200,
            Sector::Transportation => 383100,
            Sector::HotelAndFood => 389100,
            Sector::InformationAndCommunication => 391600,
            Sector::Financial => 396300,
            Sector::RealEstate => 402000,
            Sector::Consultancy => 403300,
            Sector::Government => 417400,
            Sector::Education => 419000,
            Sector::HealthAndSocialWork => 422400,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Sector::Agriculture => "Agriculture, forestry and fishing",
            Sector::Manufacturing => "Manufacturing",
            Sector::Energy => "Energy",
            Sector::WaterAndWaste => "Water and waste management",
            Sector::Construction => "Construction",
            Sector::WholesaleAndRetail => "Wholesale and retail",
            Sector::Transportation => "Transportation and storage",
            Sector::HotelAndFood => "Hotel and food service",
            Sector::InformationAndCommunication => "Information and communication",
            Sector::Financial => "Financial institutions",
            Sector::RealEstate => "Real estate",
            Sector::Consultancy => "Consultancy",
            Sector::Government => "Government",
            Sector::Education => "Education",
            Sector::HealthAndSocialWork => "Health and social work",
        }
    }
}

// ---------------------------------------------------------------------------
// Rows and tables
// ---------------------------------------------------------------------------

/// One loaded row, period label still as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<C> {
    /// Line in the source file, header being line 1.
    pub line: usize,
    pub period: String,
    pub category: C,
    /// Female hourly wage as a percentage of the male hourly wage.
    pub difference: f64,
}

/// One row after its period has been truncated to a year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearObservation<C> {
    pub year: i32,
    pub category: C,
    pub difference: f64,
}

/// Rows of one dataset, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTable<C> {
    pub rows: Vec<YearObservation<C>>,
}

impl<C: Category> YearTable<C> {
    pub fn new(rows: Vec<YearObservation<C>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(min, max)` year, or `None` for an empty table.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.rows.iter().map(|r| r.year).max()
    }

    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &YearObservation<C>> {
        self.rows.iter().filter(move |r| r.year == year)
    }

    /// First value recorded for `category` in `year`.
    pub fn value(&self, year: i32, category: C) -> Option<f64> {
        self.in_year(year)
            .find(|r| r.category == category)
            .map(|r| r.difference)
    }

    /// Keep only rows with `min <= year <= max`.
    pub fn retain_years(&mut self, min: i32, max: i32) {
        self.rows.retain(|r| (min..=max).contains(&r.year));
    }
}
