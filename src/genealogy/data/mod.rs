//! Demographic data provider.
//!
//! Loads life expectancy, first names, gender ratios, surnames, the
//! rank-to-probability table, and birth/marriage rates from CSV files.
//! Defaults are embedded in the binary via `include_str!`; a directory
//! holding all six files can replace them wholesale.
//!
//! Every lookup answers: a missing key falls back to the nearest loaded key.

pub mod tables;

use std::collections::BTreeMap;
use std::path::Path;

use crate::genealogy::error::DataError;
use crate::genealogy::{Decade, Gender};
use tables::{
    FIRST_NAMES_FILE, GENDER_PROBABILITY_FILE, LAST_NAMES_FILE,
    LIFE_EXPECTANCY_FILE, RANK_PROBABILITY_FILE, RATES_FILE,
};

// Embedded default data files
const DEFAULT_LIFE_EXPECTANCY_CSV: &str = include_str!("../../../data/defaults/life_expectancy.csv");
const DEFAULT_FIRST_NAMES_CSV: &str = include_str!("../../../data/defaults/first_names.csv");
const DEFAULT_GENDER_PROBABILITY_CSV: &str = include_str!("../../../data/defaults/gender_name_probability.csv");
const DEFAULT_LAST_NAMES_CSV: &str = include_str!("../../../data/defaults/last_names.csv");
const DEFAULT_RANK_PROBABILITY_CSV: &str = include_str!("../../../data/defaults/rank_to_probability.csv");
const DEFAULT_RATES_CSV: &str = include_str!("../../../data/defaults/birth_and_marriage_rates.csv");

/// Probability weights for each gender in one decade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenderSplit {
    pub male: f64,
    pub female: f64,
}

impl GenderSplit {
    pub fn even() -> Self {
        Self { male: 0.5, female: 0.5 }
    }

    pub fn weight(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// Raw text of the six demographic tables.
#[derive(Clone, Copy, Debug)]
pub struct TableSources<'a> {
    pub life_expectancy: &'a str,
    pub first_names: &'a str,
    pub gender_probabilities: &'a str,
    pub last_names: &'a str,
    pub rank_probabilities: &'a str,
    pub rates: &'a str,
}

impl TableSources<'static> {
    /// The tables compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            life_expectancy: DEFAULT_LIFE_EXPECTANCY_CSV,
            first_names: DEFAULT_FIRST_NAMES_CSV,
            gender_probabilities: DEFAULT_GENDER_PROBABILITY_CSV,
            last_names: DEFAULT_LAST_NAMES_CSV,
            rank_probabilities: DEFAULT_RANK_PROBABILITY_CSV,
            rates: DEFAULT_RATES_CSV,
        }
    }
}

/// Read-only demographic registry, loaded once and shared by reference.
#[derive(Clone, Debug)]
pub struct DemographicData {
    /// Life expectancy at birth keyed by year. Never empty.
    life_expectancy: BTreeMap<i32, f64>,
    /// (name, frequency) candidates keyed by decade and gender.
    first_names: BTreeMap<(Decade, Gender), Vec<(String, f64)>>,
    gender_probabilities: BTreeMap<Decade, GenderSplit>,
    /// (surname, rank) pairs keyed by decade. Ranks start at 1.
    last_names: BTreeMap<Decade, Vec<(String, i64)>>,
    /// Sampling weight for rank `i + 1`.
    rank_probabilities: Vec<f64>,
    /// Never empty.
    birth_rates: BTreeMap<Decade, f64>,
    marriage_rates: BTreeMap<Decade, f64>,
}

impl DemographicData {
    /// Load from the tables embedded in the binary.
    pub fn defaults() -> Result<Self, DataError> {
        Self::from_sources(&TableSources::embedded())
    }

    /// Load all six tables from `dir`. A missing or malformed file fails the load.
    pub fn load_from(dir: &Path) -> Result<Self, DataError> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
        };

        let life_expectancy = read(LIFE_EXPECTANCY_FILE)?;
        let first_names = read(FIRST_NAMES_FILE)?;
        let gender_probabilities = read(GENDER_PROBABILITY_FILE)?;
        let last_names = read(LAST_NAMES_FILE)?;
        let rank_probabilities = read(RANK_PROBABILITY_FILE)?;
        let rates = read(RATES_FILE)?;

        log::info!("Reading demographic tables from {}", dir.display());
        Self::from_sources(&TableSources {
            life_expectancy: &life_expectancy,
            first_names: &first_names,
            gender_probabilities: &gender_probabilities,
            last_names: &last_names,
            rank_probabilities: &rank_probabilities,
            rates: &rates,
        })
    }

    /// Parse every table from in-memory text.
    pub fn from_sources(sources: &TableSources<'_>) -> Result<Self, DataError> {
        let life_expectancy = tables::parse_life_expectancy(sources.life_expectancy)?;
        let first_names = tables::parse_first_names(sources.first_names)?;
        let gender_probabilities = tables::parse_gender_probabilities(sources.gender_probabilities)?;
        let last_names = tables::parse_last_names(sources.last_names)?;
        let rank_probabilities = tables::parse_rank_probabilities(sources.rank_probabilities)?;
        let (birth_rates, marriage_rates) = tables::parse_rates(sources.rates)?;

        log::debug!(
            "Loaded {} life expectancy years, {} first-name groups, {} gender decades, \
             {} surname decades, {} ranks, {} rate decades",
            life_expectancy.len(),
            first_names.len(),
            gender_probabilities.len(),
            last_names.len(),
            rank_probabilities.len(),
            birth_rates.len(),
        );

        Ok(Self {
            life_expectancy,
            first_names,
            gender_probabilities,
            last_names,
            rank_probabilities,
            birth_rates,
            marriage_rates,
        })
    }

    /// Life expectancy at birth. Falls back to the nearest year, lowest on tie.
    pub fn life_expectancy(&self, year: i32) -> f64 {
        if let Some(&expectancy) = self.life_expectancy.get(&year) {
            return expectancy;
        }
        let mut best: Option<(u32, f64)> = None;
        for (&y, &expectancy) in &self.life_expectancy {
            let d = y.abs_diff(year);
            if best.map_or(true, |(best_d, _)| d < best_d) {
                best = Some((d, expectancy));
            }
        }
        // Load rejects an empty table.
        best.map(|(_, expectancy)| expectancy).unwrap_or_default()
    }

    /// Weighted first-name candidates. Empty if no decade has names for `gender`.
    pub fn first_names(&self, decade: Decade, gender: Gender) -> &[(String, f64)] {
        if let Some(names) = self.first_names.get(&(decade, gender)) {
            return names;
        }
        let available = self
            .first_names
            .keys()
            .filter(|(_, g)| *g == gender)
            .map(|(d, _)| *d);
        decade
            .nearest(available)
            .and_then(|closest| self.first_names.get(&(closest, gender)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gender weights for a decade, even split if none are loaded.
    pub fn gender_probabilities(&self, decade: Decade) -> GenderSplit {
        nearest_value(&self.gender_probabilities, decade)
            .copied()
            .unwrap_or_else(GenderSplit::even)
    }

    /// Weighted surname candidates. Ranks outside the rank table are dropped.
    pub fn last_names(&self, decade: Decade) -> Vec<(String, f64)> {
        let Some(names_ranks) = nearest_value(&self.last_names, decade) else {
            return Vec::new();
        };
        names_ranks
            .iter()
            .filter_map(|(name, rank)| {
                let index = usize::try_from(*rank).ok()?.checked_sub(1)?;
                let probability = *self.rank_probabilities.get(index)?;
                Some((name.clone(), probability))
            })
            .collect()
    }

    /// Expected children per person born in `decade`.
    pub fn birth_rate(&self, decade: Decade) -> f64 {
        // Load rejects an empty table.
        nearest_value(&self.birth_rates, decade).copied().unwrap_or_default()
    }

    /// Probability that a person born in `decade` finds a partner.
    pub fn marriage_rate(&self, decade: Decade) -> f64 {
        nearest_value(&self.marriage_rates, decade).copied().unwrap_or_default()
    }
}

/// Exact key, else the nearest decade (earlier on tie).
fn nearest_value<V>(table: &BTreeMap<Decade, V>, decade: Decade) -> Option<&V> {
    table.get(&decade).or_else(|| {
        decade
            .nearest(table.keys().copied())
            .and_then(|closest| table.get(&closest))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const LIFE: &str = "Year,Period life expectancy at birth\n1950,70.0\n1960,72.0\n1970,74.0\n";
    pub(crate) const FIRST: &str = "name,decade,gender,frequency\n\
        James,1950s,male,0.5\n\
        John,1950s,male,0.5\n\
        Mary,1950s,female,1.0\n\
        Noah,2010s,male,1.0\n";
    pub(crate) const GENDER: &str = "decade,gender,probability\n1950s,male,0.5\n1950s,female,0.5\n";
    pub(crate) const LAST: &str = "Decade,LastName,Rank\n\
        1900s,Smith,1\n\
        1900s,Jones,2\n\
        1900s,Outlier,9\n\
        1950s,Miller,1\n";
    pub(crate) const RANKS: &str = "0.6,0.4\n";
    pub(crate) const RATES: &str = "decade,birth_rate,marriage_rate\n1950s,2.0,1.0\n1960s,2.0,1.0\n";

    pub(crate) fn fixture_sources() -> TableSources<'static> {
        TableSources {
            life_expectancy: LIFE,
            first_names: FIRST,
            gender_probabilities: GENDER,
            last_names: LAST,
            rank_probabilities: RANKS,
            rates: RATES,
        }
    }

    fn fixture() -> DemographicData {
        DemographicData::from_sources(&fixture_sources()).unwrap()
    }

    #[test]
    fn test_defaults_load() {
        let data = DemographicData::defaults().unwrap();
        assert!(data.life_expectancy(1950) > 60.0);
        assert!(!data.first_names(Decade(1950), Gender::Male).is_empty());
        assert!(!data.first_names(Decade(1950), Gender::Female).is_empty());
        assert!(!data.last_names(Decade(1950)).is_empty());
        assert!(data.birth_rate(Decade(2120)) > 0.0);
        let split = data.gender_probabilities(Decade(1950));
        assert!((split.male + split.female - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_life_expectancy_exact_and_nearest() {
        let data = fixture();
        assert_eq!(data.life_expectancy(1960), 72.0);
        assert_eq!(data.life_expectancy(1962), 72.0);
        assert_eq!(data.life_expectancy(1900), 70.0);
        assert_eq!(data.life_expectancy(2100), 74.0);
        // 1955 is equidistant from 1950 and 1960: lowest year wins
        assert_eq!(data.life_expectancy(1955), 70.0);
    }

    #[test]
    fn test_first_names_fallback_per_gender() {
        let data = fixture();
        assert_eq!(data.first_names(Decade(1950), Gender::Male).len(), 2);
        // No 1990s males: nearest is 2010s (20 away) over 1950s (40 away)
        assert_eq!(data.first_names(Decade(1990), Gender::Male)[0].0, "Noah");
        // Females only exist in the 1950s
        assert_eq!(data.first_names(Decade(2010), Gender::Female)[0].0, "Mary");
    }

    #[test]
    fn test_first_names_empty_for_unknown_gender() {
        let sources = TableSources {
            first_names: "name,decade,gender,frequency\nJames,1950s,male,1.0\n",
            ..fixture_sources()
        };
        let data = DemographicData::from_sources(&sources).unwrap();
        assert!(data.first_names(Decade(1950), Gender::Female).is_empty());
    }

    #[test]
    fn test_gender_probabilities_default_even() {
        let sources = TableSources {
            gender_probabilities: "decade,gender,probability\n",
            ..fixture_sources()
        };
        let data = DemographicData::from_sources(&sources).unwrap();
        assert_eq!(data.gender_probabilities(Decade(1950)), GenderSplit::even());
    }

    #[test]
    fn test_last_names_fallback_matches_earliest_decade() {
        let data = fixture();
        assert_eq!(data.last_names(Decade(1840)), data.last_names(Decade(1900)));
    }

    #[test]
    fn test_last_names_drop_out_of_range_ranks() {
        let data = fixture();
        let names = data.last_names(Decade(1900));
        assert_eq!(names, vec![("Smith".to_string(), 0.6), ("Jones".to_string(), 0.4)]);
    }

    #[test]
    fn test_rates_nearest_decade() {
        let sources = TableSources {
            rates: "decade,birth_rate,marriage_rate\n1950s,3.0,0.9\n2000s,1.8,0.5\n",
            ..fixture_sources()
        };
        let data = DemographicData::from_sources(&sources).unwrap();
        assert_eq!(data.birth_rate(Decade(1950)), 3.0);
        assert_eq!(data.birth_rate(Decade(1970)), 3.0);
        // 1980s sits 30 from the 1950s and 20 from the 2000s
        assert_eq!(data.marriage_rate(Decade(1980)), 0.5);
        assert_eq!(data.marriage_rate(Decade(2120)), 0.5);
    }

    #[test]
    fn test_load_from_nonexistent_dir() {
        let err = DemographicData::load_from(Path::new("/nonexistent/path")).unwrap_err();
        match err {
            DataError::Io { path, .. } => assert!(path.ends_with(LIFE_EXPECTANCY_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_directory() {
        let dir = std::env::temp_dir().join(format!("ftg_tables_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let sources = fixture_sources();
        std::fs::write(dir.join(LIFE_EXPECTANCY_FILE), sources.life_expectancy).unwrap();
        std::fs::write(dir.join(FIRST_NAMES_FILE), sources.first_names).unwrap();
        std::fs::write(dir.join(GENDER_PROBABILITY_FILE), sources.gender_probabilities).unwrap();
        std::fs::write(dir.join(LAST_NAMES_FILE), sources.last_names).unwrap();
        std::fs::write(dir.join(RANK_PROBABILITY_FILE), sources.rank_probabilities).unwrap();

        // Rates file missing: the load names it
        let err = DemographicData::load_from(&dir).unwrap_err();
        assert!(err.to_string().contains(RATES_FILE));

        std::fs::write(dir.join(RATES_FILE), sources.rates).unwrap();
        let data = DemographicData::load_from(&dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(data.life_expectancy(1970), 74.0);
    }
}
