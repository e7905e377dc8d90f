//! Row formats for the demographic CSV files and their parsers.
//!
//! Each parser turns one file's text into the lookup structure the
//! provider keeps. Any row that fails to parse fails the whole file.

use std::collections::BTreeMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::genealogy::error::DataError;
use crate::genealogy::{Decade, Gender};
use super::GenderSplit;

pub const LIFE_EXPECTANCY_FILE: &str = "life_expectancy.csv";
pub const FIRST_NAMES_FILE: &str = "first_names.csv";
pub const GENDER_PROBABILITY_FILE: &str = "gender_name_probability.csv";
pub const LAST_NAMES_FILE: &str = "last_names.csv";
pub const RANK_PROBABILITY_FILE: &str = "rank_to_probability.csv";
pub const RATES_FILE: &str = "birth_and_marriage_rates.csv";

#[derive(Debug, Deserialize)]
struct LifeExpectancyRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Period life expectancy at birth")]
    expectancy: f64,
}

#[derive(Debug, Deserialize)]
struct FirstNameRow {
    name: String,
    decade: String,
    gender: String,
    frequency: f64,
}

#[derive(Debug, Deserialize)]
struct GenderProbabilityRow {
    decade: String,
    gender: String,
    probability: f64,
}

#[derive(Debug, Deserialize)]
struct LastNameRow {
    #[serde(rename = "Decade")]
    decade: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "Rank")]
    rank: i64,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    decade: String,
    birth_rate: f64,
    marriage_rate: f64,
}

/// Deserialize every row of a headed CSV table, numbering rows from 1.
fn read_rows<T: DeserializeOwned>(file: &'static str, text: &str) -> Result<Vec<(usize, T)>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, row)| {
            row.map(|r| (i + 1, r))
                .map_err(|source| DataError::Csv { file, source })
        })
        .collect()
}

fn parse_decade(file: &'static str, row: usize, label: &str) -> Result<Decade, DataError> {
    label
        .parse::<Decade>()
        .map_err(|e| DataError::invalid(file, row, e.to_string()))
}

fn parse_gender(file: &'static str, row: usize, label: &str) -> Result<Gender, DataError> {
    label.parse::<Gender>().map_err(|e| DataError::invalid(file, row, e))
}

pub(crate) fn parse_life_expectancy(text: &str) -> Result<BTreeMap<i32, f64>, DataError> {
    let rows = read_rows::<LifeExpectancyRow>(LIFE_EXPECTANCY_FILE, text)?;
    let table: BTreeMap<i32, f64> = rows.into_iter().map(|(_, r)| (r.year, r.expectancy)).collect();
    if table.is_empty() {
        return Err(DataError::EmptyTable { file: LIFE_EXPECTANCY_FILE });
    }
    Ok(table)
}

pub(crate) fn parse_first_names(
    text: &str,
) -> Result<BTreeMap<(Decade, Gender), Vec<(String, f64)>>, DataError> {
    let mut table: BTreeMap<(Decade, Gender), Vec<(String, f64)>> = BTreeMap::new();
    for (row, r) in read_rows::<FirstNameRow>(FIRST_NAMES_FILE, text)? {
        let decade = parse_decade(FIRST_NAMES_FILE, row, &r.decade)?;
        let gender = parse_gender(FIRST_NAMES_FILE, row, &r.gender)?;
        table.entry((decade, gender)).or_default().push((r.name, r.frequency));
    }
    Ok(table)
}

pub(crate) fn parse_gender_probabilities(text: &str) -> Result<BTreeMap<Decade, GenderSplit>, DataError> {
    let mut table: BTreeMap<Decade, GenderSplit> = BTreeMap::new();
    for (row, r) in read_rows::<GenderProbabilityRow>(GENDER_PROBABILITY_FILE, text)? {
        let decade = parse_decade(GENDER_PROBABILITY_FILE, row, &r.decade)?;
        let gender = parse_gender(GENDER_PROBABILITY_FILE, row, &r.gender)?;
        let split = table.entry(decade).or_insert(GenderSplit { male: 0.0, female: 0.0 });
        match gender {
            Gender::Male => split.male = r.probability,
            Gender::Female => split.female = r.probability,
        }
    }
    Ok(table)
}

pub(crate) fn parse_last_names(text: &str) -> Result<BTreeMap<Decade, Vec<(String, i64)>>, DataError> {
    let mut table: BTreeMap<Decade, Vec<(String, i64)>> = BTreeMap::new();
    for (row, r) in read_rows::<LastNameRow>(LAST_NAMES_FILE, text)? {
        let decade = parse_decade(LAST_NAMES_FILE, row, &r.decade)?;
        table.entry(decade).or_default().push((r.last_name, r.rank));
    }
    Ok(table)
}

/// The rank table is a bare line of floats with no header.
pub(crate) fn parse_rank_probabilities(text: &str) -> Result<Vec<f64>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut probabilities = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|source| DataError::Csv { file: RANK_PROBABILITY_FILE, source })?;
        for field in record.iter() {
            let p: f64 = field.parse().map_err(|_| {
                DataError::invalid(RANK_PROBABILITY_FILE, i + 1, format!("not a number: {:?}", field))
            })?;
            probabilities.push(p);
        }
    }
    Ok(probabilities)
}

/// Birth and marriage rates share one file.
pub(crate) fn parse_rates(
    text: &str,
) -> Result<(BTreeMap<Decade, f64>, BTreeMap<Decade, f64>), DataError> {
    let mut birth_rates = BTreeMap::new();
    let mut marriage_rates = BTreeMap::new();
    for (row, r) in read_rows::<RateRow>(RATES_FILE, text)? {
        let decade = parse_decade(RATES_FILE, row, &r.decade)?;
        birth_rates.insert(decade, r.birth_rate);
        marriage_rates.insert(decade, r.marriage_rate);
    }
    if birth_rates.is_empty() {
        return Err(DataError::EmptyTable { file: RATES_FILE });
    }
    Ok((birth_rates, marriage_rates))
}
