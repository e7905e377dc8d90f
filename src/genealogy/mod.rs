//! Family tree generation module
//!
//! Builds a multi-generational family tree from two founders, drawing every
//! name, birth, partnership and death from historical demographic tables.

pub mod config;
pub mod data;
pub mod decade;
pub mod entities;
pub mod error;
pub mod family_tree;
pub mod queries;
pub mod simulation;

use std::fmt;
use std::path::Path;

pub use config::GenerationConfig;
pub use data::DemographicData;
pub use decade::Decade;
pub use entities::{Gender, Person};
pub use error::{ConfigError, DataError, GenealogyError, Result};
pub use family_tree::FamilyTree;
pub use simulation::GenerationEngine;

/// Load demographic tables and generation parameters.
///
/// `None` selects the embedded tables or the default configuration.
pub fn load_inputs(
    data_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(DemographicData, GenerationConfig)> {
    let data = match data_dir {
        Some(dir) => DemographicData::load_from(dir)?,
        None => DemographicData::defaults()?,
    };
    let config = match config_path {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };
    Ok((data, config))
}

// =============================================================================
// ID TYPES
// =============================================================================

/// Identity of a person in the tree. Assigned once, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

// =============================================================================
// ID GENERATOR
// =============================================================================

/// Monotonic ID generator.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Person ids start at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn next_person(&mut self) -> PersonId {
        PersonId(self.next_id())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_person(), PersonId(1));
        assert_eq!(ids.next_person(), PersonId(2));
        assert_eq!(ids.next_person(), PersonId(3));
    }

    #[test]
    fn test_id_generator_starting_at() {
        let mut ids = IdGenerator::starting_at(40);
        assert_eq!(ids.next_id(), 40);
        assert_eq!(ids.next_id(), 41);
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }

    #[test]
    fn test_load_inputs_defaults() {
        let (data, config) = load_inputs(None, None).unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert!(data.life_expectancy(1950) > 0.0);
    }

    #[test]
    fn test_load_inputs_missing_dir() {
        let missing = std::env::temp_dir().join("family_tree_generator_no_such_dir");
        let err = load_inputs(Some(&missing), None).unwrap_err();
        assert!(matches!(err, GenealogyError::Data(_)));
        assert!(err.to_string().starts_with("demographic data error"));
    }
}
