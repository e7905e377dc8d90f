//! Configuration for family tree generation.

use std::path::Path;
use serde::{Serialize, Deserialize};

use super::error::ConfigError;

/// Configuration parameters for tree generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Birth year of both founders (default: 1950).
    pub epoch_year: i32,

    /// Latest year anyone may be born; death years past it are left open (default: 2120).
    pub horizon_year: i32,

    /// Youngest age at which a parent may have a child.
    pub min_parent_age: i32,

    /// Oldest age at which a parent may have a child.
    pub max_parent_age: i32,

    /// Partners are born within this many years of the person they partner.
    pub partner_age_spread: i32,

    /// Uniform +/- years applied to life expectancy when deriving a death year.
    pub death_year_spread: f64,

    /// Uniform +/- applied to the birth rate when counting children.
    pub child_count_spread: f64,

    /// Children subtracted from the expected count of a parent with no partner.
    pub single_parent_penalty: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            epoch_year: 1950,
            horizon_year: 2120,
            min_parent_age: 25,
            max_parent_age: 45,
            partner_age_spread: 10,
            death_year_spread: 10.0,
            child_count_spread: 1.5,
            single_parent_penalty: 1.0,
        }
    }
}

impl GenerationConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Same config with every random perturbation switched off.
    pub fn without_noise(self) -> Self {
        Self {
            death_year_spread: 0.0,
            child_count_spread: 0.0,
            partner_age_spread: 0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.epoch_year, 1950);
        assert_eq!(config.horizon_year, 2120);
        assert_eq!(config.min_parent_age, 25);
        assert_eq!(config.max_parent_age, 45);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "horizon_year": 2050 }"#).unwrap();
        assert_eq!(config.horizon_year, 2050);
        assert_eq!(config.epoch_year, 1950);
        assert_eq!(config.child_count_spread, 1.5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GenerationConfig::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_bad_json() {
        let path = std::env::temp_dir().join(format!("ftg_bad_config_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = GenerationConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_without_noise() {
        let config = GenerationConfig::default().without_noise();
        assert_eq!(config.death_year_spread, 0.0);
        assert_eq!(config.child_count_spread, 0.0);
        assert_eq!(config.partner_age_spread, 0);
        assert_eq!(config.single_parent_penalty, 1.0);
    }
}
