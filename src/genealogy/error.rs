//! Error types for loading demographic data and configuration.
//!
//! Generation itself never fails: empty windows, zero child counts and
//! unusable weights all resolve to "no children" or a fallback value.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load one of the demographic tables.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed into the expected columns
    #[error("malformed row in {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A field parsed but holds an unusable value
    #[error("invalid value in {file} (row {row}): {message}")]
    InvalidField {
        file: &'static str,
        row: usize,
        message: String,
    },

    /// A table with no fallback value loaded zero rows
    #[error("{file} contains no data rows")]
    EmptyTable { file: &'static str },
}

impl DataError {
    pub fn invalid(file: &'static str, row: usize, message: impl Into<String>) -> Self {
        Self::InvalidField { file, row, message: message.into() }
    }
}

/// Failure to load a generation configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for the genealogy library.
#[derive(Error, Debug)]
pub enum GenealogyError {
    #[error("demographic data error: {0}")]
    Data(#[from] DataError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for genealogy operations
pub type Result<T> = std::result::Result<T, GenealogyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = DataError::EmptyTable { file: "life_expectancy.csv" };
        assert_eq!(err.to_string(), "life_expectancy.csv contains no data rows");

        let err = DataError::invalid("first_names.csv", 3, "unknown gender \"x\"");
        assert!(err.to_string().contains("first_names.csv"));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_wrapping_into_genealogy_error() {
        let err: GenealogyError = DataError::EmptyTable { file: "last_names.csv" }.into();
        assert!(matches!(err, GenealogyError::Data(_)));
        assert!(err.to_string().starts_with("demographic data error"));
    }
}
