use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default k-mer length indexed by the matcher
pub const DEFAULT_MINIMUM_SEARCH_LENGTH: usize = 10;

/// Default window length when scoring related genomes
pub const DEFAULT_FRAGMENT_MATCH_LENGTH: usize = 16;

/// Default percentage a genome must exceed to be reported as related
pub const DEFAULT_MATCH_PERCENT_THRESHOLD: f64 = 20.0;

/// Search parameters for a [`crate::GenomeMatcher`] and its queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Length of the k-mers stored in the index; fixed for the life of a matcher
    pub minimum_search_length: usize,

    /// Shortest match reported by fragment searches
    pub minimum_length: usize,

    /// Length of the non-overlapping windows a query genome is split into
    pub fragment_match_length: usize,

    /// Disallow the single substitution normally tolerated per match
    pub exact_match_only: bool,

    /// A related genome must cover strictly more than this percentage of windows
    pub match_percent_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            minimum_search_length: DEFAULT_MINIMUM_SEARCH_LENGTH,
            minimum_length: DEFAULT_MINIMUM_SEARCH_LENGTH,
            fragment_match_length: DEFAULT_FRAGMENT_MATCH_LENGTH,
            exact_match_only: false,
            match_percent_threshold: DEFAULT_MATCH_PERCENT_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` if it is not valid JSON, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable.
    ///
    /// Query lengths shorter than the k-mer length are deliberately not rejected
    /// here: the matcher reports them as an unsuccessful search.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_search_length == 0 {
            return Err(ConfigError::Invalid(
                "minimum_search_length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.match_percent_threshold) {
            return Err(ConfigError::Invalid(format!(
                "match_percent_threshold must be between 0 and 100, got {}",
                self.match_percent_threshold
            )));
        }
        Ok(())
    }
}
