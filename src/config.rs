//! Chunking configuration.
//!
//! Values come from, in increasing priority: defaults, a JSON config file,
//! `CHUNKEDIT_*` environment variables, and explicit CLI flags.

use crate::chunker::{DEFAULT_MAX_LENGTH, DEFAULT_OVERLAP};
use crate::error::EditError;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `max_length`
pub const MAX_LENGTH_ENV: &str = "CHUNKEDIT_MAX_LENGTH";

/// Environment variable overriding `overlap`
pub const OVERLAP_ENV: &str = "CHUNKEDIT_OVERLAP";

/// Chunk size and overlap, both in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    pub max_length: usize,
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl ChunkConfig {
    pub fn new(max_length: usize, overlap: usize) -> Self {
        Self {
            max_length,
            overlap,
        }
    }

    /// Set the maximum chunk length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the overlap between adjacent chunks
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Reject settings under which chunking could not advance.
    ///
    /// `max_length` must be positive and `overlap` strictly smaller than it.
    pub fn validate(&self) -> Result<(), EditError> {
        if self.max_length == 0 {
            return Err(EditError::InvalidConfig(
                "max_length must be greater than 0".to_string(),
            ));
        }
        if self.overlap >= self.max_length {
            return Err(EditError::InvalidConfig(format!(
                "overlap ({}) must be less than max_length ({})",
                self.overlap, self.max_length
            )));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EditError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EditError::InvalidConfig(format!("Malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `CHUNKEDIT_*` environment overrides applied
    pub fn from_env() -> Result<Self, EditError> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name.
    ///
    /// `lookup` stands in for `std::env::var` so callers can layer overrides
    /// over a config loaded from elsewhere.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, EditError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_LENGTH_ENV) {
            self.max_length = parse_env(MAX_LENGTH_ENV, &value)?;
        }
        if let Some(value) = lookup(OVERLAP_ENV) {
            self.overlap = parse_env(OVERLAP_ENV, &value)?;
        }
        Ok(self)
    }
}

fn parse_env(key: &str, value: &str) -> Result<usize, EditError> {
    value
        .trim()
        .parse()
        .map_err(|_| EditError::InvalidConfig(format!("{} is not a count: {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_valid() {
        let config = ChunkConfig::default();
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.overlap, DEFAULT_OVERLAP);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ChunkConfig::default().max_length(50).overlap(5);
        assert_eq!(config, ChunkConfig::new(50, 5));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let err = ChunkConfig::new(0, 0).validate().unwrap_err();
        assert!(err.to_string().contains("max_length"));
    }

    #[test]
    fn test_validate_rejects_overlap_not_below_length() {
        assert!(ChunkConfig::new(10, 10).validate().is_err());
        assert!(ChunkConfig::new(10, 11).validate().is_err());
        assert!(ChunkConfig::new(10, 9).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ChunkConfig::from_json_str(r#"{"max_length": 500}"#).unwrap();
        assert_eq!(config.max_length, 500);
        assert_eq!(config.overlap, DEFAULT_OVERLAP);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ChunkConfig::from_json_str("not json").is_err());
        assert!(ChunkConfig::from_json_str(r#"{"max_length": 5, "overlap": 5}"#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(MAX_LENGTH_ENV, "64"), (OVERLAP_ENV, " 8 ")]
            .into_iter()
            .collect();
        let config = ChunkConfig::default()
            .with_env_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config, ChunkConfig::new(64, 8));
    }

    #[test]
    fn test_env_override_not_a_number() {
        let result = ChunkConfig::default().with_env_overrides(|k| {
            (k == OVERLAP_ENV).then(|| "lots".to_string())
        });
        assert!(result.unwrap_err().to_string().contains(OVERLAP_ENV));
    }
}
