use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::Error;

/// Batch sizes per entity kind. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub places: usize,
    pub hotels: usize,
    pub restaurants: usize,
    pub transportation: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            places: 8,
            hotels: 6,
            restaurants: 10,
            transportation: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads a TOML file such as:
    ///
    /// ```toml
    /// places = 12
    /// restaurants = 4
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
