//! Game configuration.
//!
//! The engine is configured once at construction with the card catalog and an
//! optional RNG seed. Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! seed = 42
//! catalog = ["bear", "fox", "rabbit"]
//! ```
//!
//! Everything else about a session (time limit, delays, reward) is fixed; see
//! [`crate::timing`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Card faces used when no catalog is configured.
pub const DEFAULT_CATALOG: [&str; 6] = ["bear", "fox", "rabbit", "lion", "elephant", "giraffe"];

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct card face names. Each one is dealt twice per deck.
    pub catalog: Vec<String>,

    /// Seed for the shuffle RNG. `None` draws a random seed.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.iter().map(|name| (*name).to_string()).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog.
    #[must_use]
    pub fn with_catalog<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog = names.into_iter().map(Into::into).collect();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}
