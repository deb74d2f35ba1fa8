//! Card catalog: the static list of face names a deck is dealt from.
//!
//! A `Catalog` is validated on construction: it is non-empty, has no blank
//! names and no duplicates. Deck size is always twice the catalog length.
//!
//! ```
//! use memory_match::cards::Catalog;
//!
//! let catalog = Catalog::new(["bear", "fox"]).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.deck_len(), 4);
//! assert!(catalog.contains("fox"));
//!
//! assert!(Catalog::new(["bear", "bear"]).is_err());
//! ```

use rustc_hash::FxHashSet;

use crate::core::error::{ConfigError, Result};
use crate::core::DEFAULT_CATALOG;

/// Validated list of distinct card face names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty, blank or duplicate entries.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        {
            let mut seen = FxHashSet::default();
            for name in &names {
                if name.trim().is_empty() {
                    return Err(ConfigError::BlankName);
                }
                if !seen.insert(name.as_str()) {
                    return Err(ConfigError::DuplicateName(name.clone()));
                }
            }
        }

        Ok(Self { names })
    }

    /// The default animal catalog.
    #[must_use]
    pub fn animals() -> Self {
        Self {
            names: DEFAULT_CATALOG.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Number of distinct faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of cards in a deck dealt from this catalog.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.names.len() * 2
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::animals()
    }
}
