//! Construction-time errors.
//!
//! The state machine itself never fails: illegal calls are reported as
//! ignored transitions. Only building an engine from bad configuration
//! produces an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("card catalog is empty")]
    EmptyCatalog,
    #[error("card catalog contains a blank name")]
    BlankName,
    #[error("card name {0:?} appears more than once in the catalog")]
    DuplicateName(String),
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
