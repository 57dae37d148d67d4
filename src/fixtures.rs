//! Fixtures
//!
//! Named cart scenarios loaded from YAML files, for tests and demos.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::cart::Cart;

/// Fixture parsing errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// A cart scenario: a snapshot plus the domains to classify against it.
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart snapshot.
    pub cart: Cart,

    /// Candidate domains to classify against the cart.
    #[serde(default)]
    pub candidate_domains: Vec<String>,
}

impl CartFixture {
    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::Yaml`] when the text is not a valid fixture.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a fixture from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Load the named fixture set from `./fixtures/{name}.yaml`.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` when the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(Path::new("./fixtures").join(format!("{name}.yaml")))
    }
}
