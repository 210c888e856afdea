//! Configuration types for session creation.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, search::SearchConfig, tictactoe::Dimensionality};

/// Who plays one side of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// Moves entered through the presentation
    #[default]
    Human,
    /// Perfect play from the minimax engine
    Optimal,
    /// Uniformly random legal moves
    Random,
}

/// Configuration for a play session.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```
/// use tictactoe_nd::app::{SeatKind, SessionConfig};
/// use tictactoe_nd::tictactoe::Dimensionality;
///
/// let config = SessionConfig::from_json_str(r#"{ "dimensions": 3, "o": "random" }"#)?;
/// assert_eq!(config.dimensions, Dimensionality::Three);
/// assert_eq!(config.x, SeatKind::Human);
/// assert_eq!(config.o, SeatKind::Random);
/// # Ok::<(), tictactoe_nd::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub dimensions: Dimensionality,
    pub x: SeatKind,
    pub o: SeatKind,
    /// Seed for random seats (None = non-deterministic)
    pub seed: Option<u64>,
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensionality::Two,
            x: SeatKind::Human,
            o: SeatKind::Optimal,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn new(dimensions: Dimensionality) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    /// Set both seats.
    pub fn with_seats(mut self, x: SeatKind, o: SeatKind) -> Self {
        self.x = x;
        self.o = o;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Serialization`] if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
