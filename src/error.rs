//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at {coordinate}: {reason}")]
    InvalidMove { coordinate: String, reason: String },

    #[error("invalid dimensionality {got} (expected 2 or 3)")]
    InvalidDimensionality { got: usize },

    #[error("precondition violated: {message}")]
    PreconditionViolated { message: String },

    #[error("game already over")]
    GameOver,

    #[error("board string has {got} cells, expected 9 or 27 in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("input closed before a move was chosen")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "perform I/O".to_string(),
            source,
        }
    }
}
