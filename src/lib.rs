//! Tic-tac-toe on 3×3 and 3×3×3 boards with exact minimax evaluation
//!
//! This crate provides:
//! - Immutable board model with win detection over every winning line
//! - Exhaustive minimax search with a turn-aware memo cache
//! - Optimal and random agents behind a common move-selection port
//! - A play loop driving pluggable presentations (terminal, scripted)

pub mod adapters;
pub mod agents;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
