//! Command-line interface for playing and solving positions

pub mod commands;
pub mod output;
