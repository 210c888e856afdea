//! Subcommand implementations

pub mod lines;
pub mod play;
pub mod solve;
