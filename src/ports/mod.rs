//! Ports (trait boundaries) for external collaborators.
//!
//! The play loop only talks to the outside world through these traits:
//! a [`Presentation`] shows positions and collects human moves, and an
//! [`Agent`] chooses moves on its own.

pub mod agent;
pub mod presentation;

pub use agent::Agent;
pub use presentation::Presentation;
