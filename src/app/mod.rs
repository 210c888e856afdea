//! Application layer: session configuration and wiring.
//!
//! ```text
//! SessionConfig ──▶ App ──▶ Session<P: Presentation>
//!                    │
//!                    └── seats: Human | OptimalAgent | RandomAgent
//! ```

pub mod config;
pub mod container;

pub use config::{SeatKind, SessionConfig};
pub use container::App;
