//! Adapters implementing the presentation port.
//!
//! [`TerminalPresentation`] drives a text UI over any reader/writer pair and
//! [`ScriptedPresentation`] replays queued moves for tests.

pub mod cursor;
pub mod render;
pub mod scripted;
pub mod terminal;

pub use cursor::MoveCursor;
pub use render::render;
pub use scripted::ScriptedPresentation;
pub use terminal::TerminalPresentation;
