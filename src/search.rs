//! Exhaustive minimax search over board positions
//!
//! Values are always expressed from X's point of view: `+1` means X can force
//! a win, `-1` means O can, `0` means best play from both sides ties.

pub mod cache;
pub mod minimax;
pub mod value;

pub use cache::{CacheKey, MemoCache};
pub use minimax::{Minimax, SearchConfig, SearchStats};
pub use value::Value;
