//! Agent port - abstraction over automatic move selection

use crate::{
    Result,
    tictactoe::{Board, Coordinate, Player},
};

/// Anything that picks moves without asking the presentation
///
/// # Examples
///
/// ```
/// use tictactoe_nd::{
///     ports::Agent,
///     tictactoe::{Board, Coordinate, Player},
/// };
///
/// struct FirstEmpty;
///
/// impl Agent for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _to_move: Player) -> tictactoe_nd::Result<Coordinate> {
///         board.legal_moves().first().copied().ok_or(tictactoe_nd::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `to_move` on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no legal move.
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<Coordinate>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}
