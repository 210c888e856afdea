//! Presentation port - how the play loop reaches the user
//!
//! The session calls the methods in this order:
//! 1. For each ply: `show`, then `choose_move` if the seat to move is human,
//!    then `announce_move`
//! 2. `finish` once the game has a result

use crate::{
    Result,
    tictactoe::{Board, Coordinate, Game, Player},
};

/// Adapter that renders positions and gathers human input
pub trait Presentation {
    /// Display the current position before a move is chosen.
    fn show(&mut self, board: &Board, to_move: Player) -> Result<()>;

    /// Ask the user to pick one of `legal_moves` for `to_move`.
    ///
    /// `legal_moves` is in the board's coordinate order and never empty.
    fn choose_move(
        &mut self,
        board: &Board,
        to_move: Player,
        legal_moves: &[Coordinate],
    ) -> Result<Coordinate>;

    /// Report a move that has just been played.
    fn announce_move(&mut self, _player: Player, _coordinate: Coordinate) -> Result<()> {
        Ok(())
    }

    /// Report the finished game.
    fn finish(&mut self, game: &Game) -> Result<()>;
}
