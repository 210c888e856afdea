//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Coordinate, Dimensionality, GameResult, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coordinate: Coordinate,
    pub player: Player,
}

/// A game with its full history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub first: Player,
    pub moves: Vec<Move>,
    pub outcome: GameResult,
    current: Board,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(dimensionality: Dimensionality, first: Player) -> Self {
        Self::from_board(Board::new(dimensionality), first)
    }

    /// Continue from an existing position with `to_move` playing next
    pub fn from_board(initial: Board, to_move: Player) -> Self {
        Game {
            initial,
            first: to_move,
            moves: Vec::new(),
            outcome: initial.result(),
            current: initial,
        }
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.moves
            .last()
            .map_or(self.first, |last| last.player.opponent())
    }

    pub fn current_board(&self) -> Board {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.outcome != GameResult::InProgress
    }

    /// Play a move for the player to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has a result, and
    /// [`crate::Error::InvalidMove`] for an illegal coordinate.
    pub fn play(&mut self, coordinate: Coordinate) -> Result<Board, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move();
        let next = self.current.apply(coordinate, player)?;

        self.moves.push(Move { coordinate, player });
        self.current = next;
        self.outcome = next.result();

        Ok(next)
    }

    /// Get the sequence of boards from the initial position to the current one
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position it
    /// was played on. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for mv in &self.moves {
            board = board.apply(mv.coordinate, mv.player)?;
            states.push(board);
        }
        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new(Dimensionality::Two, Player::X);
        assert_eq!(game.to_move(), Player::X);

        game.play(Coordinate::planar(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(Coordinate::planar(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.moves[1].player, Player::O);
    }

    #[test]
    fn test_play_records_outcome_and_rejects_further_moves() {
        let mut game = Game::new(Dimensionality::Two, Player::X);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Coordinate::planar(row, col)).unwrap();
        }
        assert_eq!(game.outcome, GameResult::Win(Player::X));
        assert!(matches!(
            game.play(Coordinate::planar(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_invalid_move_leaves_history_untouched() {
        let mut game = Game::new(Dimensionality::Three, Player::X);
        game.play(Coordinate::spatial(1, 1, 1)).unwrap();
        let before = game.current_board();

        assert!(game.play(Coordinate::spatial(1, 1, 1)).is_err());
        assert!(game.play(Coordinate::spatial(3, 0, 0)).is_err());
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.current_board(), before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_state_sequence() {
        let mut game = Game::new(Dimensionality::Two, Player::O);
        game.play(Coordinate::planar(1, 1)).unwrap();
        game.play(Coordinate::planar(0, 0)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], Board::new(Dimensionality::Two));
        assert_eq!(states[1].encode(), "....O....");
        assert_eq!(states[2].encode(), "X...O....");
        assert_eq!(states[2], game.current_board());
    }
}
