//! Minimax search with a turn-aware memo cache

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MemoCache, Value};
use crate::{
    Error, Result,
    tictactoe::{Board, Coordinate, Player},
};

/// Search engine settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of cached positions; `None` leaves the cache unbounded
    pub cache_capacity: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the memo cache to `capacity` entries.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }
}

/// Counters for the most recent root call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, including cache hits and terminal positions
    pub nodes: u64,
    pub cache_hits: u64,
    /// Positions resolved because the mover could complete a line at once
    pub shortcut_wins: u64,
}

/// Exhaustive minimax solver.
///
/// Each engine owns its cache, so independent engines never share results.
/// Values are cached per `(board, to_move)` and remain valid for the
/// lifetime of the engine.
#[derive(Debug, Default)]
pub struct Minimax {
    cache: MemoCache,
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            cache: MemoCache::new(config.cache_capacity),
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` with `to_move` to act, under perfect play.
    pub fn value(&mut self, board: &Board, to_move: Player) -> Value {
        self.stats = SearchStats::default();
        let value = self.solve(board, to_move);
        self.log_root("value", board, to_move, value);
        value
    }

    /// First move, in [`Board::legal_moves`] order, that keeps the position value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolated`] if the board is terminal.
    pub fn best_move(&mut self, board: &Board, to_move: Player) -> Result<Coordinate> {
        if board.is_terminal() {
            return Err(Error::PreconditionViolated {
                message: format!("best_move called on a finished position ({})", board.result()),
            });
        }

        self.stats = SearchStats::default();
        let target = self.solve(board, to_move);

        for index in board.empty_indices() {
            let next = board.place(index, to_move);
            if self.solve(&next, to_move.opponent()) == target {
                let best = Coordinate::from_index(index, board.dimensionality());
                self.log_root("best_move", board, to_move, target);
                return Ok(best);
            }
        }

        Err(Error::PreconditionViolated {
            message: format!("no successor of {} reaches value {target}", board.encode()),
        })
    }

    /// Value reached by each legal move, in legal move order.
    ///
    /// A terminal board yields an empty list.
    pub fn evaluate_moves(&mut self, board: &Board, to_move: Player) -> Vec<(Coordinate, Value)> {
        if board.is_terminal() {
            return Vec::new();
        }

        self.stats = SearchStats::default();
        let moves: Vec<_> = board
            .empty_indices()
            .map(|index| {
                let next = board.place(index, to_move);
                (
                    Coordinate::from_index(index, board.dimensionality()),
                    self.solve(&next, to_move.opponent()),
                )
            })
            .collect();
        debug!(
            board = %board.encode(),
            %to_move,
            moves = moves.len(),
            nodes = self.stats.nodes,
            "evaluated moves"
        );
        moves
    }

    /// Counters of the latest `value`, `best_move` or `evaluate_moves` call
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn solve(&mut self, board: &Board, to_move: Player) -> Value {
        self.stats.nodes += 1;

        if let Some(value) = Value::from_result(board.result()) {
            return value;
        }
        if let Some(value) = self.cache.get(board, to_move) {
            self.stats.cache_hits += 1;
            return value;
        }

        let value = self.search_successors(board, to_move);
        self.cache.insert(*board, to_move, value);
        value
    }

    fn search_successors(&mut self, board: &Board, to_move: Player) -> Value {
        let win = Value::win_for(to_move);

        if board.empty_indices().any(|index| board.wins_at(index, to_move)) {
            self.stats.shortcut_wins += 1;
            return win;
        }

        let mut found_tie = false;
        for index in board.empty_indices() {
            let next = board.place(index, to_move);
            match self.solve(&next, to_move.opponent()) {
                value if value == win => return win,
                Value::Tie => found_tie = true,
                _ => {}
            }
        }

        if found_tie {
            Value::Tie
        } else {
            Value::win_for(to_move.opponent())
        }
    }

    fn log_root(&self, operation: &str, board: &Board, to_move: Player, value: Value) {
        debug!(
            operation,
            board = %board.encode(),
            %to_move,
            %value,
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            shortcut_wins = self.stats.shortcut_wins,
            cached_positions = self.cache.len(),
            "search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Dimensionality;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_values() {
        let mut engine = Minimax::new();
        assert_eq!(engine.value(&board("XXXOO...."), Player::O), Value::XWin);
        assert_eq!(engine.value(&board("OOOXX.X.."), Player::X), Value::OWin);
        assert_eq!(engine.value(&board("OOXXXOOXO"), Player::X), Value::Tie);
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_immediate_win_is_found() {
        // X X .
        // O O .
        // . . .
        let position = board("XX.OO....");
        let mut engine = Minimax::new();
        assert_eq!(engine.value(&position, Player::X), Value::XWin);
        assert_eq!(engine.stats().shortcut_wins, 1);
        assert_eq!(engine.value(&position, Player::O), Value::OWin);
    }

    #[test]
    fn test_blank_board_is_a_tie() {
        let mut engine = Minimax::new();
        assert_eq!(
            engine.value(&Board::new(Dimensionality::Two), Player::X),
            Value::Tie
        );
        assert!(engine.cache_len() > 0);
    }

    #[test]
    fn test_best_move_on_terminal_board_fails() {
        let mut engine = Minimax::new();
        let err = engine
            .best_move(&board("XXXOO...."), Player::O)
            .unwrap_err();
        assert!(matches!(err, Error::PreconditionViolated { .. }));
    }

    #[test]
    fn test_best_move_blocks_threat() {
        // X X .
        // . O .
        // . . .
        // O must take (0, 2) or lose.
        let mut engine = Minimax::new();
        let mv = engine.best_move(&board("XX..O...."), Player::O).unwrap();
        assert_eq!(mv, Coordinate::planar(0, 2));
    }

    #[test]
    fn test_evaluate_moves_lists_every_empty_cell() {
        let mut engine = Minimax::new();
        let position = board("XX..O....");
        let moves = engine.evaluate_moves(&position, Player::O);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], (Coordinate::planar(0, 2), Value::Tie));
        assert!(moves[1..].iter().all(|&(_, value)| value == Value::XWin));
        assert!(engine.evaluate_moves(&board("OOXXXOOXO"), Player::X).is_empty());
    }
}
