//! Tic-tac-toe rules on 3×3 and 3×3×3 boards

pub mod board;
pub mod game;
pub mod lines;

pub use board::{
    Board, Coordinate, Dimensionality, GameResult, MAX_CELLS, MAX_DIMENSIONS, Mark, Player, SIDE,
};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES_2D, WINNING_LINES_3D};
