//! Cursor over the legal moves of a position

use crate::{Error, Result, tictactoe::Coordinate};

/// Selection over an ordered, non-empty list of legal moves.
///
/// `next`/`previous` walk the list with wrap-around. `slice_step` jumps to the
/// adjacent slice along axis 0 and lands on the closest legal move there.
#[derive(Debug, Clone)]
pub struct MoveCursor {
    moves: Vec<Coordinate>,
    index: usize,
}

impl MoveCursor {
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolated`] if there are no moves.
    pub fn new(moves: Vec<Coordinate>) -> Result<Self> {
        if moves.is_empty() {
            return Err(Error::PreconditionViolated {
                message: "cursor needs at least one legal move".to_string(),
            });
        }
        Ok(Self { moves, index: 0 })
    }

    pub fn current(&self) -> Coordinate {
        self.moves[self.index]
    }

    pub fn next(&mut self) -> Coordinate {
        self.index = (self.index + 1) % self.moves.len();
        self.current()
    }

    pub fn previous(&mut self) -> Coordinate {
        self.index = (self.index + self.moves.len() - 1) % self.moves.len();
        self.current()
    }

    /// Move to the closest legal move in the slice `delta` steps away along
    /// axis 0, wrapping around. Stays put if that slice has no legal move.
    pub fn slice_step(&mut self, delta: isize) -> Coordinate {
        let current = self.current();
        let target = (current.axis(0) as isize + delta).rem_euclid(3) as usize;
        let closest = self
            .moves
            .iter()
            .enumerate()
            .filter(|(_, mv)| mv.axis(0) == target)
            .min_by_key(|(_, mv)| distance_within_slice(&current, mv));
        if let Some((index, _)) = closest {
            self.index = index;
        }
        self.current()
    }

    /// Jump to a specific move if it is in the list
    pub fn select(&mut self, coordinate: Coordinate) -> bool {
        match self.moves.iter().position(|&mv| mv == coordinate) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}

/// Manhattan distance over every axis but the first
fn distance_within_slice(a: &Coordinate, b: &Coordinate) -> usize {
    a.axes()
        .iter()
        .zip(b.axes())
        .skip(1)
        .map(|(x, y)| x.abs_diff(*y))
        .sum()
}
