//! In-memory presentation for tests and automation
//!
//! Answers `choose_move` from a queue of coordinates and records everything the
//! session reports, without any terminal I/O.

use std::collections::VecDeque;

use crate::{
    Error, Result,
    ports::Presentation,
    tictactoe::{Board, Coordinate, Game, Player},
};

#[derive(Debug, Default)]
pub struct ScriptedPresentation {
    moves: VecDeque<Coordinate>,
    shown: Vec<(Board, Player)>,
    announced: Vec<(Player, Coordinate)>,
    finished: Option<Game>,
}

impl ScriptedPresentation {
    pub fn new(moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Positions passed to `show`, in order
    pub fn shown(&self) -> &[(Board, Player)] {
        &self.shown
    }

    pub fn announced(&self) -> &[(Player, Coordinate)] {
        &self.announced
    }

    /// The game passed to `finish`, if the session got that far
    pub fn finished(&self) -> Option<&Game> {
        self.finished.as_ref()
    }

    /// Moves still queued
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Presentation for ScriptedPresentation {
    fn show(&mut self, board: &Board, to_move: Player) -> Result<()> {
        self.shown.push((*board, to_move));
        Ok(())
    }

    fn choose_move(
        &mut self,
        _board: &Board,
        _to_move: Player,
        _legal_moves: &[Coordinate],
    ) -> Result<Coordinate> {
        self.moves.pop_front().ok_or(Error::InputClosed)
    }

    fn announce_move(&mut self, player: Player, coordinate: Coordinate) -> Result<()> {
        self.announced.push((player, coordinate));
        Ok(())
    }

    fn finish(&mut self, game: &Game) -> Result<()> {
        self.finished = Some(game.clone());
        Ok(())
    }
}
