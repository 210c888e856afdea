//! Interactive play loop
//!
//! A [`Session`] alternates between the two seats until the game ends, feeding
//! every position to its [`Presentation`]. Human seats get their moves from the
//! presentation; agent seats compute them. Search never runs while the
//! presentation is waiting for input.

use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, Presentation},
    tictactoe::{Coordinate, Dimensionality, Game, Player},
};

/// Who supplies the moves for one player
pub enum Seat {
    /// Moves are chosen through the presentation
    Human,
    /// Moves are chosen by an agent
    Agent(Box<dyn Agent>),
}

impl Seat {
    pub fn agent(agent: impl Agent + 'static) -> Self {
        Seat::Agent(Box::new(agent))
    }

    pub fn label(&self) -> &str {
        match self {
            Seat::Human => "human",
            Seat::Agent(agent) => agent.name(),
        }
    }
}

/// One game between two seats
pub struct Session<P: Presentation> {
    presentation: P,
    x: Seat,
    o: Seat,
    game: Game,
}

impl<P: Presentation> Session<P> {
    /// A new game on an empty board, X moving first
    pub fn new(dimensionality: Dimensionality, x: Seat, o: Seat, presentation: P) -> Self {
        Self::from_game(Game::new(dimensionality, Player::X), x, o, presentation)
    }

    /// Resume an existing game
    pub fn from_game(game: Game, x: Seat, o: Seat, presentation: P) -> Self {
        Self {
            presentation,
            x,
            o,
            game,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn into_presentation(self) -> P {
        self.presentation
    }

    /// Play until the game has a result.
    ///
    /// # Errors
    ///
    /// Propagates presentation and agent failures, and returns
    /// [`crate::Error::InvalidMove`] if a seat answers with an illegal move.
    pub fn run(&mut self) -> Result<Game> {
        info!(
            dimensionality = %self.game.initial.dimensionality(),
            x = self.x.label(),
            o = self.o.label(),
            "game started"
        );

        while !self.game.is_over() {
            let board = self.game.current_board();
            let to_move = self.game.to_move();
            self.presentation.show(&board, to_move)?;

            let coordinate = self.next_move(to_move)?;
            self.game.play(coordinate)?;
            debug!(
                ply = self.game.moves.len(),
                player = %to_move,
                %coordinate,
                "move played"
            );
            self.presentation.announce_move(to_move, coordinate)?;
        }

        info!(
            outcome = %self.game.outcome,
            plies = self.game.moves.len(),
            "game finished"
        );
        self.presentation.finish(&self.game)?;
        Ok(self.game.clone())
    }

    fn next_move(&mut self, to_move: Player) -> Result<Coordinate> {
        let board = self.game.current_board();
        let seat = match to_move {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        match seat {
            Seat::Human => {
                let legal = board.legal_moves();
                self.presentation.choose_move(&board, to_move, &legal)
            }
            Seat::Agent(agent) => agent.select_move(&board, to_move),
        }
    }
}
