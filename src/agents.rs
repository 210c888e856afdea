//! Built-in agents: perfect play and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    search::{Minimax, SearchConfig},
    tictactoe::{Board, Coordinate, Player},
};

/// Plays the first minimax-optimal move
pub struct OptimalAgent {
    name: String,
    engine: Minimax,
}

impl OptimalAgent {
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            engine: Minimax::with_config(config),
        }
    }

    /// The engine backing this agent, with its cache
    pub fn engine(&self) -> &Minimax {
        &self.engine
    }
}

impl Agent for OptimalAgent {
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<Coordinate> {
        self.engine.best_move(board, to_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _to_move: Player) -> Result<Coordinate> {
        let moves = board.legal_moves();
        if board.winner().is_some() || moves.is_empty() {
            return Err(Error::PreconditionViolated {
                message: format!("no move to choose on a finished position ({})", board.result()),
            });
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
