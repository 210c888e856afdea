//! Wiring of seats and presentations into sessions.

use tracing::debug;

use super::config::{SeatKind, SessionConfig};
use crate::{
    agents::{OptimalAgent, RandomAgent},
    ports::Presentation,
    session::{Seat, Session},
    tictactoe::Player,
};

/// Builds sessions from a [`SessionConfig`].
///
/// The app owns the configuration; the presentation is injected per session,
/// so the same app can drive a terminal or a scripted test double.
///
/// ```
/// use tictactoe_nd::adapters::ScriptedPresentation;
/// use tictactoe_nd::app::{App, SeatKind, SessionConfig};
/// use tictactoe_nd::tictactoe::GameResult;
///
/// let config = SessionConfig::default().with_seats(SeatKind::Optimal, SeatKind::Optimal);
/// let game = App::new(config).session(ScriptedPresentation::default()).run()?;
/// assert_eq!(game.outcome, GameResult::Tie);
/// # Ok::<(), tictactoe_nd::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    config: SessionConfig,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Create a fresh session on an empty board.
    pub fn session<P: Presentation>(&self, presentation: P) -> Session<P> {
        let x = self.seat(Player::X, self.config.x);
        let o = self.seat(Player::O, self.config.o);
        debug!(
            dimensionality = %self.config.dimensions,
            x = x.label(),
            o = o.label(),
            "session created"
        );
        Session::new(self.config.dimensions, x, o, presentation)
    }

    fn seat(&self, player: Player, kind: SeatKind) -> Seat {
        let name = format!("{kind:?} {player}").to_lowercase();
        match kind {
            SeatKind::Human => Seat::Human,
            SeatKind::Optimal => Seat::agent(OptimalAgent::with_config(name, self.config.search)),
            SeatKind::Random => match self.config.seed {
                // distinct streams so two random seats do not mirror each other
                Some(seed) => Seat::agent(RandomAgent::with_seed(name, seat_seed(seed, player))),
                None => Seat::agent(RandomAgent::new(name)),
            },
        }
    }
}

fn seat_seed(seed: u64, player: Player) -> u64 {
    match player {
        Player::X => seed,
        Player::O => seed.wrapping_add(1),
    }
}
