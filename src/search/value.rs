use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameResult, Player};

/// Game-theoretic value of a position for the maximizing player X.
///
/// Variants are ordered `OWin < Tie < XWin`, so X picks the maximum and O the
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    OWin = -1,
    Tie = 0,
    XWin = 1,
}

impl Value {
    /// Integer form: -1, 0 or +1
    pub fn score(self) -> i32 {
        self as i32
    }

    /// The value of a forced win for `player`
    pub fn win_for(player: Player) -> Value {
        match player {
            Player::X => Value::XWin,
            Player::O => Value::OWin,
        }
    }

    /// Value of a finished game, `None` while it is still in progress
    pub fn from_result(result: GameResult) -> Option<Value> {
        match result {
            GameResult::Win(player) => Some(Value::win_for(player)),
            GameResult::Tie => Some(Value::Tie),
            GameResult::InProgress => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::XWin => write!(f, "+1 (X wins)"),
            Value::Tie => write!(f, "0 (tie)"),
            Value::OWin => write!(f, "-1 (O wins)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_favours_x() {
        assert!(Value::OWin < Value::Tie);
        assert!(Value::Tie < Value::XWin);
        assert_eq!(Value::XWin.score(), 1);
        assert_eq!(Value::OWin.score(), -1);
    }

    #[test]
    fn test_from_result() {
        assert_eq!(
            Value::from_result(GameResult::Win(Player::O)),
            Some(Value::OWin)
        );
        assert_eq!(Value::from_result(GameResult::Tie), Some(Value::Tie));
        assert_eq!(Value::from_result(GameResult::InProgress), None);
    }
}
