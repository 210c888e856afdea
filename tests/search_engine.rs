//! Minimax values, best moves and cache behaviour

use tictactoe_nd::{
    search::{Minimax, SearchConfig, Value},
    tictactoe::{Board, Coordinate, Dimensionality, GameResult, Player},
};

fn board(cells: &str) -> Board {
    Board::from_string(cells).unwrap()
}

/// Plain minimax over every successor, no cache and no shortcuts
fn reference_value(board: &Board, to_move: Player) -> i32 {
    match board.result() {
        GameResult::Win(Player::X) => 1,
        GameResult::Win(Player::O) => -1,
        GameResult::Tie => 0,
        GameResult::InProgress => {
            let scores = board.legal_moves().into_iter().map(|mv| {
                let next = board.apply(mv, to_move).unwrap();
                reference_value(&next, to_move.opponent())
            });
            match to_move {
                Player::X => scores.max().unwrap(),
                Player::O => scores.min().unwrap(),
            }
        }
    }
}

const MIDGAMES: [&str; 6] = [
    "O.X......",
    "X...O....",
    "XO..X....",
    "X.O.X.O..",
    "XOXOX....",
    ".........",
];

#[test]
fn test_value_is_idempotent() {
    let mut engine = Minimax::new();
    let position = board("X...O....");

    let first = engine.value(&position, Player::X);
    let second = engine.value(&position, Player::X);
    assert_eq!(first, second);
    // the second call is answered straight from the cache
    assert_eq!(engine.stats().nodes, 1);
    assert_eq!(engine.stats().cache_hits, 1);
}

#[test]
fn test_blank_board_ties_under_perfect_play() {
    let mut engine = Minimax::new();
    assert_eq!(engine.value(&Board::new(Dimensionality::Two), Player::X), Value::Tie);
    assert_eq!(engine.value(&Board::new(Dimensionality::Two), Player::X).score(), 0);
}

#[test]
fn test_perfect_play_ties_at_every_ply() {
    let mut engine = Minimax::new();
    let mut position = Board::new(Dimensionality::Two);
    let mut to_move = Player::X;
    let mut plies = 0;

    while !position.is_terminal() {
        assert_eq!(engine.value(&position, to_move), Value::Tie, "ply {plies}");
        let mv = engine.best_move(&position, to_move).unwrap();
        position = position.apply(mv, to_move).unwrap();
        to_move = to_move.opponent();
        plies += 1;
    }

    assert_eq!(plies, 9);
    assert_eq!(position.result(), GameResult::Tie);
}

#[test]
fn test_cache_is_keyed_by_player_to_move() {
    // X X .
    // O O .
    // . . .
    let position = board("XX.OO....");

    let mut engine = Minimax::new();
    assert_eq!(engine.value(&position, Player::X), Value::XWin);
    assert_eq!(engine.value(&position, Player::O), Value::OWin);

    let mut engine = Minimax::new();
    assert_eq!(engine.value(&position, Player::O), Value::OWin);
    assert_eq!(engine.value(&position, Player::X), Value::XWin);
}

#[test]
fn test_engines_do_not_share_caches() {
    let mut warm = Minimax::new();
    warm.value(&Board::new(Dimensionality::Two), Player::X);
    assert!(warm.cache_len() > 0);

    let mut fresh = Minimax::new();
    assert_eq!(fresh.cache_len(), 0);
    for cells in MIDGAMES {
        let position = board(cells);
        let to_move = position.inferred_to_move().unwrap();
        assert_eq!(
            fresh.value(&position, to_move),
            warm.value(&position, to_move),
            "{cells}"
        );
    }
}

#[test]
fn test_values_match_uncached_reference() {
    let mut engine = Minimax::new();
    for cells in MIDGAMES {
        let position = board(cells);
        for to_move in [Player::X, Player::O] {
            assert_eq!(
                engine.value(&position, to_move).score(),
                reference_value(&position, to_move),
                "{cells} with {to_move} to move"
            );
        }
    }
}

#[test]
fn test_zero_capacity_cache_gives_same_values() {
    let mut bounded = Minimax::with_config(SearchConfig::new().with_cache_capacity(0));
    let mut unbounded = Minimax::new();
    for cells in ["XO..X....", "X.O.X.O.."] {
        let position = board(cells);
        let to_move = position.inferred_to_move().unwrap();
        assert_eq!(bounded.value(&position, to_move), unbounded.value(&position, to_move));
    }
    assert_eq!(bounded.cache_len(), 0);
    assert!(unbounded.cache_len() > 0);
}

#[test]
fn test_clear_cache() {
    let mut engine = Minimax::with_config(SearchConfig::new().with_cache_capacity(50));
    engine.value(&board("X........"), Player::O);
    assert_eq!(engine.cache_len(), 50);
    engine.clear_cache();
    assert_eq!(engine.cache_len(), 0);
    assert_eq!(engine.value(&board("X........"), Player::O), Value::Tie);
}

#[test]
fn test_best_move_takes_first_optimal_move() {
    let mut engine = Minimax::new();
    // every opening move ties, so the first cell wins the tie-break
    assert_eq!(
        engine.best_move(&Board::new(Dimensionality::Two), Player::X).unwrap(),
        Coordinate::planar(0, 0)
    );

    // X X .
    // O O .
    // . . .
    // O wins at once with (1, 2), but the block at (0, 2) also forks
    // (1, 2) and (2, 0) and comes first
    let position = board("XX.OO....");
    assert_eq!(engine.value(&position, Player::O), Value::OWin);
    assert_eq!(
        engine.best_move(&position, Player::O).unwrap(),
        Coordinate::planar(0, 2)
    );
}

#[test]
fn test_cube_immediate_win() {
    let position = board("XX....... ....O.... ....O....");
    let mut engine = Minimax::new();
    assert_eq!(engine.value(&position, Player::X), Value::XWin);
    assert_eq!(
        engine.best_move(&position, Player::X).unwrap(),
        Coordinate::spatial(0, 0, 2)
    );
}

#[test]
fn test_cube_double_threat_is_lost_for_o() {
    // X threatens (0, 0, 2) and (2, 2, 0); O can only block one
    let position = board("XX....... ....O.... .......XX");
    let mut engine = Minimax::new();
    assert_eq!(engine.value(&position, Player::O), Value::XWin);
    assert!(
        engine
            .evaluate_moves(&position, Player::O)
            .iter()
            .all(|&(_, value)| value == Value::XWin)
    );
}
