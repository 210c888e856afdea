//! Session configuration files

use std::io::Write;

use tempfile::NamedTempFile;
use tictactoe_nd::{
    Error,
    adapters::ScriptedPresentation,
    app::{App, SeatKind, SessionConfig},
    tictactoe::{Dimensionality, GameResult},
};

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file(
        r#"{
            "dimensions": 3,
            "x": "random",
            "o": "human",
            "seed": 99,
            "search": { "cache_capacity": 100000 }
        }"#,
    );

    let config = SessionConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.dimensions, Dimensionality::Three);
    assert_eq!(config.x, SeatKind::Random);
    assert_eq!(config.o, SeatKind::Human);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.search.cache_capacity, Some(100_000));
}

#[test]
fn test_round_trip_through_file() {
    let config = SessionConfig::new(Dimensionality::Three)
        .with_seats(SeatKind::Optimal, SeatKind::Random)
        .with_seed(3);
    let file = config_file(&serde_json::to_string_pretty(&config).unwrap());
    assert_eq!(SessionConfig::from_json_file(file.path()).unwrap(), config);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_invalid_seat_kind() {
    let file = config_file(r#"{ "x": "menace" }"#);
    let err = SessionConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_loaded_config_drives_a_session() {
    let file = config_file(r#"{ "x": "optimal", "o": "optimal" }"#);
    let app = App::new(SessionConfig::from_json_file(file.path()).unwrap());
    let game = app.session(ScriptedPresentation::default()).run().unwrap();
    assert_eq!(game.outcome, GameResult::Tie);
}
