//! Config file loading tests.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_core::{
    ConfigErrorKind, Difficulty, Mark, Match, MatchConfig, Phase, StartingPlayer,
};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        difficulty = "Easy"
        starting_player = "player"
        human_mark = "X"
        seed = 7
        "#,
    );

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.starting_player(), StartingPlayer::Human);
    assert_eq!(*config.human_mark(), Mark::A);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Read(_)));
}

#[test]
fn test_invalid_values_fail_fast() {
    let cases = [
        (r#"difficulty = "medium""#, "difficulty"),
        (r#"starting_player = "spectator""#, "starting player"),
        (r#"human_mark = "z""#, "mark"),
    ];
    for (content, needle) in cases {
        let file = write_config(content);
        let err = MatchConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains(needle), "{}", err);
        assert!(err.file.ends_with(".rs"));
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let file = write_config("seed = \"abc\"");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_loaded_config_drives_match() {
    let file = write_config(
        r#"
        difficulty = "hard"
        starting_player = "computer"
        human_mark = "o"
        "#,
    );
    let config = MatchConfig::from_file(file.path()).unwrap();
    let game = Match::new(config);

    assert_eq!(game.computer_mark(), Mark::A);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].mark, Mark::A);
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
}

#[test]
fn test_parse_errors_point_at_caller() {
    let line = line!() + 1;
    let err = tictactoe_core::parse_difficulty("medium").unwrap_err();
    assert!(err.file.ends_with("config_test.rs"), "{}", err.file);
    assert_eq!(err.line, line);

    let err = tictactoe_core::parse_starting_player("spectator").unwrap_err();
    assert!(err.file.ends_with("config_test.rs"));

    let err = tictactoe_core::parse_mark("z").unwrap_err();
    assert!(err.file.ends_with("config_test.rs"));
}
