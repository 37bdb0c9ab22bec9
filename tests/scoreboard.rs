//! Scoreboard persistence tests.

use std::fs;

use tempfile::tempdir;
use wargame::{PlayerStats, Scoreboard, ScoreboardError};

#[test]
fn missing_file_loads_empty_and_creates_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("scoreboard.json");

    let scoreboard = Scoreboard::load(&path).unwrap();

    assert!(scoreboard.is_empty());
    assert!(dir.path().join("data").is_dir());
    assert!(!path.exists());
    assert_eq!(scoreboard.to_string(), "No games have been played yet.");
}

#[test]
fn record_result_updates_both_players() {
    let dir = tempdir().unwrap();
    let mut scoreboard = Scoreboard::load(dir.path().join("scores.json")).unwrap();

    scoreboard.record_result("noah", "erik").unwrap();

    assert_eq!(
        scoreboard.stats("noah"),
        Some(&PlayerStats {
            games_played: 1,
            games_won: 1,
            games_lost: 0,
        })
    );
    assert_eq!(
        scoreboard.stats("erik"),
        Some(&PlayerStats {
            games_played: 1,
            games_won: 0,
            games_lost: 1,
        })
    );
    assert_eq!(scoreboard.len(), 2);
}

#[test]
fn results_survive_a_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut scoreboard = Scoreboard::load(&path).unwrap();
    scoreboard.record_result("adam", "erik").unwrap();
    scoreboard.record_result("adam", "noah").unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["adam"]["games_won"], 2);
    assert_eq!(json["erik"]["games_lost"], 1);

    let reloaded = Scoreboard::load(&path).unwrap();
    assert_eq!(reloaded.stats("adam").unwrap().games_played, 2);
    assert_eq!(reloaded.stats("noah").unwrap().games_lost, 1);
}

#[test]
fn table_is_sorted_by_wins() {
    let dir = tempdir().unwrap();
    let mut scoreboard = Scoreboard::load(dir.path().join("scores.json")).unwrap();
    scoreboard.record_result("erik", "adam").unwrap();
    scoreboard.record_result("noah", "erik").unwrap();
    scoreboard.record_result("noah", "adam").unwrap();

    let table = scoreboard.to_string();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "SCOREBOARD");
    assert!(lines[1].starts_with("noah "));
    assert!(lines[1].contains("Wins: 2  "));
    assert!(lines[1].contains("Win rate: 100.0%"));
    assert!(lines[2].starts_with("erik "));
    assert!(lines[2].contains("Win rate:  50.0%"));
    assert!(lines[3].starts_with("adam "));
    assert!(lines[3].contains("Losses: 2  "));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "not json").unwrap();

    assert!(matches!(
        Scoreboard::load(&path),
        Err(ScoreboardError::Json(_))
    ));
}

#[test]
fn win_rate_handles_no_games() {
    assert!(PlayerStats::default().win_rate().abs() < f64::EPSILON);
}
