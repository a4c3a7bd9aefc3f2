//! Integration tests for the arena CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arena() -> Command {
    Command::cargo_bin("arena").unwrap()
}

fn sure_hit_args() -> Vec<&'static str> {
    vec![
        "calc",
        "--player-hit",
        "100",
        "--player-dmg",
        "10",
        "--player-crit",
        "0",
        "--player-hp",
        "20",
        "--enemy-hit",
        "100",
        "--enemy-dmg",
        "10",
        "--enemy-crit",
        "0",
        "--enemy-hp",
        "10",
        "--ruleset",
        "1rn",
    ]
}

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

#[test]
fn calc_certain_victory() {
    arena()
        .args(sure_hit_args())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("numerator:   1")
                .and(predicate::str::contains("denominator: 1"))
                .and(predicate::str::contains("100.000000")),
        );
}

#[test]
fn calc_json_output() {
    let mut args = sure_hit_args();
    args.extend(["--format", "json"]);
    arena()
        .args(args)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""numerator": "1""#)
                .and(predicate::str::contains(r#""denominator": "1""#))
                .and(predicate::str::contains(r#""ruleset": "one_rn""#)),
        );
}

#[test]
fn calc_coin_flip() {
    arena()
        .args([
            "calc",
            "--player-hit",
            "50",
            "--player-dmg",
            "10",
            "--player-hp",
            "10",
            "--enemy-hit",
            "50",
            "--enemy-dmg",
            "10",
            "--enemy-hp",
            "10",
            "--game",
            "Gaiden",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""numerator": "2""#)
                .and(predicate::str::contains(r#""denominator": "3""#)),
        );
}

#[test]
fn calc_fills_defaults_with_warnings() {
    arena()
        .args([
            "calc",
            "--player-dmg",
            "10",
            "--player-hp",
            "20",
            "--enemy-dmg",
            "10",
            "--enemy-hp",
            "10",
            "--ruleset",
            "2rn",
        ])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("player hit: missing, defaulted to 100")
                .and(predicate::str::contains("enemy crit: missing, defaulted to 0")),
        )
        .stdout(predicate::str::contains("denominator: 1"));
}

#[test]
fn calc_player_cannot_hit() {
    arena()
        .args([
            "calc",
            "--player-hit",
            "0",
            "--player-dmg",
            "10",
            "--player-hp",
            "1",
            "--enemy-dmg",
            "10",
            "--enemy-hp",
            "1",
            "--game",
            "fates",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""numerator": "0""#)
                .and(predicate::str::contains(r#""denominator": "1""#)),
        );
}

#[test]
fn calc_follow_up_changes_the_odds() {
    let base = [
        "calc",
        "--player-hit",
        "100",
        "--player-dmg",
        "10",
        "--player-hp",
        "10",
        "--enemy-hit",
        "100",
        "--enemy-dmg",
        "10",
        "--enemy-hp",
        "20",
        "--ruleset",
        "1rn",
        "--format",
        "json",
    ];
    arena()
        .args(base)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""numerator": "0""#));
    // The enemy counter kills before the follow-up can land.
    arena()
        .args(base)
        .args(["--follow-up", "player"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""numerator": "0""#));
    let mut tougher = base.to_vec();
    tougher[6] = "11";
    arena()
        .args(tougher)
        .args(["--follow-up", "player"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""numerator": "1""#));
}

#[test]
fn calc_rejects_out_of_range() {
    arena()
        .args([
            "calc",
            "--player-hit",
            "120",
            "--player-dmg",
            "-3",
            "--player-hp",
            "10",
            "--enemy-dmg",
            "10",
            "--enemy-hp",
            "10",
            "--ruleset",
            "1rn",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("player hit: must be between 0 and 100")
                .and(predicate::str::contains("player damage: must not be negative"))
                .and(predicate::str::contains("2 invalid input fields")),
        );
}

#[test]
fn calc_rejects_endless_battle() {
    arena()
        .args([
            "calc",
            "--player-dmg",
            "0",
            "--player-hp",
            "10",
            "--enemy-hit",
            "0",
            "--enemy-dmg",
            "10",
            "--enemy-hp",
            "10",
            "--ruleset",
            "1rn",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("this battle will never end"));
}

#[test]
fn calc_requires_a_ruleset() {
    arena()
        .args([
            "calc",
            "--player-dmg",
            "5",
            "--player-hp",
            "10",
            "--enemy-dmg",
            "5",
            "--enemy-hp",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select a game or a ruleset"));
}

#[test]
fn calc_unknown_game() {
    arena()
        .args([
            "calc",
            "--player-dmg",
            "5",
            "--player-hp",
            "10",
            "--enemy-dmg",
            "5",
            "--enemy-hp",
            "10",
            "--game",
            "Three Houses",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown game: Three Houses"));
}

#[test]
fn calc_refuses_oversized_battle() {
    arena()
        .args([
            "calc",
            "--player-dmg",
            "10",
            "--player-hp",
            "4294967295",
            "--enemy-dmg",
            "1",
            "--enemy-hp",
            "10",
            "--ruleset",
            "2rn",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("battle too long to evaluate"));
}

#[test]
fn calc_json_report_shape() {
    let mut args = sure_hit_args();
    args.extend(["--follow-up", "enemy", "--format", "json"]);
    let output = arena().args(args).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields: Vec<_> = report.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        fields,
        ["denominator", "follow_up", "numerator", "percent", "ruleset"]
    );
    assert_eq!(report["follow_up"], "enemy");
    assert_eq!(report["numerator"], "1");
    assert_eq!(report["percent"], 100.0);
}

#[test]
fn calc_unsupported_format() {
    let mut args = sure_hit_args();
    args.extend(["--format", "xml"]);
    arena()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// file
// ---------------------------------------------------------------------------

#[test]
fn file_evaluates_json_battle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("duel.json");
    fs::write(
        &path,
        r#"{
    "player": { "hit": 50, "damage": 10, "crit": 0, "hp": 10 },
    "enemy": { "hit": 50, "damage": 10, "crit": 0, "hp": 10 },
    "ruleset": "one_rn"
}"#,
    )
    .unwrap();

    arena()
        .args(["file", path.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""numerator": "2""#)
                .and(predicate::str::contains(r#""follow_up": "neither""#)),
        );
}

#[test]
fn file_missing() {
    let dir = TempDir::new().unwrap();
    arena()
        .args(["file", dir.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn file_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    arena()
        .args(["file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid battle file"));
}

// ---------------------------------------------------------------------------
// games
// ---------------------------------------------------------------------------

#[test]
fn games_lists_catalogue() {
    arena()
        .arg("games")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Blazing Sword")
                .and(predicate::str::contains("Thracia 776"))
                .and(predicate::str::contains("Fates"))
                .and(predicate::str::contains("14 games")),
        );
}
