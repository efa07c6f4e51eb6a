//! Integration tests for the grue CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a small valid world.
fn test_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
  "name": "Cottage",
  "start": "porch",
  "areas": [
    {
      "key": "porch",
      "name": "Porch",
      "description": "A creaking porch.",
      "exits": { "north": "parlor" },
      "blocked": { "south": "The garden gate is locked." },
      "doors": [
        {
          "name": "front door",
          "direction": "north",
          "refusal": "The front door is shut.",
          "opening": "The front door creaks open."
        }
      ],
      "containers": [
        {
          "name": "flower pot",
          "contents": [
            { "name": "brass key", "description": "A tag reads: PARLOR." }
          ]
        }
      ]
    },
    {
      "key": "parlor",
      "name": "Parlor",
      "description": { "light": "candle", "lit": "Portraits line the walls." },
      "exits": { "south": "porch" }
    }
  ]
}
"#,
    )
    .unwrap();
    dir
}

/// Create a temp directory holding a world with an exit to nowhere.
fn broken_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
  "name": "Broken",
  "start": "hall",
  "areas": [
    { "key": "hall", "name": "Hall", "description": "Empty.", "exits": { "east": "void" } }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn grue() -> Command {
    Command::cargo_bin("grue").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_prints_start_area_before_input() {
    grue()
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("West of House").and(predicate::str::contains(
            "There is a small mailbox here.",
        )));
}

#[test]
fn play_mailbox_and_leaflet() {
    grue()
        .arg("play")
        .write_stdin("open mailbox\ntake leaflet\nread leaflet\ninventory\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Opening the small mailbox reveals a leaflet.")
                .and(predicate::str::contains("Taken."))
                .and(predicate::str::contains("WELCOME TO ZORK!"))
                .and(predicate::str::contains("You are carrying:")),
        );
}

#[test]
fn play_misses_are_not_fatal() {
    grue()
        .arg("play")
        .write_stdin("\nxyzzy\nread leaflet\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I beg your pardon?")
                .and(predicate::str::contains("I do not know the word \"xyzzy\""))
                .and(predicate::str::contains("You can't see any leaflet here!")),
        );
}

#[test]
fn play_with_suggestions() {
    grue()
        .args(["play", "--suggest"])
        .write_stdin("nroth\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Did you mean \"north\"?"));
}

#[test]
fn play_from_start_area() {
    grue()
        .args(["play", "--start", "behind_house"])
        .write_stdin("west\nopen window\nwest\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The kitchen window is closed.")
                .and(predicate::str::contains("With great effort"))
                .and(predicate::str::contains("Kitchen")),
        );
}

#[test]
fn play_unknown_start_area_fails() {
    grue()
        .args(["play", "--start", "cellar"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: area not found: cellar"));
}

#[test]
fn play_custom_world() {
    let dir = test_world();
    let path = dir.path().join("world.json");
    grue()
        .args(["play", "-w", path.to_str().unwrap()])
        .write_stdin("north\nopen door\nnorth\nsouth\nopen pot\ntake key\nread key\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The front door is shut.")
                .and(predicate::str::contains("The front door creaks open."))
                .and(predicate::str::contains("likely to be eaten by a grue"))
                .and(predicate::str::contains(
                    "Opening the flower pot reveals a brass key.",
                ))
                .and(predicate::str::contains("A tag reads: PARLOR.")),
        );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_built_in_world() {
    grue()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed for 'Above Ground'")
                .and(predicate::str::contains(
                    "18 areas, 6 items, 2 containers, 1 door",
                )),
        );
}

#[test]
fn check_custom_world() {
    let dir = test_world();
    let path = dir.path().join("world.json");
    grue()
        .args(["check", "--world", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 areas, 1 item, 1 container, 1 door"));
}

#[test]
fn check_reports_dangling_exit() {
    let dir = broken_world();
    let path = dir.path().join("world.json");
    grue()
        .args(["check", "--world", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined area \"void\""));
}

#[test]
fn check_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    grue()
        .args(["check", "--world", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_areas() {
    grue()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("west_of_house")
                .and(predicate::str::contains("Living Room"))
                .and(predicate::str::contains("18 areas")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_to_stdout() {
    grue()
        .arg("export")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"start\": \"west_of_house\"")
                .and(predicate::str::contains("brass lantern")),
        );
}

#[test]
fn exported_world_passes_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("above.json");
    grue()
        .args(["export", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    grue()
        .args(["check", "-w", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("18 areas"));
}
