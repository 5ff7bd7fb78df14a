use std::fs;

use cluedo_cli::config::SessionConfig;
use cluedo_cli::render::render;
use cluedo_cli::session::Session;
use cluedo_core::GameSnapshot;
use cluedo_core::model::card::Card;
use tempfile::tempdir;

const DEMO: &str = r#"
players:
  - name: "alice"
  - name: "bob"
  - name: "charlie"
hand: ["peacock", "white", "rope", "bathroom"]
turns:
  - { asker: "me", answerer: "alice", who: "scarlet", what: "dagger", where: "study", answer: "who" }
  - { asker: "me", answerer: "alice", who: "green", what: "lead pipe", where: "games room", answer: "no" }
  - { asker: "me", answerer: "bob", who: "green", what: "lead pipe", where: "games room", answer: "no" }
  - { asker: "me", answerer: "charlie", who: "green", what: "lead pipe", where: "games room", answer: "where" }
"#;

fn load(yaml: &str) -> SessionConfig {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("session.yaml");
    fs::write(&path, yaml).expect("write session");
    SessionConfig::from_path(&path).expect("session loads")
}

#[test]
fn demo_session_replays_and_renders() {
    let mut session = Session::new(load(DEMO)).expect("session created");
    let summary = session.run().expect("session runs");

    assert_eq!(summary.turns_applied, 4);
    assert_eq!(summary.cards_found, 6);

    let charlie = session.game().player("charlie").unwrap();
    assert_eq!(
        session.game().card(Card::GamesRoom).possessor(),
        Some(charlie)
    );

    let board = render(session.game());
    let games_room = board
        .lines()
        .find(|line| line.contains("games room"))
        .expect("games room row");
    assert!(games_room.ends_with("| charlie"));
    assert!(board.lines().any(|line| line.ends_with("| alice")));
}

#[test]
fn demo_session_exports_json() {
    let mut session = Session::new(load(DEMO)).expect("session created");
    session.run().expect("session runs");

    let json = GameSnapshot::to_json(session.game()).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let cards = value["cards"].as_array().expect("card list");
    assert_eq!(cards.len(), Card::COUNT);
    let scarlet = cards
        .iter()
        .find(|card| card["name"] == "scarlet")
        .expect("scarlet");
    assert_eq!(scarlet["possessor"], "alice");
    assert_eq!(value["players"][0]["name"], "me");
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.yaml");
    let err = SessionConfig::from_path(&path).expect_err("missing file");
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn invalid_session_is_rejected_on_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("session.yaml");
    fs::write(&path, DEMO.replace("\"bob\"", "\"alice\"")).expect("write session");
    let err = SessionConfig::from_path(&path).expect_err("duplicate player");
    assert!(err.to_string().contains("listed more than once"));
}
