//! Snapshot schema gate - the serialized shape consumed by observers

use blockfall::{Command, GameSession, SessionSnapshot};

#[test]
fn test_snapshot_serializes_with_stable_fields() {
    let mut session = GameSession::new(42);
    session.apply(Command::Start);
    session.apply(Command::Hold);

    let snapshot = session.snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    let board = json.get("board").and_then(|b| b.as_array()).unwrap();
    assert_eq!(board.len(), 22);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 10));

    for field in [
        "active",
        "ghost_row",
        "queue",
        "hold",
        "can_swap",
        "score",
        "level",
        "lines_cleared",
        "gravity_interval_ms",
        "started",
        "paused",
        "game_over",
        "seed",
    ] {
        assert!(json.get(field).is_some(), "missing field: {}", field);
    }

    assert_eq!(json["queue"].as_array().unwrap().len(), 3);
    assert_eq!(json["level"].as_u64(), Some(1));
    assert_eq!(json["gravity_interval_ms"].as_u64(), Some(500));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut session = GameSession::new(7);
    session.apply(Command::Start);
    session.apply(Command::HardDrop);

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
