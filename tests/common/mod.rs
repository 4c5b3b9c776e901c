#![allow(dead_code)]

use munch::events::GameEvent;
use munch::game::GameSession;
use munch::map::geometry::BoardGeometry;
use munch::map::grid::Maze;

/// Fixed tick used across the integration tests (60 Hz).
pub const TICK: f32 = 1.0 / 60.0;

/// Builds a maze document from body rows, deriving the header.
pub fn document(rows: &[&str]) -> String {
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut text = format!("munch maze {}x{}\n", width, rows.len());
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Parses body rows into a maze with the stock geometry.
pub fn maze(rows: &[&str]) -> Maze {
    Maze::from_document(&document(rows), BoardGeometry::default()).expect("fixture should parse")
}

/// A started session over `rows` with a fixed rng seed.
pub fn session(rows: &[&str], seed: u64) -> GameSession {
    let mut session = GameSession::with_seed(&document(rows), BoardGeometry::default(), seed)
        .expect("fixture should parse");
    session.start();
    session
}

/// Runs `ticks` fixed steps, collecting every event.
pub fn run_ticks(session: &mut GameSession, ticks: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(session.update(TICK));
    }
    events
}
