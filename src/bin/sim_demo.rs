//! Headless simulation demo: runs the built-in board with scripted
//! steering at a fixed tick and logs every event the session reports,
//! then prints the final board.

use anyhow::Result;
use munch::actor::Actor;
use munch::constants::DEFAULT_BOARD;
use munch::game::GameSession;
use munch::map::cell::CellKind;
use munch::map::direction::Direction;
use munch::map::geometry::BoardGeometry;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TICK: f32 = 1.0 / 60.0;

/// Steering inputs, in order: a direction and how long to hold it.
const SCRIPT: [(Direction, f32); 6] = [
    (Direction::Left, 1.6),
    (Direction::Up, 3.6),
    (Direction::Right, 2.4),
    (Direction::Down, 1.2),
    (Direction::Left, 2.0),
    (Direction::Up, 2.0),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut session = GameSession::with_seed(DEFAULT_BOARD, BoardGeometry::default(), 42)?;
    session.start();

    for (direction, hold) in SCRIPT {
        session.steer(direction);
        let mut left = hold;
        while left > 0.0 {
            for event in session.update(TICK) {
                info!(?event, "Tick event");
            }
            left -= TICK;
        }
    }

    info!(
        score = session.score(),
        lives = session.lives(),
        pellets_left = session.maze.pellets(),
        "Simulation finished"
    );
    print_board(&session);
    Ok(())
}

/// Prints the board with actor markers drawn over the cell symbols.
fn print_board(session: &GameSession) {
    let maze = &session.maze;
    let geometry = maze.geometry();
    let mut rows: Vec<Vec<char>> = (0..maze.height())
        .map(|y| {
            (0..maze.width())
                .map(|x| maze.get(x, y).map(CellKind::symbol).unwrap_or('?'))
                .collect()
        })
        .collect();

    let mut mark = |actor: &Actor, symbol: char| {
        let cell = geometry.world_to_cell(actor.bounds(&geometry).center());
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        if let Some(slot) = rows
            .get_mut(cell.y as usize)
            .and_then(|row| row.get_mut(cell.x as usize))
        {
            *slot = symbol;
        }
    };
    for chaser in &session.chasers {
        mark(chaser, 'G');
    }
    mark(&session.player, '@');

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
