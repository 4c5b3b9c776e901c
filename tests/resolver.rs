use glam::{UVec2, Vec2};
use munch::map::cell::{CellKind, TraversalFlags};
use munch::map::direction::Direction;
use munch::systems::resolver::{actor_region, probe_blocked, resolve_step, StepOutcome};
use speculoos::prelude::*;

mod common;

// Pellet at (4, 1), energizer at (7, 1), door at (4, 4), chasers parked
// in sealed pockets at the bottom.
const ROWS: [&str; 9] = [
    "#########",
    "#0  *  +#",
    "# ##### #",
    "# #   # #",
    "# ##o## #",
    "#       #",
    "#########",
    "#1#2#3#4#",
    "#########",
];

#[test]
fn test_clear_step_in_open_corridor() {
    let maze = common::maze(&ROWS);
    let outcome = resolve_step(Vec2::new(20.0, 120.0), Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::Clear);
}

#[test]
fn test_wall_blocks_travel() {
    let maze = common::maze(&ROWS);
    assert_that(&resolve_step(Vec2::new(20.0, 120.0), Direction::Up, &maze))
        .is_equal_to(StepOutcome::Blocked);
    assert_that(&resolve_step(Vec2::new(20.0, 120.0), Direction::Left, &maze))
        .is_equal_to(StepOutcome::Blocked);
}

#[test]
fn test_board_rim_is_solid() {
    let maze = common::maze(&ROWS);

    // Probes that leave the grid block instead of wrapping or panicking.
    assert_that(&resolve_step(Vec2::new(0.0, 100.0), Direction::Left, &maze))
        .is_equal_to(StepOutcome::Blocked);
    assert_that(&resolve_step(Vec2::new(0.0, 100.0), Direction::Up, &maze))
        .is_equal_to(StepOutcome::Blocked);
    assert_that(&resolve_step(Vec2::new(160.0, 120.0), Direction::Right, &maze))
        .is_equal_to(StepOutcome::Blocked);
    assert_that(&resolve_step(Vec2::new(20.0, 260.0), Direction::Down, &maze))
        .is_equal_to(StepOutcome::Blocked);

    assert_that(&probe_blocked(Vec2::new(0.0, 100.0), Direction::Left, &maze, TraversalFlags::CHASER))
        .is_true();
}

#[test]
fn test_pellet_pickup_requires_box_overlap() {
    let maze = common::maze(&ROWS);

    // The probe sees the pellet cell but the actor's region does not reach
    // the pickup box yet.
    let outcome = resolve_step(Vec2::new(60.0, 120.0), Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::Clear);

    let outcome = resolve_step(Vec2::new(69.0, 120.0), Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::PelletEaten { cell: UVec2::new(4, 1) });
}

#[test]
fn test_pellet_pickup_approaching_leftward() {
    let maze = common::maze(&ROWS);

    let outcome = resolve_step(Vec2::new(95.0, 120.0), Direction::Left, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::Clear);

    let outcome = resolve_step(Vec2::new(85.0, 120.0), Direction::Left, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::PelletEaten { cell: UVec2::new(4, 1) });
}

#[test]
fn test_energizer_pickup() {
    let maze = common::maze(&ROWS);
    let outcome = resolve_step(Vec2::new(126.0, 120.0), Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::EnergizerEaten { cell: UVec2::new(7, 1) });
}

#[test]
fn test_blocking_wins_over_pickup() {
    let maze = common::maze(&ROWS);

    // Straddling rows 1 and 2: the near probe reaches the pellet box, the
    // far corner probe lands in the wall below it.
    let outcome = resolve_step(Vec2::new(69.0, 125.0), Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::Blocked);
}

#[test]
fn test_corner_probe_blocks_misaligned_actor() {
    let maze = common::maze(&ROWS);

    // Aligned with column 1 the way down is open.
    assert_that(&resolve_step(Vec2::new(20.0, 120.0), Direction::Down, &maze))
        .is_equal_to(StepOutcome::Clear);
    // Shifted halfway into column 2 the far corner hits the wall at (2, 2).
    assert_that(&resolve_step(Vec2::new(30.0, 120.0), Direction::Down, &maze))
        .is_equal_to(StepOutcome::Blocked);
}

#[test]
fn test_door_blocks_players_not_chasers() {
    let maze = common::maze(&ROWS);
    let beside_door = Vec2::new(60.0, 180.0);

    assert_that(&resolve_step(beside_door, Direction::Right, &maze))
        .is_equal_to(StepOutcome::Blocked);
    assert_that(&probe_blocked(beside_door, Direction::Right, &maze, TraversalFlags::PLAYER))
        .is_true();
    assert_that(&probe_blocked(beside_door, Direction::Right, &maze, TraversalFlags::CHASER))
        .is_false();
}

#[test]
fn test_door_gate_strip_leaves_cell_edges_open() {
    let maze = common::maze(&ROWS);

    // The gate covers the middle half of the cell's height, so an actor
    // may nose into the cell from above before the strip stops it.
    assert_that(&resolve_step(Vec2::new(80.0, 160.0), Direction::Down, &maze))
        .is_equal_to(StepOutcome::Clear);
    assert_that(&resolve_step(Vec2::new(80.0, 170.0), Direction::Down, &maze))
        .is_equal_to(StepOutcome::Blocked);
}

#[test]
fn test_pickup_is_not_repeated_after_consumption() {
    let mut maze = common::maze(&ROWS);
    let position = Vec2::new(69.0, 120.0);

    let outcome = resolve_step(position, Direction::Right, &maze);
    assert_that(&outcome).is_equal_to(StepOutcome::PelletEaten { cell: UVec2::new(4, 1) });

    maze.set(4, 1, CellKind::Empty).unwrap();
    maze.eat_pellet();

    assert_that(&resolve_step(position, Direction::Right, &maze))
        .is_equal_to(StepOutcome::Clear);
    assert_that(&maze.is_cleared()).is_true();
}

#[test]
fn test_adjacent_actors_do_not_touch() {
    let cell = Vec2::new(20.0, 20.0);
    let a = actor_region(Vec2::new(20.0, 120.0), cell);
    let b = actor_region(Vec2::new(40.0, 120.0), cell);
    let overlapping = actor_region(Vec2::new(39.0, 120.0), cell);

    assert_that(&a.intersects(&b)).is_false();
    assert_that(&a.intersects(&overlapping)).is_true();
}
