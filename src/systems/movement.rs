//! Per-tick movement: player steering and advancement, and the chasers'
//! node-to-node wandering.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::actor::Actor;
use crate::map::cell::TraversalFlags;
use crate::map::direction::Direction;
use crate::map::geometry::BoardGeometry;
use crate::map::grid::Maze;
use crate::systems::resolver::{probe_blocked, resolve_step, StepOutcome};

/// Decides the player's step for this tick.
///
/// A buffered direction is adopted as soon as travel that way is open;
/// until then it stays buffered, so a turn requested early takes effect
/// at the junction. The returned outcome has not been applied; callers
/// apply it and then call [`advance_player`].
pub fn resolve_player_step(player: &mut Actor, maze: &Maze) -> StepOutcome {
    if let Some(wanted) = player.buffered {
        if player.direction == Some(wanted) {
            player.buffered = None;
        } else if resolve_step(player.position, wanted, maze) != StepOutcome::Blocked {
            trace!(direction = wanted.as_ref(), "Player turns");
            player.direction = Some(wanted);
            player.buffered = None;
        }
    }

    match player.direction {
        Some(direction) => resolve_step(player.position, direction, maze),
        None => StepOutcome::Clear,
    }
}

/// Moves the player according to an already-applied outcome. A blocked
/// step zeroes travel instead of advancing.
pub fn advance_player(player: &mut Actor, outcome: StepOutcome, dt: f32) {
    if outcome == StepOutcome::Blocked {
        player.direction = None;
        return;
    }
    if let Some(direction) = player.direction {
        player.position += direction.as_vec2() * player.speed * dt;
    }
}

/// Advances one chaser for this tick.
///
/// Chasers walk the grid node to node: travel runs to the next cell
/// origin, arrival lands exactly on it, and a fresh direction is picked
/// there. Deciding only on origins keeps the body lined up with
/// one-cell-wide openings, so side corridors are real choices. Reversals
/// happen only at dead ends, and doors are open to chasers, so the house
/// is no prison.
pub fn step_chaser<R: Rng>(chaser: &mut Actor, maze: &Maze, dt: f32, rng: &mut R) {
    let geometry = maze.geometry();

    let blocked = match chaser.direction {
        Some(direction) => probe_blocked(chaser.position, direction, maze, TraversalFlags::CHASER),
        None => true,
    };
    if blocked {
        if let Some(direction) = chaser.direction {
            let node = next_node(chaser.position, direction, &geometry);
            // The probe only sees a wall within a unit of the node in
            // front of it; finish the approach so the choice is aligned.
            if (node - chaser.position).abs().max_element() < 1.0 {
                chaser.position = node;
            }
        }
        chaser.direction = choose_direction(chaser, maze, rng);
    }

    let Some(direction) = chaser.direction else { return };

    let travel = chaser.speed * dt;
    let node = next_node(chaser.position, direction, &geometry);
    let ahead = (node - chaser.position).abs().max_element();
    if travel < ahead {
        chaser.position += direction.as_vec2() * travel;
    } else {
        // Land exactly on the node and decide there; leftover travel is
        // dropped, so one step never crosses a junction.
        chaser.position = node;
        chaser.direction = choose_direction(chaser, maze, rng);
    }
}

/// Picks an open direction at the chaser's position, excluding an
/// immediate reversal unless nothing else is open.
fn choose_direction<R: Rng>(chaser: &Actor, maze: &Maze, rng: &mut R) -> Option<Direction> {
    let reverse = chaser.direction.map(Direction::opposite);

    let mut options: SmallVec<[Direction; 3]> = SmallVec::new();
    for direction in Direction::DIRECTIONS {
        if Some(direction) == reverse {
            continue;
        }
        if !probe_blocked(chaser.position, direction, maze, TraversalFlags::CHASER) {
            options.push(direction);
        }
    }

    if let Some(&choice) = options.as_slice().choose(rng) {
        return Some(choice);
    }

    // Dead end; turn around if even that is open.
    if let Some(back) = reverse {
        if !probe_blocked(chaser.position, back, maze, TraversalFlags::CHASER) {
            trace!(chaser = %chaser.kind, direction = back.as_ref(), "Chaser reverses out of a dead end");
            return Some(back);
        }
    }

    warn!(chaser = %chaser.kind, position = ?chaser.position, "Chaser has no open direction");
    None
}

/// The next cell origin ahead of `position` along `direction`. A position
/// already on an origin yields the origin one whole cell further.
fn next_node(position: Vec2, direction: Direction, geometry: &BoardGeometry) -> Vec2 {
    let local = (position - geometry.offset) / geometry.cell;
    let mut node = position;
    match direction {
        Direction::Right => node.x = geometry.offset.x + (local.x.floor() + 1.0) * geometry.cell.x,
        Direction::Left => node.x = geometry.offset.x + (local.x.ceil() - 1.0) * geometry.cell.x,
        Direction::Down => node.y = geometry.offset.y + (local.y.floor() + 1.0) * geometry.cell.y,
        Direction::Up => node.y = geometry.offset.y + (local.y.ceil() - 1.0) * geometry.cell.y,
    }
    node
}
