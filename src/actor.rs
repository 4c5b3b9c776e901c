//! Moving actors: the player and the chasers, as plain state the systems
//! drive.

use glam::Vec2;

use crate::constants::{CHASER_SPEED, PLAYER_SPEED};
use crate::map::cell::ActorKind;
use crate::map::direction::Direction;
use crate::map::geometry::{BoardGeometry, Bounds};
use crate::map::grid::Maze;
use crate::systems::resolver::actor_region;

/// A moving actor in the maze.
///
/// Positions are continuous world coordinates of the actor's top-left
/// corner; every actor is exactly one cell in extent.
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorKind,
    /// World position of the top-left corner.
    pub position: Vec2,
    /// Current direction of travel, `None` while stopped.
    pub direction: Option<Direction>,
    /// Direction requested by input, adopted once travel that way opens.
    pub buffered: Option<Direction>,
    /// Travel speed in world units per second.
    pub speed: f32,
}

impl Actor {
    /// Spawns an actor of `kind` at its start cell, standing still.
    pub fn spawn(kind: ActorKind, maze: &Maze) -> Actor {
        Actor {
            kind,
            position: maze.start_world(kind),
            direction: None,
            buffered: None,
            speed: match kind {
                ActorKind::Player => PLAYER_SPEED,
                ActorKind::Chaser(_) => CHASER_SPEED,
            },
        }
    }

    /// The actor's world-space collision region.
    pub fn bounds(&self, geometry: &BoardGeometry) -> Bounds {
        actor_region(self.position, geometry.cell)
    }

    /// Sends the actor back to its start cell, standing still. Used after
    /// a capture, a lost life, and between levels.
    pub fn reset(&mut self, maze: &Maze) {
        self.position = maze.start_world(self.kind);
        self.direction = None;
        self.buffered = None;
    }
}
