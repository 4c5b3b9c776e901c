//! Per-tick game logic: step resolution and actor movement.

pub mod movement;
pub mod resolver;
