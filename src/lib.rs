//! Headless core of a maze-chase arcade game: maze documents, the cell
//! grid, step resolution, and the session tick loop.

pub mod actor;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod systems;
