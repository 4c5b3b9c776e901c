//! The maze model: cell vocabulary, document parsing, world geometry, and
//! the grid store.

pub mod cell;
pub mod direction;
pub mod geometry;
pub mod grid;
pub mod parser;
