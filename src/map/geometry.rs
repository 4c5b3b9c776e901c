//! World-space geometry: the cell/world coordinate mapping and the
//! axis-aligned regions used for overlap tests.

use glam::{IVec2, UVec2, Vec2};

use crate::constants::{BOARD_OFFSET, CELL_SIZE};

/// Converts between grid cells and world positions.
///
/// The board hangs at `offset` in world space (the stock offset reserves
/// the HUD band above it) and every cell is `cell` world units across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Size of one cell in world units.
    pub cell: Vec2,
    /// World position of the top-left corner of cell (0, 0).
    pub offset: Vec2,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self { cell: CELL_SIZE, offset: BOARD_OFFSET }
    }
}

impl BoardGeometry {
    pub const fn new(cell: Vec2, offset: Vec2) -> Self {
        Self { cell, offset }
    }

    /// World position of the top-left corner of a cell.
    pub fn cell_origin(&self, cell: UVec2) -> Vec2 {
        self.offset + cell.as_vec2() * self.cell
    }

    /// The grid cell containing a world point. The result may lie outside
    /// the grid (negative or past the far edge); callers decide what that
    /// means.
    pub fn world_to_cell(&self, point: Vec2) -> IVec2 {
        ((point - self.offset) / self.cell).floor().as_ivec2()
    }

    /// The full world-space region of a cell.
    pub fn cell_region(&self, cell: UVec2) -> Bounds {
        let origin = self.cell_origin(cell);
        Bounds::new(origin, origin + self.cell)
    }
}

/// An axis-aligned world-space rectangle.
///
/// Overlap is inclusive at the edges, so regions that merely touch count
/// as intersecting. That makes an actor stopped flush against a wall stay
/// stopped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// A region that collides with nothing.
    pub const EMPTY: Bounds = Bounds { min: Vec2::ZERO, max: Vec2::ZERO };

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// True when the region has no area and therefore collides with
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn translate(&self, delta: Vec2) -> Bounds {
        Bounds::new(self.min + delta, self.max + delta)
    }

    /// Inclusive overlap test. Empty regions intersect nothing.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_origin_includes_offset() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_origin(UVec2::ZERO), Vec2::new(0.0, 100.0));
        assert_eq!(geometry.cell_origin(UVec2::new(3, 2)), Vec2::new(60.0, 140.0));
    }

    #[test]
    fn test_world_to_cell_inverts_origin() {
        let geometry = BoardGeometry::default();
        for cell in [UVec2::ZERO, UVec2::new(5, 7), UVec2::new(27, 30)] {
            assert_eq!(geometry.world_to_cell(geometry.cell_origin(cell)), cell.as_ivec2());
        }
        // Interior points of a cell map back to it.
        assert_eq!(geometry.world_to_cell(Vec2::new(19.9, 119.9)), IVec2::ZERO);
    }

    #[test]
    fn test_world_to_cell_goes_negative_above_board() {
        let geometry = BoardGeometry::default();
        // Inside the HUD band, above cell row zero.
        assert_eq!(geometry.world_to_cell(Vec2::new(10.0, 50.0)).y, -3);
        assert_eq!(geometry.world_to_cell(Vec2::new(-1.0, 100.0)).x, -1);
    }

    #[test]
    fn test_bounds_touching_counts_as_overlap() {
        let a = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(19.0, 19.0));
        let b = Bounds::new(Vec2::new(19.0, 0.0), Vec2::new(39.0, 19.0));
        let c = Bounds::new(Vec2::new(20.0, 0.0), Vec2::new(40.0, 19.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_empty_bounds_never_intersect() {
        let near_origin = Bounds::new(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0));
        assert!(!Bounds::EMPTY.intersects(&near_origin));
        assert!(!near_origin.intersects(&Bounds::EMPTY));
        assert!(Bounds::EMPTY.is_empty());
    }

    #[test]
    fn test_translate_preserves_size() {
        let bounds = Bounds::from_min_size(Vec2::ZERO, Vec2::new(19.0, 19.0));
        let moved = bounds.translate(Vec2::new(1.0, 0.0));
        assert_eq!(moved.min, Vec2::new(1.0, 0.0));
        assert_eq!(moved.size(), bounds.size());
    }

    #[test]
    fn test_center_sits_mid_region() {
        let bounds = Bounds::new(Vec2::new(20.0, 120.0), Vec2::new(39.0, 139.0));
        assert_eq!(bounds.center(), Vec2::new(29.5, 129.5));
    }
}
