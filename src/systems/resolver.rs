//! Step resolution: pure collision queries that movement and the session
//! loop are built on.
//!
//! Nothing here mutates the maze or an actor. A resolution answers what
//! one unit of travel would run into; callers apply the consequences.

use glam::{IVec2, UVec2, Vec2};
use smallvec::SmallVec;

use crate::map::cell::{CellKind, TraversalFlags};
use crate::map::direction::Direction;
use crate::map::geometry::{BoardGeometry, Bounds};
use crate::map::grid::Maze;

/// What one unit of travel in a direction would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A wall or door stands in the way; the caller stops travel.
    Blocked,
    /// Nothing in the way, nothing picked up.
    Clear,
    /// Travel reaches the pellet at `cell`; the caller consumes it.
    PelletEaten { cell: UVec2 },
    /// Travel reaches the energizer at `cell`.
    EnergizerEaten { cell: UVec2 },
}

/// World-space region of a cell-sized actor at `position`. The far edge
/// sits `cell - 1` units from the origin, one unit short of the next
/// cell's region.
pub fn actor_region(position: Vec2, cell: Vec2) -> Bounds {
    Bounds::new(position, position + cell - Vec2::ONE)
}

/// Resolves one unit of player travel against the maze.
///
/// Blocking wins over eating when the probes disagree, and a single step
/// eats at most one item. Probes that land outside the grid report
/// [`StepOutcome::Blocked`]; the rim of the board is solid from inside.
pub fn resolve_step(position: Vec2, direction: Direction, maze: &Maze) -> StepOutcome {
    let geometry = maze.geometry();
    let current = actor_region(position, geometry.cell);
    let moved = current.translate(direction.as_vec2());

    let mut outcome = StepOutcome::Clear;
    for probe in probe_cells(position, direction, &geometry) {
        let Some((cell, kind)) = cell_at(maze, probe) else {
            return StepOutcome::Blocked;
        };
        let Ok(region) = maze.cell_bounds(cell.x, cell.y) else {
            return StepOutcome::Blocked;
        };
        match kind {
            // Solid terrain blocks on where the actor would end up.
            CellKind::Wall | CellKind::Door => {
                if moved.intersects(&region) {
                    return StepOutcome::Blocked;
                }
            }
            // Pickups trigger on where the actor already is.
            CellKind::Pellet => {
                if current.intersects(&region) && outcome == StepOutcome::Clear {
                    outcome = StepOutcome::PelletEaten { cell };
                }
            }
            CellKind::Energizer => {
                if current.intersects(&region) && outcome == StepOutcome::Clear {
                    outcome = StepOutcome::EnergizerEaten { cell };
                }
            }
            _ => {}
        }
    }
    outcome
}

/// Whether one unit of travel in `direction` is stopped for an actor
/// class. Chasers pass doors; nobody passes walls or the board rim.
pub fn probe_blocked(
    position: Vec2,
    direction: Direction,
    maze: &Maze,
    flags: TraversalFlags,
) -> bool {
    let geometry = maze.geometry();
    let moved = actor_region(position, geometry.cell).translate(direction.as_vec2());

    for probe in probe_cells(position, direction, &geometry) {
        let Some((cell, kind)) = cell_at(maze, probe) else {
            return true;
        };
        if kind.traversal().contains(flags) {
            continue;
        }
        let Ok(region) = maze.cell_bounds(cell.x, cell.y) else {
            return true;
        };
        if moved.intersects(&region) {
            return true;
        }
    }
    false
}

/// The distinct cells probed ahead of travel: the cell under the moved
/// region's leading corner, and that corner shifted by the actor's
/// perpendicular span. Two samples keep a half-aligned actor from
/// clipping the corner of a wall.
fn probe_cells(
    position: Vec2,
    direction: Direction,
    geometry: &BoardGeometry,
) -> SmallVec<[IVec2; 2]> {
    let moved = actor_region(position, geometry.cell).translate(direction.as_vec2());
    let leading = match direction {
        Direction::Up | Direction::Left => moved.min,
        Direction::Down => Vec2::new(moved.min.x, moved.max.y),
        Direction::Right => Vec2::new(moved.max.x, moved.min.y),
    };
    let span = direction.perpendicular().as_vec2() * (geometry.cell - Vec2::ONE);

    let mut cells: SmallVec<[IVec2; 2]> = SmallVec::new();
    cells.push(geometry.world_to_cell(leading));
    let far_corner = geometry.world_to_cell(leading + span);
    if far_corner != cells[0] {
        cells.push(far_corner);
    }
    cells
}

/// The cell a probe landed in, or `None` when it left the grid.
fn cell_at(maze: &Maze, probe: IVec2) -> Option<(UVec2, CellKind)> {
    if probe.x < 0 || probe.y < 0 {
        return None;
    }
    let cell = probe.as_uvec2();
    maze.get(cell.x, cell.y).ok().map(|kind| (cell, kind))
}
