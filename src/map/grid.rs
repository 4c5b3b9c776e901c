//! The maze store: a fixed-size cell grid with bounds-checked access,
//! derived start positions, and the live pellet count.

use glam::{UVec2, Vec2};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::constants::{DOOR_BAND, ENERGIZER_BAND, PELLET_BAND};
use crate::error::{OutOfRangeError, ParseError};
use crate::map::cell::{ActorKind, CellKind, Chaser};
use crate::map::geometry::{BoardGeometry, Bounds};
use crate::map::parser::{MazeParser, ParsedMaze};

/// A loaded maze.
///
/// Dimensions are fixed for the maze's lifetime. Start positions are
/// derived once at construction; writing start markers into cells later
/// does not move them.
#[derive(Debug, Clone)]
pub struct Maze {
    width: u32,
    height: u32,
    geometry: BoardGeometry,
    /// Column-major, indexed `x * height + y`.
    cells: Vec<CellKind>,
    pellets: u32,
    player_start: UVec2,
    chaser_starts: [UVec2; Chaser::COUNT],
}

impl Maze {
    /// Parses a maze document given as lines (header first).
    pub fn parse(lines: &[&str], geometry: BoardGeometry) -> Result<Maze, ParseError> {
        let parsed = MazeParser::parse_lines(lines)?;
        Self::from_parsed(parsed, geometry)
    }

    /// Parses a maze from a whole document string.
    pub fn from_document(document: &str, geometry: BoardGeometry) -> Result<Maze, ParseError> {
        let lines: Vec<&str> = document.lines().collect();
        Self::parse(&lines, geometry)
    }

    /// Builds a maze from an explicit column-major cell grid, running the
    /// same start-marker validation as document parsing.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len()` is not `width * height`.
    pub fn from_cells(
        width: u32,
        height: u32,
        cells: Vec<CellKind>,
        geometry: BoardGeometry,
    ) -> Result<Maze, ParseError> {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell grid does not match the declared dimensions"
        );

        let mut pellets = 0u32;
        let mut player_start: Option<UVec2> = None;
        let mut chaser_starts: [Option<UVec2>; Chaser::COUNT] = [None; Chaser::COUNT];

        for x in 0..width {
            for y in 0..height {
                let position = UVec2::new(x, y);
                match cells[(x * height + y) as usize] {
                    CellKind::Pellet => pellets += 1,
                    CellKind::PlayerStart => {
                        Self::record_start(&mut player_start, ActorKind::Player, position)?;
                    }
                    CellKind::ChaserStart(chaser) => {
                        Self::record_start(
                            &mut chaser_starts[chaser.index()],
                            ActorKind::Chaser(chaser),
                            position,
                        )?;
                    }
                    _ => {}
                }
            }
        }

        let player_start = player_start.ok_or(ParseError::MissingStart(ActorKind::Player))?;
        let mut starts = [UVec2::ZERO; Chaser::COUNT];
        for chaser in Chaser::iter() {
            starts[chaser.index()] = chaser_starts[chaser.index()]
                .ok_or(ParseError::MissingStart(ActorKind::Chaser(chaser)))?;
        }

        debug!(width, height, pellets, "Maze ready");
        Ok(Maze {
            width,
            height,
            geometry,
            cells,
            pellets,
            player_start,
            chaser_starts: starts,
        })
    }

    fn from_parsed(parsed: ParsedMaze, geometry: BoardGeometry) -> Result<Maze, ParseError> {
        Self::from_cells(parsed.width, parsed.height, parsed.cells, geometry)
    }

    fn record_start(
        slot: &mut Option<UVec2>,
        actor: ActorKind,
        position: UVec2,
    ) -> Result<(), ParseError> {
        match *slot {
            Some(first) => Err(ParseError::DuplicateStart { actor, first, second: position }),
            None => {
                *slot = Some(position);
                Ok(())
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Cells still carrying a pellet. Energizers are not counted.
    pub fn pellets(&self) -> u32 {
        self.pellets
    }

    /// True once every pellet has been eaten.
    pub fn is_cleared(&self) -> bool {
        self.pellets == 0
    }

    /// The start cell for an actor, as found in the document.
    pub fn start_position(&self, actor: ActorKind) -> UVec2 {
        match actor {
            ActorKind::Player => self.player_start,
            ActorKind::Chaser(chaser) => self.chaser_starts[chaser.index()],
        }
    }

    /// World position of an actor's start cell origin.
    pub fn start_world(&self, actor: ActorKind) -> Vec2 {
        self.geometry.cell_origin(self.start_position(actor))
    }

    /// Reads the cell at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<CellKind, OutOfRangeError> {
        self.check(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Writes the cell at `(x, y)`.
    ///
    /// Writing never touches the pellet count; callers that consume a
    /// pellet pair the write with [`Maze::eat_pellet`].
    pub fn set(&mut self, x: u32, y: u32, kind: CellKind) -> Result<(), OutOfRangeError> {
        self.check(x, y)?;
        let index = self.index(x, y);
        self.cells[index] = kind;
        Ok(())
    }

    /// Records one eaten pellet. Saturates at zero.
    pub fn eat_pellet(&mut self) {
        self.pellets = self.pellets.saturating_sub(1);
    }

    /// The world-space collision region of the cell at `(x, y)`.
    ///
    /// Walls fill their cell, doors block only a horizontal gate strip,
    /// pellets and energizers expose their pickup boxes, and everything
    /// else returns [`Bounds::EMPTY`].
    pub fn cell_bounds(&self, x: u32, y: u32) -> Result<Bounds, OutOfRangeError> {
        let kind = self.get(x, y)?;
        let origin = self.geometry.cell_origin(UVec2::new(x, y));
        let cell = self.geometry.cell;

        let bounds = match kind {
            CellKind::Wall => self.geometry.cell_region(UVec2::new(x, y)),
            CellKind::Door => Bounds::new(
                origin + Vec2::new(0.0, cell.y * DOOR_BAND.0),
                origin + Vec2::new(cell.x, cell.y * DOOR_BAND.1),
            ),
            CellKind::Pellet => {
                Bounds::new(origin + cell * PELLET_BAND.0, origin + cell * PELLET_BAND.1)
            }
            CellKind::Energizer => {
                Bounds::new(origin + cell * ENERGIZER_BAND.0, origin + cell * ENERGIZER_BAND.1)
            }
            _ => Bounds::EMPTY,
        };
        Ok(bounds)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (x * self.height + y) as usize
    }

    fn check(&self, x: u32, y: u32) -> Result<(), OutOfRangeError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(OutOfRangeError { x, y, width: self.width, height: self.height })
        }
    }
}
