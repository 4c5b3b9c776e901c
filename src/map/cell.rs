//! The cell vocabulary: everything a maze cell can hold, who may walk on
//! it, and the actor identities tied to start markers.

use std::fmt;

use bitflags::bitflags;
use strum_macros::{Display, EnumIter};

/// The four chasers, in start-marker order (`'1'` through `'4'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Chaser {
    Blinky,
    Clyde,
    Inky,
    Pinky,
}

impl Chaser {
    pub const COUNT: usize = 4;

    /// Stable index for per-chaser storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The document symbol that marks this chaser's start cell.
    pub const fn marker(self) -> char {
        match self {
            Chaser::Blinky => '1',
            Chaser::Clyde => '2',
            Chaser::Inky => '3',
            Chaser::Pinky => '4',
        }
    }
}

/// Identity of a moving actor: the player or one of the chasers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Chaser(Chaser),
}

impl ActorKind {
    /// All actor identities, player first.
    pub fn all() -> impl Iterator<Item = ActorKind> {
        use strum::IntoEnumIterator;
        std::iter::once(ActorKind::Player).chain(Chaser::iter().map(ActorKind::Chaser))
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Player => write!(f, "the player"),
            ActorKind::Chaser(chaser) => write!(f, "{chaser}"),
        }
    }
}

bitflags! {
    /// Which actor classes may occupy a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TraversalFlags: u8 {
        const PLAYER = 1 << 0;
        const CHASER = 1 << 1;
        const ALL = Self::PLAYER.bits() | Self::CHASER.bits();
    }
}

/// What a single maze cell holds.
///
/// Start markers are ordinary cells for movement purposes; they only carry
/// meaning at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    /// The chaser-house gate. Solid for the player, open for chasers.
    Door,
    Pellet,
    Energizer,
    PlayerStart,
    ChaserStart(Chaser),
}

impl CellKind {
    /// Maps a document symbol to its cell, `None` for anything unknown.
    pub fn from_symbol(symbol: char) -> Option<CellKind> {
        use strum::IntoEnumIterator;
        match symbol {
            ' ' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'o' => Some(CellKind::Door),
            '*' => Some(CellKind::Pellet),
            '+' => Some(CellKind::Energizer),
            '0' => Some(CellKind::PlayerStart),
            '1'..='4' => Chaser::iter()
                .find(|chaser| chaser.marker() == symbol)
                .map(CellKind::ChaserStart),
            _ => None,
        }
    }

    /// The document symbol for this cell.
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Wall => '#',
            CellKind::Door => 'o',
            CellKind::Pellet => '*',
            CellKind::Energizer => '+',
            CellKind::PlayerStart => '0',
            CellKind::ChaserStart(chaser) => chaser.marker(),
        }
    }

    /// Which actor classes may occupy this cell.
    pub const fn traversal(self) -> TraversalFlags {
        match self {
            CellKind::Wall => TraversalFlags::empty(),
            CellKind::Door => TraversalFlags::CHASER,
            _ => TraversalFlags::ALL,
        }
    }
}
