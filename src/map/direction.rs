//! Cardinal travel directions, with the grid/world vector conversions the
//! movement code leans on.

use glam::{IVec2, Vec2};
use strum_macros::AsRefStr;

/// A cardinal direction of travel.
///
/// Grid space points y-down, so [`Direction::Up`] maps to a negative y
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// All four directions, for iteration during junction decisions.
    pub const DIRECTIONS: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit grid step along this direction.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Unit world step along this direction.
    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// Positive unit vector on the axis perpendicular to travel.
    pub const fn perpendicular(self) -> IVec2 {
        match self {
            Direction::Up | Direction::Down => IVec2::X,
            Direction::Left | Direction::Right => IVec2::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_pair_up() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_vectors_are_unit_steps() {
        assert_eq!(Direction::Up.as_ivec2(), IVec2::new(0, -1));
        assert_eq!(Direction::Down.as_ivec2(), IVec2::new(0, 1));
        assert_eq!(Direction::Left.as_ivec2(), IVec2::new(-1, 0));
        assert_eq!(Direction::Right.as_ivec2(), IVec2::new(1, 0));
    }

    #[test]
    fn test_perpendicular_axis() {
        assert_eq!(Direction::Up.perpendicular(), IVec2::X);
        assert_eq!(Direction::Left.perpendicular(), IVec2::Y);
        for direction in Direction::DIRECTIONS {
            assert_eq!(direction.as_ivec2().dot(direction.perpendicular()), 0);
        }
    }

    #[test]
    fn test_as_ref_names() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Right.as_ref(), "right");
    }
}
