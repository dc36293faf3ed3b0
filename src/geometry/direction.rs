//! Eight-way compass directions and orientation lookup tables
//!
//! All lookups are constant tables indexed by the direction's ordinal, so
//! the orientation codes used by walls and corners resolve in O(1) and the
//! tables can be checked exhaustively in tests.

use serde::{Deserialize, Serialize};

/// Compass direction on the tile grid
///
/// North is +z, east is +x. The declaration order is fixed; every table
/// below is indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

use Direction::*;

const OPPOSITES: [Direction; 8] = [
    South, SouthWest, West, NorthWest, North, NorthEast, East, SouthEast,
];

const DIAGONAL_COMPONENTS: [Option<[Direction; 2]>; 8] = [
    None,
    Some([North, East]),
    None,
    Some([South, East]),
    None,
    Some([South, West]),
    None,
    Some([North, West]),
];

const DELTAS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Direction {
    /// All directions in ordinal order
    pub const ALL: [Direction; 8] = [
        North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];

    /// The four cardinals, clockwise from north
    pub const NESW: [Direction; 4] = [North, East, South, West];

    /// Lengthwise wall orientation, indexed by object rotation
    pub const WNES: [Direction; 4] = [West, North, East, South];

    /// Corner wall orientation, indexed by object rotation
    pub const WNES_DIAGONAL: [Direction; 4] = [NorthWest, NorthEast, SouthEast, SouthWest];

    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        OPPOSITES[self.ordinal()]
    }

    /// The two cardinals a diagonal is made of, vertical component first
    ///
    /// Returns `None` for cardinal directions.
    #[inline]
    pub fn diagonal_components(self) -> Option<[Direction; 2]> {
        DIAGONAL_COMPONENTS[self.ordinal()]
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.diagonal_components().is_some()
    }

    /// (dx, dz) of a single step in this direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        DELTAS[self.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_table_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.ordinal(), i);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dx, dz) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dz));
        }
    }

    #[test]
    fn test_cardinals_have_no_components() {
        for dir in Direction::NESW {
            assert!(!dir.is_diagonal());
            assert_eq!(dir.diagonal_components(), None);
        }
    }

    #[test]
    fn test_diagonal_components_sum_to_delta() {
        for dir in Direction::WNES_DIAGONAL {
            let [a, b] = dir.diagonal_components().unwrap();
            assert!(!a.is_diagonal());
            assert!(!b.is_diagonal());
            let (ax, az) = a.delta();
            let (bx, bz) = b.delta();
            assert_eq!((ax + bx, az + bz), dir.delta());
        }
    }

    #[test]
    fn test_diagonal_components_vertical_first() {
        assert_eq!(NorthEast.diagonal_components(), Some([North, East]));
        assert_eq!(SouthEast.diagonal_components(), Some([South, East]));
        assert_eq!(SouthWest.diagonal_components(), Some([South, West]));
        assert_eq!(NorthWest.diagonal_components(), Some([North, West]));
    }

    #[test]
    fn test_orientation_tables() {
        assert_eq!(Direction::WNES, [West, North, East, South]);
        assert_eq!(
            Direction::WNES_DIAGONAL,
            [NorthWest, NorthEast, SouthEast, SouthWest]
        );
        // Each rotation step turns the wall a quarter clockwise
        for rot in 0..4 {
            let (x0, z0) = Direction::WNES[rot].delta();
            let (x1, z1) = Direction::WNES[(rot + 1) % 4].delta();
            assert_eq!((x1, z1), (z0, -x0));
        }
    }
}
