//! Tile coordinates on the world grid

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// One grid cell on one height plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
    #[serde(default)]
    pub height: i32,
}

impl Tile {
    pub fn new(x: i32, z: i32, height: i32) -> Self {
        Self { x, z, height }
    }

    /// Tile `num` cells away along `direction`, on the same plane
    ///
    /// Coordinates wrap at the `i32` bounds.
    pub fn step(&self, num: i32, direction: Direction) -> Tile {
        let (dx, dz) = direction.delta();
        self.translate(dx.wrapping_mul(num), dz.wrapping_mul(num))
    }

    pub fn translate(&self, dx: i32, dz: i32) -> Tile {
        Tile::new(
            self.x.wrapping_add(dx),
            self.z.wrapping_add(dz),
            self.height,
        )
    }

    /// Coordinates of the region containing this tile
    pub fn region(&self, region_size: i32) -> (i32, i32) {
        (
            self.x.div_euclid(region_size),
            self.z.div_euclid(region_size),
        )
    }

    /// Offset of this tile inside its region
    pub fn local(&self, region_size: i32) -> (i32, i32) {
        (
            self.x.rem_euclid(region_size),
            self.z.rem_euclid(region_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cardinals() {
        let tile = Tile::new(10, 10, 1);
        assert_eq!(tile.step(1, Direction::North), Tile::new(10, 11, 1));
        assert_eq!(tile.step(1, Direction::East), Tile::new(11, 10, 1));
        assert_eq!(tile.step(1, Direction::South), Tile::new(10, 9, 1));
        assert_eq!(tile.step(1, Direction::West), Tile::new(9, 10, 1));
    }

    #[test]
    fn test_step_diagonal_multiple_cells() {
        let tile = Tile::new(0, 0, 0);
        assert_eq!(tile.step(3, Direction::NorthEast), Tile::new(3, 3, 0));
        assert_eq!(tile.step(2, Direction::SouthWest), Tile::new(-2, -2, 0));
    }

    #[test]
    fn test_step_keeps_height() {
        let tile = Tile::new(5, 5, 3);
        for dir in Direction::ALL {
            assert_eq!(tile.step(1, dir).height, 3);
        }
    }

    #[test]
    fn test_step_and_back() {
        let tile = Tile::new(7, -4, 0);
        for dir in Direction::ALL {
            assert_eq!(tile.step(1, dir).step(1, dir.opposite()), tile);
        }
    }

    #[test]
    fn test_step_wraps_at_coordinate_extremes() {
        let east_edge = Tile::new(i32::MAX, 0, 0);
        assert_eq!(east_edge.step(1, Direction::East), Tile::new(i32::MIN, 0, 0));

        let south_west = Tile::new(i32::MIN, i32::MIN, 2);
        assert_eq!(
            south_west.step(1, Direction::SouthWest),
            Tile::new(i32::MAX, i32::MAX, 2)
        );

        let origin = Tile::new(0, 0, 0);
        assert_eq!(origin.step(i32::MIN, Direction::West), Tile::new(i32::MIN, 0, 0));
        assert_eq!(east_edge.translate(2, -1), Tile::new(i32::MIN + 1, -1, 0));
    }

    #[test]
    fn test_region_and_local() {
        let tile = Tile::new(130, 63, 0);
        assert_eq!(tile.region(64), (2, 0));
        assert_eq!(tile.local(64), (2, 63));
    }

    #[test]
    fn test_region_negative_coords() {
        let tile = Tile::new(-1, -65, 0);
        assert_eq!(tile.region(64), (-1, -2));
        assert_eq!(tile.local(64), (63, 63));
    }

    #[test]
    fn test_tile_hash_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Tile::new(1, 2, 0));
        assert!(set.contains(&Tile::new(1, 2, 0)));
        assert!(!set.contains(&Tile::new(1, 2, 1)));
    }
}
