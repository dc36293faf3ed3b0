//! Region collision grid
//!
//! Sparse map of regions, each backed by a dense block of per-tile masks.
//! Bit `d` of a mask blocks movement towards direction ordinal `d`;
//! bit `8 + d` also blocks projectiles.
//!
//! Flags are OR-ed in and cleared out with no reference counting, so two
//! overlapping walls share bits and removing one clears both.

use ahash::AHashMap;

use super::flag::DirectionFlag;
use super::update::{CollisionUpdate, UpdateKind};
use crate::core::config::GridConfig;
use crate::core::error::{CollisionError, Result};
use crate::geometry::{Direction, Tile};

const PROJECTILE_SHIFT: usize = 8;

#[inline]
fn movement_bit(direction: Direction) -> u16 {
    1 << direction.ordinal()
}

#[inline]
fn projectile_bit(direction: Direction) -> u16 {
    1 << (direction.ordinal() + PROJECTILE_SHIFT)
}

fn flag_mask(flag: &DirectionFlag) -> u16 {
    let mut mask = movement_bit(flag.direction);
    if flag.impenetrable {
        mask |= projectile_bit(flag.direction);
    }
    mask
}

/// Persistent per-tile collision state for any number of regions
#[derive(Debug, Clone)]
pub struct CollisionGrid {
    config: GridConfig,
    regions: AHashMap<(i32, i32), Vec<u16>>,
}

impl CollisionGrid {
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            regions: AHashMap::new(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Fold an update into the grid
    ///
    /// Every tile is checked before anything is written, so a rejected
    /// update leaves the grid untouched.
    pub fn apply(&mut self, update: &CollisionUpdate) -> Result<()> {
        if let Some(tile) = update.flags().keys().find(|tile| !self.in_bounds(tile)) {
            return Err(CollisionError::HeightOutOfBounds(*tile));
        }

        for (tile, flags) in update.iter() {
            let mask = flags.iter().fold(0u16, |mask, flag| mask | flag_mask(flag));
            let cell = self.cell_mut(tile);
            match update.kind() {
                UpdateKind::Adding => *cell |= mask,
                UpdateKind::Removing => *cell &= !mask,
            }
        }

        tracing::debug!(
            "Applied {:?} update over {} tiles ({} regions loaded)",
            update.kind(),
            update.len(),
            self.regions.len()
        );
        Ok(())
    }

    /// Raw mask for a tile; zero when nothing blocks it
    pub fn flags_at(&self, tile: &Tile) -> u16 {
        if !self.in_bounds(tile) {
            return 0;
        }
        let index = self.cell_index(tile);
        self.regions
            .get(&tile.region(self.region_size()))
            .map(|cells| cells[index])
            .unwrap_or(0)
    }

    /// Movement out of `tile` towards `direction` is blocked
    pub fn is_blocked(&self, tile: &Tile, direction: Direction) -> bool {
        self.flags_at(tile) & movement_bit(direction) != 0
    }

    /// Projectiles leaving `tile` towards `direction` are blocked
    pub fn blocks_projectile(&self, tile: &Tile, direction: Direction) -> bool {
        self.flags_at(tile) & projectile_bit(direction) != 0
    }

    /// Whether a single step from `tile` towards `direction` is open
    ///
    /// Diagonal steps also need both cardinal components open, so a
    /// mover cannot slip between two walls meeting at a corner.
    pub fn can_traverse(&self, tile: &Tile, direction: Direction, projectile: bool) -> bool {
        let blocked = |dir: Direction| {
            if projectile {
                self.blocks_projectile(tile, dir)
            } else {
                self.is_blocked(tile, dir)
            }
        };

        if blocked(direction) {
            return false;
        }

        match direction.diagonal_components() {
            Some(components) => components.iter().all(|&dir| !blocked(dir)),
            None => true,
        }
    }

    /// Number of regions with storage allocated
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// True when no tile carries any flag
    pub fn is_empty(&self) -> bool {
        self.regions
            .values()
            .all(|cells| cells.iter().all(|&mask| mask == 0))
    }

    /// Drop regions that no longer carry any flag
    pub fn prune(&mut self) {
        self.regions
            .retain(|_, cells| cells.iter().any(|&mask| mask != 0));
    }

    fn region_size(&self) -> i32 {
        self.config.region_size as i32
    }

    fn in_bounds(&self, tile: &Tile) -> bool {
        tile.height >= 0 && (tile.height as u32) < self.config.height_levels
    }

    fn cell_index(&self, tile: &Tile) -> usize {
        let size = self.region_size() as usize;
        let (lx, lz) = tile.local(self.region_size());
        (tile.height as usize * size + lz as usize) * size + lx as usize
    }

    fn cell_mut(&mut self, tile: &Tile) -> &mut u16 {
        let index = self.cell_index(tile);
        let cells_per_region = self.config.cells_per_region();
        let region = tile.region(self.region_size());
        let cells = self
            .regions
            .entry(region)
            .or_insert_with(|| vec![0; cells_per_region]);
        &mut cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionUpdateBuilder;

    fn grid() -> CollisionGrid {
        CollisionGrid::new(GridConfig::default()).unwrap()
    }

    fn wall_update(kind: UpdateKind, tile: Tile, impenetrable: bool, dir: Direction) -> CollisionUpdate {
        let mut builder = CollisionUpdateBuilder::with_kind(kind);
        builder.put_wall(tile, impenetrable, dir);
        builder.build().unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = grid();
        assert!(grid.is_empty());
        assert_eq!(grid.region_count(), 0);
        assert_eq!(grid.flags_at(&Tile::new(0, 0, 0)), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GridConfig {
            region_size: 0,
            height_levels: 4,
        };
        assert!(CollisionGrid::new(config).is_err());
    }

    #[test]
    fn test_apply_wall() {
        let mut grid = grid();
        let tile = Tile::new(10, 10, 0);
        grid.apply(&wall_update(UpdateKind::Adding, tile, false, Direction::North))
            .unwrap();

        assert!(grid.is_blocked(&tile, Direction::North));
        assert!(!grid.blocks_projectile(&tile, Direction::North));
        assert!(grid.is_blocked(&Tile::new(10, 11, 0), Direction::South));
        assert!(!grid.is_blocked(&tile, Direction::South));
    }

    #[test]
    fn test_impenetrable_sets_projectile_bit() {
        let mut grid = grid();
        let tile = Tile::new(3, 3, 1);
        grid.apply(&wall_update(UpdateKind::Adding, tile, true, Direction::East))
            .unwrap();

        assert!(grid.is_blocked(&tile, Direction::East));
        assert!(grid.blocks_projectile(&tile, Direction::East));
        assert!(grid.blocks_projectile(&Tile::new(4, 3, 1), Direction::West));
    }

    #[test]
    fn test_adding_then_removing_is_empty() {
        let mut grid = grid();
        let update = wall_update(UpdateKind::Adding, Tile::new(63, 63, 0), true, Direction::NorthEast);
        grid.apply(&update).unwrap();
        assert!(!grid.is_empty());
        // The neighbour lies in the next region over
        assert_eq!(grid.region_count(), 2);

        grid.apply(&update.inverted()).unwrap();
        assert!(grid.is_empty());

        grid.prune();
        assert_eq!(grid.region_count(), 0);
    }

    #[test]
    fn test_height_out_of_bounds_leaves_grid_untouched() {
        let mut grid = grid();
        let mut builder = CollisionUpdateBuilder::with_kind(UpdateKind::Adding);
        builder.put_wall(Tile::new(0, 0, 0), true, Direction::North);
        builder.put_wall(Tile::new(0, 0, 4), true, Direction::North);
        let update = builder.build().unwrap();

        let result = grid.apply(&update);
        assert!(matches!(result, Err(CollisionError::HeightOutOfBounds(_))));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = grid();
        let tile = Tile::new(-5, -70, 0);
        grid.apply(&wall_update(UpdateKind::Adding, tile, false, Direction::West))
            .unwrap();
        assert!(grid.is_blocked(&tile, Direction::West));
        assert!(grid.is_blocked(&Tile::new(-6, -70, 0), Direction::East));
    }

    #[test]
    fn test_can_traverse_diagonal_needs_components() {
        let mut grid = grid();
        let tile = Tile::new(5, 5, 0);
        grid.apply(&wall_update(UpdateKind::Adding, tile, false, Direction::North))
            .unwrap();

        assert!(!grid.can_traverse(&tile, Direction::North, false));
        assert!(!grid.can_traverse(&tile, Direction::NorthEast, false));
        assert!(grid.can_traverse(&tile, Direction::SouthEast, false));
        // Wall is penetrable, so projectiles pass
        assert!(grid.can_traverse(&tile, Direction::NorthEast, true));
    }

    #[test]
    fn test_apply_allocates_region_per_touched_tile() {
        let mut grid = grid();
        let mut builder = CollisionUpdateBuilder::with_kind(UpdateKind::Adding);
        builder.put_wall(Tile::new(0, 0, 0), false, Direction::North);
        builder.put_wall(Tile::new(200, 10, 3), true, Direction::South);
        grid.apply(&builder.build().unwrap()).unwrap();

        assert_eq!(grid.region_count(), 2);
        assert!(grid.is_blocked(&Tile::new(0, 1, 0), Direction::South));
        assert!(grid.blocks_projectile(&Tile::new(200, 9, 3), Direction::North));
    }

    #[test]
    fn test_shared_wall_removed_together() {
        let mut grid = grid();
        let tile = Tile::new(1, 1, 0);
        let first = wall_update(UpdateKind::Adding, tile, false, Direction::North);
        let second = wall_update(UpdateKind::Adding, tile, false, Direction::North);
        grid.apply(&first).unwrap();
        grid.apply(&second).unwrap();
        grid.apply(&first.inverted()).unwrap();
        assert!(!grid.is_blocked(&tile, Direction::North));
    }
}
