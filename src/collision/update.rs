//! Collision update batches and the builder that accumulates them

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use super::flag::DirectionFlag;
use crate::core::error::{CollisionError, Result};
use crate::geometry::{Direction, Tile};

/// Whether an update's flags are added to or removed from the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateKind {
    Adding,
    Removing,
}

impl UpdateKind {
    pub fn inverse(self) -> UpdateKind {
        match self {
            UpdateKind::Adding => UpdateKind::Removing,
            UpdateKind::Removing => UpdateKind::Adding,
        }
    }
}

/// An immutable batch of direction flags to add to or remove from a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionUpdate {
    kind: UpdateKind,
    flags: AHashMap<Tile, AHashSet<DirectionFlag>>,
}

impl CollisionUpdate {
    pub fn kind(&self) -> UpdateKind {
        self.kind
    }

    pub fn flags(&self) -> &AHashMap<Tile, AHashSet<DirectionFlag>> {
        &self.flags
    }

    /// Flags recorded for one tile
    pub fn get(&self, tile: &Tile) -> Option<&AHashSet<DirectionFlag>> {
        self.flags.get(tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tile, &AHashSet<DirectionFlag>)> {
        self.flags.iter()
    }

    /// Number of tiles touched
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Total number of flags over all tiles
    pub fn flag_count(&self) -> usize {
        self.flags.values().map(|set| set.len()).sum()
    }

    /// The same flags with the opposite kind, undoing this update
    pub fn inverted(&self) -> CollisionUpdate {
        CollisionUpdate {
            kind: self.kind.inverse(),
            flags: self.flags.clone(),
        }
    }
}

/// Accumulates tile flags for one batch of collision changes
///
/// The kind must be set exactly once before [`build`](Self::build).
/// Building consumes the builder; start a new one for the next batch.
#[derive(Debug, Default)]
pub struct CollisionUpdateBuilder {
    kind: Option<UpdateKind>,
    flags: AHashMap<Tile, AHashSet<DirectionFlag>>,
}

impl CollisionUpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with its kind already set
    pub fn with_kind(kind: UpdateKind) -> Self {
        Self {
            kind: Some(kind),
            flags: AHashMap::new(),
        }
    }

    pub fn set_type(&mut self, kind: UpdateKind) -> Result<()> {
        if self.kind.is_some() {
            return Err(CollisionError::KindAlreadySet);
        }
        self.kind = Some(kind);
        Ok(())
    }

    pub fn kind(&self) -> Option<UpdateKind> {
        self.kind
    }

    /// Flag each of `directions` at `tile`
    pub fn put_tile(&mut self, tile: Tile, impenetrable: bool, directions: &[Direction]) -> Result<()> {
        if directions.is_empty() {
            return Err(CollisionError::EmptyDirections);
        }
        for &direction in directions {
            self.insert(tile, DirectionFlag::new(direction, impenetrable));
        }
        Ok(())
    }

    /// Block the face between `tile` and its neighbour towards `orientation`
    ///
    /// Both sides of the face are flagged: `orientation` on `tile` and the
    /// opposite direction on the neighbour.
    pub fn put_wall(&mut self, tile: Tile, impenetrable: bool, orientation: Direction) {
        self.insert(tile, DirectionFlag::new(orientation, impenetrable));
        self.insert(
            tile.step(1, orientation),
            DirectionFlag::new(orientation.opposite(), impenetrable),
        );
    }

    /// Block both faces a diagonal corner piece touches
    pub fn put_large_corner_wall(
        &mut self,
        tile: Tile,
        impenetrable: bool,
        orientation: Direction,
    ) -> Result<()> {
        let components = orientation
            .diagonal_components()
            .ok_or(CollisionError::NotDiagonal(orientation))?;

        for direction in components {
            self.put_wall(tile, impenetrable, direction);
        }
        Ok(())
    }

    pub fn build(self) -> Result<CollisionUpdate> {
        let kind = self.kind.ok_or(CollisionError::KindNotSet)?;

        tracing::debug!(
            "Built {:?} collision update: {} tiles, {} flags",
            kind,
            self.flags.len(),
            self.flags.values().map(|set| set.len()).sum::<usize>()
        );

        Ok(CollisionUpdate {
            kind,
            flags: self.flags,
        })
    }

    fn insert(&mut self, tile: Tile, flag: DirectionFlag) {
        self.flags.entry(tile).or_default().insert(flag);
    }
}
