//! Entities that take part in the world update loop

use serde::{Deserialize, Serialize};

use crate::geometry::Tile;

/// Kind of world entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Player,
    Npc,
    StaticObject,
}

/// Behaviour shared by everything that moves around the world
pub trait Pawn {
    /// Advance one game cycle
    fn cycle(&mut self);

    fn entity_type(&self) -> EntityType;
}

/// A non-player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub id: u32,
    pub tile: Tile,
    cycles: u64,
}

impl Npc {
    pub fn new(id: u32, tile: Tile) -> Self {
        Self { id, tile, cycles: 0 }
    }

    /// Number of cycles this npc has been updated for
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl Pawn for Npc {
    fn cycle(&mut self) {
        self.cycles += 1;
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Npc
    }
}
