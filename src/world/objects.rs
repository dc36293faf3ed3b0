//! Static world objects and their type codes

use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::geometry::Tile;

/// Object type codes from the map format
///
/// Only the codes the collision rules test against are named. Codes 4..=8
/// are wall decorations and 12..=21 are roof pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectType {
    LengthwiseWall = 0,
    TriangularCorner = 1,
    WallCorner = 2,
    RectangularCorner = 3,
    DiagonalWall = 9,
    Interactable = 10,
    DiagonalInteractable = 11,
    FloorDecoration = 22,
}

impl ObjectType {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<ObjectType> {
        match code {
            0 => Some(ObjectType::LengthwiseWall),
            1 => Some(ObjectType::TriangularCorner),
            2 => Some(ObjectType::WallCorner),
            3 => Some(ObjectType::RectangularCorner),
            9 => Some(ObjectType::DiagonalWall),
            10 => Some(ObjectType::Interactable),
            11 => Some(ObjectType::DiagonalInteractable),
            22 => Some(ObjectType::FloorDecoration),
            _ => None,
        }
    }
}

/// A static object placed in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    /// Definition id
    pub id: u32,
    /// Raw type code, see [`ObjectType`]
    #[serde(rename = "type")]
    pub kind: u8,
    pub tile: Tile,
    /// Quarter turns clockwise, 0..=3
    #[serde(default)]
    pub rotation: u8,
}

impl GameObject {
    pub fn new(id: u32, kind: u8, tile: Tile, rotation: u8) -> Self {
        Self {
            id,
            kind,
            tile,
            rotation,
        }
    }

    /// Shorthand for objects of a named type
    pub fn of_type(id: u32, kind: ObjectType, tile: Tile, rotation: u8) -> Self {
        Self::new(id, kind.code(), tile, rotation)
    }

    pub fn object_type(&self) -> Option<ObjectType> {
        ObjectType::from_code(self.kind)
    }

    pub fn entity_type(&self) -> EntityType {
        EntityType::StaticObject
    }
}
