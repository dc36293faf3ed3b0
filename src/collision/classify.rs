//! Object classification: which tiles and faces an object blocks
//!
//! Type codes come from a fixed external taxonomy and the range checks
//! below follow it exactly. Shifting a bound by one silently changes which
//! objects block movement.

use super::update::CollisionUpdateBuilder;
use crate::core::error::{CollisionError, Result};
use crate::geometry::{Direction, Tile};
use crate::world::definitions::{DefinitionSet, ObjectDefinition};
use crate::world::objects::{GameObject, ObjectType};

const LENGTHWISE_WALL: u8 = ObjectType::LengthwiseWall.code();
const TRIANGULAR_CORNER: u8 = ObjectType::TriangularCorner.code();
const WALL_CORNER: u8 = ObjectType::WallCorner.code();
const RECTANGULAR_CORNER: u8 = ObjectType::RectangularCorner.code();
const DIAGONAL_WALL: u8 = ObjectType::DiagonalWall.code();
const INTERACTABLE: u8 = ObjectType::Interactable.code();
const DIAGONAL_INTERACTABLE: u8 = ObjectType::DiagonalInteractable.code();
const FLOOR_DECORATION: u8 = ObjectType::FloorDecoration.code();

/// Tile rectangle an object covers once rotated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectFootprint {
    pub width: i32,
    pub length: i32,
}

impl ObjectFootprint {
    /// Quarter turns 1 and 3 swap the definition's x and y sizes
    ///
    /// Sizes must fit in tile coordinates.
    pub fn new(definition: &ObjectDefinition, rotation: u8) -> Result<Self> {
        let too_large = || CollisionError::FootprintTooLarge(definition.size_x, definition.size_y);
        let size_x = i32::try_from(definition.size_x).map_err(|_| too_large())?;
        let size_y = i32::try_from(definition.size_y).map_err(|_| too_large())?;

        if rotation == 1 || rotation == 3 {
            Ok(Self {
                width: size_y,
                length: size_x,
            })
        } else {
            Ok(Self {
                width: size_x,
                length: size_y,
            })
        }
    }

    /// Every tile covered when the object's south-west corner is at `anchor`
    pub fn tiles(&self, anchor: Tile) -> impl Iterator<Item = Tile> {
        let length = self.length;
        (0..self.width).flat_map(move |dx| (0..length).map(move |dz| anchor.translate(dx, dz)))
    }
}

/// Whether an object of type `kind` blocks movement at all
pub fn is_unwalkable(definition: &ObjectDefinition, kind: u8) -> bool {
    let is_wall = (LENGTHWISE_WALL..=RECTANGULAR_CORNER).contains(&kind) || kind == DIAGONAL_WALL;
    let is_roof = kind > DIAGONAL_INTERACTABLE && kind < FLOOR_DECORATION;
    let is_solid_interactable =
        (kind == DIAGONAL_INTERACTABLE || kind == INTERACTABLE) && definition.solid;
    let is_solid_floor_decoration =
        kind == FLOOR_DECORATION && definition.is_interactive() && definition.solid;

    is_wall || is_roof || is_solid_interactable || is_solid_floor_decoration
}

fn orientation(table: &[Direction; 4], rotation: u8) -> Result<Direction> {
    table
        .get(rotation as usize)
        .copied()
        .ok_or(CollisionError::InvalidRotation(rotation))
}

impl CollisionUpdateBuilder {
    /// Flag everything `object` blocks
    ///
    /// The definition is looked up in `definitions`. Walkable objects add
    /// nothing.
    pub fn put_object<D>(&mut self, definitions: &D, object: &GameObject) -> Result<()>
    where
        D: DefinitionSet + ?Sized,
    {
        let definition = definitions
            .get(object.id)
            .ok_or(CollisionError::DefinitionNotFound(object.id))?;
        let kind = object.kind;
        let tile = object.tile;

        if !is_unwalkable(definition, kind) {
            tracing::trace!("Object {} (type {}) at {:?} is walkable", object.id, kind, tile);
            return Ok(());
        }

        let impenetrable = definition.blocks_projectile;

        match kind {
            FLOOR_DECORATION => {
                if definition.is_interactive() && definition.solid {
                    self.put_tile(tile, impenetrable, &Direction::NESW)?;
                }
            }
            _ if (DIAGONAL_WALL..FLOOR_DECORATION).contains(&kind) => {
                let footprint = ObjectFootprint::new(definition, object.rotation)?;
                for covered in footprint.tiles(tile) {
                    self.put_tile(covered, impenetrable, &Direction::NESW)?;
                }
            }
            LENGTHWISE_WALL => {
                let direction = orientation(&Direction::WNES, object.rotation)?;
                self.put_wall(tile, impenetrable, direction);
            }
            TRIANGULAR_CORNER | RECTANGULAR_CORNER => {
                let direction = orientation(&Direction::WNES_DIAGONAL, object.rotation)?;
                self.put_wall(tile, impenetrable, direction);
            }
            WALL_CORNER => {
                let direction = orientation(&Direction::WNES_DIAGONAL, object.rotation)?;
                self.put_large_corner_wall(tile, impenetrable, direction)?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Flag every object in `objects`, stopping at the first error
    pub fn put_objects<'a, D, I>(&mut self, definitions: &D, objects: I) -> Result<()>
    where
        D: DefinitionSet + ?Sized,
        I: IntoIterator<Item = &'a GameObject>,
    {
        for object in objects {
            self.put_object(definitions, object)?;
        }
        Ok(())
    }
}
