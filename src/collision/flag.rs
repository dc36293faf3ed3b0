use serde::{Deserialize, Serialize};

use crate::geometry::Direction;

/// Movement across one face of a tile is blocked
///
/// An impenetrable flag also stops projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionFlag {
    pub direction: Direction,
    pub impenetrable: bool,
}

impl DirectionFlag {
    pub fn new(direction: Direction, impenetrable: bool) -> Self {
        Self {
            direction,
            impenetrable,
        }
    }
}
