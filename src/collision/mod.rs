//! Collision flag building
//!
//! Static objects are turned into per-tile direction flags by a
//! [`CollisionUpdateBuilder`]. The finished [`CollisionUpdate`] is folded
//! into a [`CollisionGrid`] by whoever owns the region state.

pub mod classify;
pub mod flag;
pub mod grid;
pub mod update;

pub use classify::{is_unwalkable, ObjectFootprint};
pub use flag::DirectionFlag;
pub use grid::CollisionGrid;
pub use update::{CollisionUpdate, CollisionUpdateBuilder, UpdateKind};
