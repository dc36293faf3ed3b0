//! Grid geometry: compass directions and tile coordinates

pub mod direction;
pub mod tile;

pub use direction::Direction;
pub use tile::Tile;
