use thiserror::Error;

use crate::geometry::{Direction, Tile};

#[derive(Error, Debug)]
pub enum CollisionError {
    #[error("Update kind has already been set")]
    KindAlreadySet,

    #[error("Update kind has not been set")]
    KindNotSet,

    #[error("Directions must not be empty")]
    EmptyDirections,

    #[error("Direction is not diagonal: {0:?}")]
    NotDiagonal(Direction),

    #[error("Invalid object rotation: {0}")]
    InvalidRotation(u8),

    #[error("Object footprint too large: {0}x{1}")]
    FootprintTooLarge(u32, u32),

    #[error("Object definition not found: {0}")]
    DefinitionNotFound(u32),

    #[error("Tile outside configured height levels: {0:?}")]
    HeightOutOfBounds(Tile),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CollisionError>;
