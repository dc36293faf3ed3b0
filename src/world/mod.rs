//! World objects, their definitions and scene fixtures

pub mod definitions;
pub mod objects;
pub mod scene;

pub use definitions::{DefinitionSet, ObjectDefinition, ObjectDefinitions};
pub use objects::{GameObject, ObjectType};
pub use scene::Scene;
