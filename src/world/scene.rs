//! JSON scene fixtures
//!
//! A scene bundles a handful of object definitions with the objects placed
//! from them. It exists for debugging tools and tests; the live server gets
//! its definitions from the game cache instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::definitions::{ObjectDefinition, ObjectDefinitions};
use super::objects::GameObject;
use crate::collision::{CollisionUpdate, CollisionUpdateBuilder, UpdateKind};
use crate::core::error::Result;

/// Root structure for scene JSON files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Optional human-readable name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub definitions: Vec<ObjectDefinition>,
    #[serde(default)]
    pub objects: Vec<GameObject>,
}

impl Scene {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Definition store built from this scene's definitions
    pub fn definitions(&self) -> ObjectDefinitions {
        self.definitions.iter().cloned().collect()
    }

    /// Build one update covering every object in the scene
    pub fn collision_update(&self, kind: UpdateKind) -> Result<CollisionUpdate> {
        let definitions = self.definitions();
        let mut builder = CollisionUpdateBuilder::with_kind(kind);
        builder.put_objects(&definitions, &self.objects)?;
        builder.build()
    }
}
