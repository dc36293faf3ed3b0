//! Object definitions and the lookup service the collision builder reads from

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Static properties shared by every placement of an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub id: u32,
    #[serde(default = "default_size")]
    pub size_x: u32,
    #[serde(default = "default_size")]
    pub size_y: u32,
    #[serde(default = "default_true")]
    pub solid: bool,
    #[serde(default = "default_true")]
    pub blocks_projectile: bool,
    #[serde(default = "default_interact_type")]
    pub interact_type: i32,
}

fn default_size() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_interact_type() -> i32 {
    2
}

impl ObjectDefinition {
    /// A 1x1 solid, projectile-blocking, non-interactive definition
    pub fn new(id: u32) -> Self {
        Self {
            id,
            size_x: default_size(),
            size_y: default_size(),
            solid: true,
            blocks_projectile: true,
            interact_type: default_interact_type(),
        }
    }

    pub fn with_size(mut self, size_x: u32, size_y: u32) -> Self {
        self.size_x = size_x;
        self.size_y = size_y;
        self
    }

    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    pub fn with_blocks_projectile(mut self, blocks_projectile: bool) -> Self {
        self.blocks_projectile = blocks_projectile;
        self
    }

    pub fn with_interact_type(mut self, interact_type: i32) -> Self {
        self.interact_type = interact_type;
        self
    }

    /// Only the low byte of the interact type is meaningful
    pub fn is_interactive(&self) -> bool {
        (self.interact_type & 0xFF) == 1
    }
}

/// Source of object definitions, keyed by object id
pub trait DefinitionSet {
    fn get(&self, id: u32) -> Option<&ObjectDefinition>;
}

/// In-memory definition store
#[derive(Debug, Clone, Default)]
pub struct ObjectDefinitions {
    definitions: AHashMap<u32, ObjectDefinition>,
}

impl ObjectDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any previous one with the same id
    pub fn insert(&mut self, definition: ObjectDefinition) -> Option<ObjectDefinition> {
        self.definitions.insert(definition.id, definition)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl DefinitionSet for ObjectDefinitions {
    fn get(&self, id: u32) -> Option<&ObjectDefinition> {
        self.definitions.get(&id)
    }
}

impl FromIterator<ObjectDefinition> for ObjectDefinitions {
    fn from_iter<I: IntoIterator<Item = ObjectDefinition>>(iter: I) -> Self {
        let mut defs = ObjectDefinitions::new();
        for def in iter {
            defs.insert(def);
        }
        defs
    }
}
