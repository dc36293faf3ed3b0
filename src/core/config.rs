//! Collision grid configuration
//!
//! The grid splits the world into square regions and stores a fixed number
//! of height planes per region. Both values come from the map format and
//! rarely change, but they are read from TOML so tools can load maps with
//! other layouts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CollisionError, Result};

/// Configuration for the region collision grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width and length of one region, in tiles
    ///
    /// Each region is backed by one dense block of
    /// `height_levels * region_size * region_size` cells, so larger regions
    /// mean fewer map lookups and more memory per touched region.
    pub region_size: u32,

    /// Number of vertical planes per region
    ///
    /// Tiles with a height outside `0..height_levels` are rejected when an
    /// update is applied.
    pub height_levels: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            region_size: 64,
            height_levels: 4,
        }
    }
}

impl GridConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.region_size == 0 {
            return Err(CollisionError::InvalidConfig(
                "region_size must be positive".into(),
            ));
        }

        if self.height_levels == 0 {
            return Err(CollisionError::InvalidConfig(
                "height_levels must be positive".into(),
            ));
        }

        // One region block is indexed with usize; keep it well inside u32 range
        let cells = self.region_size as u64 * self.region_size as u64 * self.height_levels as u64;
        if cells > u32::MAX as u64 {
            return Err(CollisionError::InvalidConfig(format!(
                "region of {} tiles x {} levels is too large",
                self.region_size, self.height_levels
            )));
        }

        Ok(())
    }

    /// Number of cells in one region block
    pub fn cells_per_region(&self) -> usize {
        (self.region_size * self.region_size * self.height_levels) as usize
    }
}
