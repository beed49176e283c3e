//! Session configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! world_width = 64
//! world_height = 48
//! seed = 42
//! ```

use crate::constants::{vitals, world};
use crate::error::{invalid_config, GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: usize,
    pub world_height: usize,
    pub tile_size: u32,
    /// Frames between hunger ticks
    pub hunger_interval: u64,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: world::DEFAULT_WIDTH,
            world_height: world::DEFAULT_HEIGHT,
            tile_size: world::TILE_SIZE,
            hunger_interval: vitals::HUNGER_INTERVAL,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(raw: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(invalid_config(format!(
                "world must be at least 1x1, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.world_width > i32::MAX as usize || self.world_height > i32::MAX as usize {
            return Err(invalid_config("world dimensions exceed i32 range"));
        }
        match self.world_width.checked_mul(self.world_height) {
            Some(tiles) if tiles <= world::MAX_TILES => {}
            _ => {
                return Err(invalid_config(format!(
                    "world of {}x{} tiles exceeds the {} tile limit",
                    self.world_width,
                    self.world_height,
                    world::MAX_TILES
                )))
            }
        }
        if self.tile_size == 0 {
            return Err(invalid_config("tile_size must be non-zero"));
        }
        if self.hunger_interval == 0 {
            return Err(invalid_config("hunger_interval must be non-zero"));
        }
        Ok(())
    }
}
