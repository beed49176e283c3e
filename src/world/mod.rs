//! Tile world: block catalog, drop rules, terrain generation and the grid itself.
//!
//! - [`block`]: `BlockId` and the static `BLOCK_REGISTRY` (color, solidity, drop rule)
//! - [`block_drops`]: what mining a block yields
//! - [`generation`]: probability-band terrain generator
//! - [`world`]: bounds-checked tile grid

pub mod block;
pub mod block_drops;
pub mod generation;
#[allow(clippy::module_inception)]
pub mod world;

pub use block::{BlockId, BlockRegistry, BlockType, Color, BLOCK_REGISTRY, MISSING_COLOR};
pub use block_drops::{BlockDrop, DropRule};
pub use generation::TerrainGenerator;
pub use world::World;
