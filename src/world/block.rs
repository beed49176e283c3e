use crate::item::ResourceKind;
use crate::world::block_drops::{BlockDrop, DropRule};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u8);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match BLOCK_REGISTRY.get(*self) {
            Some(block) => f.write_str(block.name),
            None => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const GRASS: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const WATER: BlockId = BlockId(4);
    pub const TREE: BlockId = BlockId(5);
    pub const ORE: BlockId = BlockId(6);

    pub fn is_air(self) -> bool {
        self == BlockId::AIR
    }
}

/// RGBA display color
pub type Color = [u8; 4];

/// Color used for ids with no catalog entry
pub const MISSING_COLOR: Color = [255, 0, 255, 255];

/// Static description of one block kind
#[derive(Debug, Clone, Copy)]
pub struct BlockType {
    pub id: BlockId,
    pub name: &'static str,
    pub color: Color,
    /// Blocks player movement
    pub solid: bool,
    pub drop: DropRule,
}

/// Immutable catalog of every block kind, built once at startup
#[derive(Debug)]
pub struct BlockRegistry {
    blocks: HashMap<BlockId, BlockType>,
}

lazy_static::lazy_static! {
    pub static ref BLOCK_REGISTRY: BlockRegistry = BlockRegistry::with_default_blocks();
}

impl BlockRegistry {
    fn with_default_blocks() -> Self {
        let defaults = [
            BlockType {
                id: BlockId::AIR,
                name: "Air",
                color: [0, 0, 0, 0],
                solid: false,
                drop: DropRule::Nothing,
            },
            BlockType {
                id: BlockId::GRASS,
                name: "Grass",
                color: [86, 168, 60, 255],
                solid: false,
                drop: DropRule::Block(BlockId::DIRT),
            },
            BlockType {
                id: BlockId::DIRT,
                name: "Dirt",
                color: [134, 96, 67, 255],
                solid: false,
                drop: DropRule::Block(BlockId::DIRT),
            },
            BlockType {
                id: BlockId::STONE,
                name: "Stone",
                color: [128, 128, 128, 255],
                solid: true,
                drop: DropRule::Resource(ResourceKind::Stone),
            },
            BlockType {
                id: BlockId::WATER,
                name: "Water",
                color: [52, 101, 200, 255],
                solid: true,
                drop: DropRule::Nothing,
            },
            BlockType {
                id: BlockId::TREE,
                name: "Tree",
                color: [34, 99, 34, 255],
                solid: true,
                drop: DropRule::Resource(ResourceKind::Wood),
            },
            BlockType {
                id: BlockId::ORE,
                name: "Ore",
                color: [212, 175, 55, 255],
                solid: true,
                drop: DropRule::Resource(ResourceKind::Ore),
            },
        ];

        Self {
            blocks: defaults.into_iter().map(|b| (b.id, b)).collect(),
        }
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(&id)
    }

    /// Unknown ids never block movement
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get(id).is_some_and(|b| b.solid)
    }

    pub fn color(&self, id: BlockId) -> Color {
        self.get(id).map_or(MISSING_COLOR, |b| b.color)
    }

    /// Resolve what mining `id` yields
    pub fn drop_for(&self, id: BlockId) -> Option<BlockDrop> {
        self.get(id).and_then(|b| b.drop.resolve())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
