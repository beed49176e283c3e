use crate::item::ResourceKind;
use crate::world::BlockId;
use serde::{Deserialize, Serialize};

/// What a mined block hands to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockDrop {
    /// Credited to the matching resource counter
    Resource(ResourceKind),
    /// Stored in the selected placement slot
    Block(BlockId),
}

/// Per-block drop rule stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRule {
    Nothing,
    Resource(ResourceKind),
    Block(BlockId),
}

impl DropRule {
    pub fn resolve(self) -> Option<BlockDrop> {
        match self {
            DropRule::Nothing => None,
            DropRule::Resource(kind) => Some(BlockDrop::Resource(kind)),
            DropRule::Block(id) => Some(BlockDrop::Block(id)),
        }
    }
}
