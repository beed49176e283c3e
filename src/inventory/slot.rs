use crate::world::BlockId;
use serde::{Deserialize, Serialize};

/// A placeable block held in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStack {
    pub block: BlockId,
    pub amount: u32,
}

/// A single block-placement slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    pub item: Option<BlockStack>,
}

impl InventorySlot {
    pub fn empty() -> Self {
        Self { item: None }
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn block(&self) -> Option<BlockId> {
        self.item.map(|stack| stack.block)
    }

    /// Put a stack in this slot, returns previous stack if any
    pub fn put(&mut self, stack: BlockStack) -> Option<BlockStack> {
        self.item.replace(stack)
    }
}
