use super::slot::{BlockStack, InventorySlot};
use crate::constants::inventory::INVENTORY_SLOTS;
use crate::item::ResourceKind;
use crate::world::BlockId;
use std::collections::BTreeMap;

/// Player's inventory: raw resource counters plus a fixed row of
/// block-placement slots with a wrapping selection cursor.
#[derive(Debug, Clone)]
pub struct Inventory {
    resources: BTreeMap<ResourceKind, u32>,
    slots: [InventorySlot; INVENTORY_SLOTS],
    selected: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
            slots: [InventorySlot::empty(); INVENTORY_SLOTS],
            selected: 0,
        }
    }

    /// Current count of a resource; unseen kinds are zero
    pub fn resource(&self, kind: ResourceKind) -> u32 {
        self.resources.get(&kind).copied().unwrap_or(0)
    }

    /// Every counter that has been credited at least once
    pub fn resources(&self) -> &BTreeMap<ResourceKind, u32> {
        &self.resources
    }

    pub fn add_resource(&mut self, kind: ResourceKind, amount: u32) {
        let count = self.resources.entry(kind).or_insert(0);
        *count = count.saturating_add(amount);
    }

    /// Debit `amount` of `kind`. Leaves the counter untouched and returns
    /// false when the balance is short.
    pub fn consume_resource(&mut self, kind: ResourceKind, amount: u32) -> bool {
        let available = self.resource(kind);
        if available < amount {
            return false;
        }
        self.resources.insert(kind, available - amount);
        true
    }

    /// Move the cursor one slot; positive steps forward, negative back,
    /// zero leaves it alone. Wraps at both ends.
    pub fn toggle_selection(&mut self, direction: i32) {
        self.selected = match direction.signum() {
            1 => (self.selected + 1) % INVENTORY_SLOTS,
            -1 => (self.selected + INVENTORY_SLOTS - 1) % INVENTORY_SLOTS,
            _ => self.selected,
        };
    }

    /// Jump the cursor directly; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < INVENTORY_SLOTS {
            self.selected = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Overwrite the selected slot with a single placeable block
    pub fn set_block(&mut self, block: BlockId) {
        self.slots[self.selected].put(BlockStack { block, amount: 1 });
    }

    pub fn selected_block(&self) -> Option<BlockId> {
        self.slots[self.selected].block()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
