pub mod player_inventory;
pub mod slot;

pub use crate::constants::inventory::INVENTORY_SLOTS;
pub use player_inventory::Inventory;
pub use slot::{BlockStack, InventorySlot};
