//! The player: grid position, vitals, tool unlocks and inventory.
//!
//! Every action returns `true` when it changed state and `false` when it was
//! a silent no-op (out of bounds, blocked, nothing selected, can't afford).

pub mod vitals;

pub use vitals::Vitals;

use crate::constants::vitals::{
    EAT_HEALTH_GAIN, EAT_HUNGER_GAIN, FORAGE_CHANCE, HUNGER_DECAY, HUNGER_INTERVAL,
    STARVATION_DAMAGE,
};
use crate::inventory::Inventory;
use crate::item::ResourceKind;
use crate::world::{BlockDrop, BlockId, World, BLOCK_REGISTRY};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Player {
    x: i32,
    y: i32,
    vitals: Vitals,
    can_mine_ore: bool,
    last_hunger_tick: u64,
    hunger_interval: u64,
    inventory: Inventory,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            vitals: Vitals::default(),
            can_mine_ore: false,
            last_hunger_tick: 0,
            hunger_interval: HUNGER_INTERVAL,
            inventory: Inventory::new(),
        }
    }

    /// Spawn at `(width / 2, height / 2)`
    pub fn at_center(world: &World) -> Self {
        Self::new((world.width() / 2) as i32, (world.height() / 2) as i32)
    }

    pub fn with_hunger_interval(mut self, frames: u64) -> Self {
        self.hunger_interval = frames.max(1);
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn health(&self) -> i32 {
        self.vitals.health()
    }

    pub fn hunger(&self) -> i32 {
        self.vitals.hunger()
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn is_starving(&self) -> bool {
        self.vitals.hunger() == 0
    }

    pub fn can_mine_ore(&self) -> bool {
        self.can_mine_ore
    }

    pub fn unlock_ore_mining(&mut self) {
        self.can_mine_ore = true;
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Step one cell. Blocked by the world edge and by solid blocks.
    pub fn move_by(&mut self, world: &World, dx: i32, dy: i32) -> bool {
        let (Some(tx), Some(ty)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        if !world.in_bounds(tx, ty) {
            return false;
        }
        if BLOCK_REGISTRY.is_solid(world.get(tx, ty)) {
            log::trace!("Move to ({}, {}) blocked by {}", tx, ty, world.get(tx, ty));
            return false;
        }
        self.x = tx;
        self.y = ty;
        true
    }

    /// Break the block at `(x, y)` and collect its drop.
    ///
    /// Ore stays put until a pickaxe unlocks it. Raw materials go to the
    /// resource counters; any other drop lands in the selected slot as a
    /// placeable block. A successful mine may also forage one food.
    pub fn mine<R: Rng + ?Sized>(&mut self, world: &mut World, x: i32, y: i32, rng: &mut R) -> bool {
        let block = world.get(x, y);
        if block.is_air() {
            return false;
        }
        if block == BlockId::ORE && !self.can_mine_ore {
            log::trace!("Ore at ({}, {}) needs a pickaxe", x, y);
            return false;
        }

        let drop = BLOCK_REGISTRY.drop_for(block);
        world.set(x, y, BlockId::AIR);

        match drop {
            Some(BlockDrop::Resource(kind)) => self.inventory.add_resource(kind, 1),
            Some(BlockDrop::Block(placeable)) => self.inventory.set_block(placeable),
            None => {}
        }

        if rng.gen_bool(FORAGE_CHANCE) {
            self.inventory.add_resource(ResourceKind::Food, 1);
            log::debug!("Foraged food while mining {} at ({}, {})", block, x, y);
        }

        log::debug!("Mined {} at ({}, {}), drop {:?}", block, x, y, drop);
        true
    }

    /// Put the selected block on an air cell. The slot is not consumed.
    pub fn place(&mut self, world: &mut World, x: i32, y: i32) -> bool {
        if !world.in_bounds(x, y) || !world.get(x, y).is_air() {
            return false;
        }
        let Some(block) = self.inventory.selected_block() else {
            return false;
        };
        world.set(x, y, block);
        log::debug!("Placed {} at ({}, {})", block, x, y);
        true
    }

    /// Consume one food to restore hunger and health
    pub fn eat(&mut self) -> bool {
        if !self.inventory.consume_resource(ResourceKind::Food, 1) {
            return false;
        }
        self.vitals.adjust_hunger(EAT_HUNGER_GAIN);
        self.vitals.adjust_health(EAT_HEALTH_GAIN);
        log::debug!("Ate food: health {}, hunger {}", self.health(), self.hunger());
        true
    }

    /// Per-frame hunger decay. Returns true on frames where a hunger tick fired.
    pub fn update(&mut self, frame: u64) -> bool {
        if frame.saturating_sub(self.last_hunger_tick) < self.hunger_interval {
            return false;
        }
        self.last_hunger_tick = frame;
        self.vitals.adjust_hunger(-HUNGER_DECAY);
        if self.is_starving() {
            self.vitals.adjust_health(-STARVATION_DAMAGE);
            log::debug!("Starving: health {}", self.health());
        }
        true
    }
}
