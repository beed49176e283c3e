//! Game session: owns the world, the player and the frame clock, and routes
//! host input into them.
//!
//! The session has two modes. In [`GameMode::Exploring`] mouse clicks mine
//! (primary) and place (secondary). In [`GameMode::CraftingMenuOpen`] clicks
//! only hit-test recipe buttons and never touch the world. The craft-menu key
//! is the only way between the two.

pub mod snapshot;

pub use snapshot::GameSnapshot;

use crate::config::GameConfig;
use crate::crafting::{Recipe, RecipeButtonLayout, RecipeEffect, RECIPE_REGISTRY};
use crate::error::GameResult;
use crate::input::{wheel_direction, InputEvent, KeyAction, KeyBindings, KeyCode, MouseButton};
use crate::player::Player;
use crate::time::DayNightCycle;
use crate::world::World;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    Exploring,
    CraftingMenuOpen,
}

pub struct Game {
    world: World,
    player: Player,
    frame: u64,
    crafting_open: bool,
    tile_size: u32,
    bindings: KeyBindings,
    day_night: DayNightCycle,
    rng: StdRng,
}

impl Game {
    /// Bootstrap a session: generate the world and spawn the player at its center
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = World::generate_with(config.world_width, config.world_height, &mut rng);
        let player = Player::at_center(&world).with_hunger_interval(config.hunger_interval);

        log::info!(
            "New session: {}x{} world, player at {:?}, seed {:?}",
            world.width(),
            world.height(),
            player.position(),
            config.seed
        );

        Ok(Self::from_parts(world, player, config.tile_size, rng))
    }

    /// Assemble a session from an existing world and player
    pub fn from_parts(world: World, player: Player, tile_size: u32, rng: StdRng) -> Self {
        Self {
            world,
            player,
            frame: 0,
            crafting_open: false,
            tile_size: tile_size.max(1),
            bindings: KeyBindings::default(),
            day_night: DayNightCycle::default(),
            rng,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn is_crafting_open(&self) -> bool {
        self.crafting_open
    }

    pub fn mode(&self) -> GameMode {
        if self.crafting_open {
            GameMode::CraftingMenuOpen
        } else {
            GameMode::Exploring
        }
    }

    /// Advance one frame and run per-frame player upkeep
    pub fn update(&mut self) {
        self.frame += 1;
        self.player.update(self.frame);
    }

    /// Move the player if `key` is bound to a direction
    pub fn handle_movement(&mut self, key: KeyCode) -> bool {
        match self.bindings.movement_for(key) {
            Some((dx, dy)) => self.player.move_by(&self.world, dx, dy),
            None => false,
        }
    }

    /// Route a key press to movement, eating or the crafting toggle
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.bindings.action_for(key) {
            Some(KeyAction::ToggleCrafting) => {
                self.toggle_crafting();
                true
            }
            Some(KeyAction::Eat) => self.eat(),
            Some(KeyAction::Move { dx, dy }) => self.player.move_by(&self.world, dx, dy),
            None => false,
        }
    }

    pub fn toggle_crafting(&mut self) {
        self.crafting_open = !self.crafting_open;
        log::debug!("Crafting menu {}", if self.crafting_open { "opened" } else { "closed" });
    }

    pub fn eat(&mut self) -> bool {
        self.player.eat()
    }

    /// Craft `recipe` if every input is affordable at once.
    /// Either all costs are paid and all yields credited, or nothing changes.
    pub fn try_craft(&mut self, recipe: &Recipe) -> bool {
        let inventory = self.player.inventory_mut();
        let affordable = recipe
            .inputs
            .iter()
            .all(|&(kind, _)| inventory.resource(kind) >= recipe.cost(kind));
        if !affordable {
            log::trace!("Cannot afford {}", recipe.name);
            return false;
        }

        for &(kind, amount) in &recipe.inputs {
            inventory.consume_resource(kind, amount);
        }
        for &(kind, amount) in &recipe.outputs {
            inventory.add_resource(kind, amount);
        }

        match recipe.effect {
            Some(RecipeEffect::UnlockOreMining) => self.player.unlock_ore_mining(),
            None => {}
        }

        log::debug!("Crafted {}", recipe.name);
        true
    }

    /// Craft by recipe name; unknown names are a no-op
    pub fn try_craft_named(&mut self, name: &str) -> bool {
        match RECIPE_REGISTRY.get(name) {
            Some(recipe) => self.try_craft(recipe),
            None => false,
        }
    }

    /// Handle a click at screen coordinates.
    ///
    /// With the menu open, `layout` decides which recipe button (if any) was
    /// hit. Otherwise the click is converted to a tile and mines or places.
    pub fn handle_mouse(
        &mut self,
        x: f32,
        y: f32,
        button: MouseButton,
        layout: &RecipeButtonLayout,
    ) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        if self.crafting_open {
            return match layout.hit_test(RECIPE_REGISTRY.iter(), Vec2::new(x, y)) {
                Some(recipe) => self.try_craft(recipe),
                None => false,
            };
        }

        let (tx, ty) = self.screen_to_tile(x, y);
        if !self.world.in_bounds(tx, ty) {
            return false;
        }
        match button {
            MouseButton::Left => self.player.mine(&mut self.world, tx, ty, &mut self.rng),
            MouseButton::Right => self.player.place(&mut self.world, tx, ty),
            _ => false,
        }
    }

    /// Cycle the selected placement slot by the sign of `delta`
    pub fn handle_wheel(&mut self, delta: f32) {
        self.player
            .inventory_mut()
            .toggle_selection(wheel_direction(delta));
    }

    pub fn handle_input(&mut self, event: InputEvent, layout: &RecipeButtonLayout) -> bool {
        match event {
            InputEvent::KeyDown(key) => self.handle_key(key),
            InputEvent::MouseClick { x, y, button } => self.handle_mouse(x, y, button, layout),
            InputEvent::Wheel { delta } => {
                self.handle_wheel(delta);
                wheel_direction(delta) != 0
            }
        }
    }

    /// Tile under a screen position
    pub fn screen_to_tile(&self, x: f32, y: f32) -> (i32, i32) {
        let size = self.tile_size as f32;
        ((x / size).floor() as i32, (y / size).floor() as i32)
    }

    /// Night overlay RGBA for the current frame
    pub fn ambient_tint(&self) -> [u8; 4] {
        self.day_night.tint_color(self.frame)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
