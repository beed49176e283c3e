//! Tilecraft: a top-down survival sandbox simulation.
//!
//! The player walks a procedurally generated tile grid, mines blocks for
//! resources, places blocks back, crafts, and keeps hunger and health up.
//! Drawing and raw input capture belong to the host runtime: it calls
//! [`Game::update`] once per frame, forwards input events to the `handle_*`
//! methods, and reads state back (or takes a [`GameSnapshot`]) to draw.
//!
//! ```
//! use tilecraft::{Game, GameConfig, KeyCode};
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = Game::new(&config).expect("default config is valid");
//!
//! game.handle_key(KeyCode::KeyD);
//! game.update();
//! assert_eq!(game.frame(), 1);
//! ```

pub mod config;
pub mod constants;
pub mod crafting;
pub mod error;
pub mod game;
pub mod input;
pub mod inventory;
pub mod item;
pub mod player;
pub mod time;
pub mod world;

pub use config::GameConfig;
pub use crafting::{ButtonRect, Recipe, RecipeButtonLayout, RECIPE_REGISTRY};
pub use error::{GameError, GameResult};
pub use game::{Game, GameMode, GameSnapshot};
pub use input::{InputEvent, KeyCode, MouseButton};
pub use inventory::Inventory;
pub use item::ResourceKind;
pub use player::Player;
pub use world::{BlockId, World, BLOCK_REGISTRY};
