pub mod crafting_table;
pub mod recipe;

pub use crafting_table::{ButtonRect, RecipeButtonLayout};
pub use recipe::{Recipe, RecipeEffect, RecipeRegistry, RECIPE_REGISTRY};
