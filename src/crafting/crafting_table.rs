//! Crafting menu hit-testing.
//!
//! The renderer lays out one button per recipe each frame and records where
//! it drew them in a [`RecipeButtonLayout`]. Mouse handling later reads that
//! layout to decide which recipe, if any, was clicked. The recipe catalog
//! itself is never touched.

use crate::crafting::Recipe;
use glam::Vec2;
use std::collections::HashMap;

/// Screen-space rectangle, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ButtonRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

/// Last-rendered button bounds keyed by recipe name
#[derive(Debug, Clone, Default)]
pub struct RecipeButtonLayout {
    buttons: HashMap<&'static str, ButtonRect>,
}

impl RecipeButtonLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack one button per recipe vertically, starting at `origin`
    pub fn stacked<'a>(
        recipes: impl IntoIterator<Item = &'a Recipe>,
        origin: Vec2,
        size: Vec2,
        spacing: f32,
    ) -> Self {
        let mut layout = Self::new();
        for (i, recipe) in recipes.into_iter().enumerate() {
            let y = origin.y + i as f32 * (size.y + spacing);
            layout.record(recipe.name, ButtonRect::new(origin.x, y, size.x, size.y));
        }
        layout
    }

    /// Store where a recipe's button was drawn this frame
    pub fn record(&mut self, recipe: &'static str, rect: ButtonRect) {
        self.buttons.insert(recipe, rect);
    }

    pub fn bounds(&self, recipe: &str) -> Option<ButtonRect> {
        self.buttons.get(recipe).copied()
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    /// First recipe in `recipes` order whose button contains `point`
    pub fn hit_test<'a>(
        &self,
        recipes: impl IntoIterator<Item = &'a Recipe>,
        point: Vec2,
    ) -> Option<&'a Recipe> {
        recipes
            .into_iter()
            .find(|recipe| self.bounds(recipe.name).is_some_and(|rect| rect.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::RECIPE_REGISTRY;

    #[test]
    fn test_rect_edges() {
        let rect = ButtonRect::new(10.0, 20.0, 100.0, 30.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(109.9, 49.9)));
        assert!(!rect.contains(Vec2::new(110.0, 25.0)));
        assert!(!rect.contains(Vec2::new(50.0, 50.0)));
        assert!(!rect.contains(Vec2::new(9.9, 25.0)));
    }

    #[test]
    fn test_hit_test_stacked() {
        let layout = RecipeButtonLayout::stacked(
            RECIPE_REGISTRY.iter(),
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 40.0),
            10.0,
        );

        let first = layout.hit_test(RECIPE_REGISTRY.iter(), Vec2::new(150.0, 120.0));
        assert_eq!(first.map(|r| r.name), Some("Stone Pickaxe"));

        let second = layout.hit_test(RECIPE_REGISTRY.iter(), Vec2::new(150.0, 160.0));
        assert_eq!(second.map(|r| r.name), Some("Cooked Meal"));

        // Gap between buttons
        assert!(layout.hit_test(RECIPE_REGISTRY.iter(), Vec2::new(150.0, 145.0)).is_none());
    }

    #[test]
    fn test_clear_forgets_buttons() {
        let mut layout = RecipeButtonLayout::new();
        layout.record("Stone Pickaxe", ButtonRect::new(0.0, 0.0, 50.0, 20.0));
        let inside = Vec2::new(10.0, 10.0);
        assert!(layout.hit_test(RECIPE_REGISTRY.iter(), inside).is_some());

        layout.clear();
        assert!(layout.bounds("Stone Pickaxe").is_none());
        assert!(layout.hit_test(RECIPE_REGISTRY.iter(), inside).is_none());
    }

    #[test]
    fn test_empty_layout_never_hits() {
        let layout = RecipeButtonLayout::new();
        assert!(layout.hit_test(RECIPE_REGISTRY.iter(), Vec2::new(0.0, 0.0)).is_none());
    }
}
