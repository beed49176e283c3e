use crate::item::ResourceKind;

/// Extra state change applied when a recipe is crafted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeEffect {
    /// Lets the player extract ore blocks
    UnlockOreMining,
}

/// A crafting recipe: resource costs in, resource yields out.
/// Recipes are identified by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<(ResourceKind, u32)>,
    pub outputs: Vec<(ResourceKind, u32)>,
    pub effect: Option<RecipeEffect>,
}

impl Recipe {
    pub fn new(
        name: &'static str,
        description: &'static str,
        inputs: Vec<(ResourceKind, u32)>,
        outputs: Vec<(ResourceKind, u32)>,
    ) -> Self {
        Self {
            name,
            description,
            inputs,
            outputs,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: RecipeEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Cost of `kind`, zero if the recipe does not use it
    pub fn cost(&self, kind: ResourceKind) -> u32 {
        self.inputs
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, amount)| amount)
            .sum()
    }
}

/// Immutable, ordered list of every recipe
#[derive(Debug)]
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
}

lazy_static::lazy_static! {
    pub static ref RECIPE_REGISTRY: RecipeRegistry = RecipeRegistry::with_default_recipes();
}

impl RecipeRegistry {
    fn with_default_recipes() -> Self {
        use ResourceKind::*;

        Self {
            recipes: vec![
                Recipe::new(
                    "Stone Pickaxe",
                    "Lets you mine ore",
                    vec![(Wood, 1), (Stone, 2)],
                    vec![(Ore, 1)],
                )
                .with_effect(RecipeEffect::UnlockOreMining),
                Recipe::new(
                    "Cooked Meal",
                    "Cook food over a wood fire",
                    vec![(Wood, 1), (Food, 1)],
                    vec![(Food, 2)],
                ),
                Recipe::new(
                    "Crushed Ore",
                    "Break ore down into stone",
                    vec![(Ore, 1)],
                    vec![(Stone, 3)],
                ),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Recipes in display order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
