use crate::constants::vitals::{MAX_HEALTH, MAX_HUNGER};
use serde::{Deserialize, Serialize};

/// Health and hunger, both kept within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    health: i32,
    hunger: i32,
}

impl Vitals {
    pub fn new(health: i32, hunger: i32) -> Self {
        Self {
            health: health.clamp(0, MAX_HEALTH),
            hunger: hunger.clamp(0, MAX_HUNGER),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    /// Apply a signed change to health, clamped
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, MAX_HEALTH);
    }

    /// Apply a signed change to hunger, clamped
    pub fn adjust_hunger(&mut self, delta: i32) {
        self.hunger = self.hunger.saturating_add(delta).clamp(0, MAX_HUNGER);
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(MAX_HEALTH, MAX_HUNGER)
    }
}
