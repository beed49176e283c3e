// Tilecraft Constants
//
// Tuning values shared by the world, player and game modules.
// GameConfig overrides the world/tile/hunger-interval values at runtime;
// everything else is fixed.

/// World and screen geometry
pub mod world {
    /// Default world size in tiles
    pub const DEFAULT_WIDTH: usize = 40;
    pub const DEFAULT_HEIGHT: usize = 30;

    /// Pixels per tile edge (screen coords / TILE_SIZE = tile coords)
    pub const TILE_SIZE: u32 = 20;

    /// Upper bound on width * height accepted from config
    pub const MAX_TILES: usize = 1 << 24;
}

/// Terrain generation bands
pub mod terrain {
    /// Dirt band above the bottom water row, inclusive range
    pub const DIRT_BAND_MIN: usize = 4;
    pub const DIRT_BAND_MAX: usize = 6;

    /// Descending thresholds over a uniform sample in [0, 1)
    pub const TREE_THRESHOLD: f64 = 0.92;
    pub const GRASS_THRESHOLD: f64 = 0.85;
    pub const STONE_THRESHOLD: f64 = 0.80;
    pub const ORE_THRESHOLD: f64 = 0.77;
}

/// Inventory layout
pub mod inventory {
    /// Number of block-placement slots
    pub const INVENTORY_SLOTS: usize = 9;
}

/// Player vitals
pub mod vitals {
    pub const MAX_HEALTH: i32 = 100;
    pub const MAX_HUNGER: i32 = 100;

    /// Frames between hunger ticks
    pub const HUNGER_INTERVAL: u64 = 300;
    pub const HUNGER_DECAY: i32 = 5;
    pub const STARVATION_DAMAGE: i32 = 10;

    /// Eating one unit of food
    pub const EAT_HUNGER_GAIN: i32 = 20;
    pub const EAT_HEALTH_GAIN: i32 = 10;

    /// Chance of a bonus food unit per successful mine
    pub const FORAGE_CHANCE: f64 = 0.3;
}

/// Day/night ambient cycle
pub mod time {
    /// Frames per full day (60 seconds at 60 fps)
    pub const DAY_LENGTH_FRAMES: u64 = 3600;

    /// Darkest overlay alpha at midnight
    pub const MAX_NIGHT_ALPHA: f32 = 0.6;
}
