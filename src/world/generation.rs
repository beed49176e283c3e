use crate::constants::terrain::{
    DIRT_BAND_MAX, DIRT_BAND_MIN, GRASS_THRESHOLD, ORE_THRESHOLD, STONE_THRESHOLD, TREE_THRESHOLD,
};
use crate::world::BlockId;
use rand::Rng;

/// Fills a tile grid row by row.
///
/// The bottom row is water, a dirt band of 4-6 rows sits above it, and the
/// rest is sampled from descending probability bands. There are no
/// connectivity or biome guarantees.
pub struct TerrainGenerator {
    width: usize,
    height: usize,
}

impl TerrainGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Generate a row-major tile grid of `width * height` cells
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<BlockId> {
        let dirt_band = rng.gen_range(DIRT_BAND_MIN..=DIRT_BAND_MAX);
        let mut tiles = vec![BlockId::DIRT; self.width * self.height];

        for y in 0..self.height {
            for x in 0..self.width {
                tiles[y * self.width + x] = self.tile_at(y, dirt_band, rng);
            }
        }

        tiles
    }

    fn tile_at<R: Rng + ?Sized>(&self, y: usize, dirt_band: usize, rng: &mut R) -> BlockId {
        let rows_from_bottom = self.height - 1 - y;
        if rows_from_bottom == 0 {
            return BlockId::WATER;
        }
        if rows_from_bottom <= dirt_band {
            return BlockId::DIRT;
        }
        surface_block(rng.gen::<f64>())
    }
}

/// Map a uniform sample in [0, 1) to a surface block
pub fn surface_block(sample: f64) -> BlockId {
    if sample > TREE_THRESHOLD {
        BlockId::TREE
    } else if sample > GRASS_THRESHOLD {
        BlockId::GRASS
    } else if sample > STONE_THRESHOLD {
        BlockId::STONE
    } else if sample > ORE_THRESHOLD {
        BlockId::ORE
    } else {
        BlockId::GRASS
    }
}
