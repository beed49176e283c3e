use crate::world::generation::TerrainGenerator;
use crate::world::BlockId;
use rand::Rng;

/// Fixed-size tile grid, row-major.
///
/// All access is bounds-checked: reads outside the grid return air and
/// writes outside the grid are ignored.
#[derive(Debug, Clone)]
pub struct World {
    width: usize,
    height: usize,
    tiles: Vec<BlockId>,
}

impl World {
    /// Create a world filled with air
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![BlockId::AIR; width * height],
        }
    }

    /// Create a world and procedurally fill it
    pub fn generate_with<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut world = Self::new(width, height);
        world.generate(rng);
        world
    }

    /// Regenerate every tile in place
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles = TerrainGenerator::new(self.width, self.height).generate(rng);
        log::info!(
            "Generated {}x{} world: {} trees, {} stone, {} ore",
            self.width,
            self.height,
            self.count(BlockId::TREE),
            self.count(BlockId::STONE),
            self.count(BlockId::ORE),
        );
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> BlockId {
        self.index(x, y).map_or(BlockId::AIR, |i| self.tiles[i])
    }

    pub fn set(&mut self, x: i32, y: i32, block: BlockId) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = block;
        }
    }

    /// Row-major view of every tile
    pub fn tiles(&self) -> &[BlockId] {
        &self.tiles
    }

    pub fn count(&self, block: BlockId) -> usize {
        self.tiles.iter().filter(|&&b| b == block).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}
