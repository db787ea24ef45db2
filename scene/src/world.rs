//! The voxel world: a fixed grid of optional block transforms plus the sky,
//! the floor and the camera that looks at them.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::render::{Renderer, TextureSelect};
use crate::shapes::Cube;
use crate::{Colour, Settings, Transform};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BlockPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl BlockPos {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        BlockPos { x, y, z }
    }
}

/// Grid extent: `width` along x, `depth` along z, `height` along y.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GridDims {
    pub width: usize,
    pub depth: usize,
    pub height: usize,
}

impl GridDims {
    pub const MAX_CELLS: usize = 1 << 20;

    /// Total cells, or `None` if that overflows or exceeds `MAX_CELLS`.
    pub fn cell_count(&self) -> Option<usize> {
        self.width
            .checked_mul(self.depth)
            .and_then(|n| n.checked_mul(self.height))
            .filter(|&n| n <= Self::MAX_CELLS)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        GridDims {
            width: 32,
            depth: 32,
            height: 4,
        }
    }
}

#[derive(Debug)]
pub enum WorldError {
    Decode(bincode::Error),
    Encoding(base64::DecodeError),
    Dimensions { expected: GridDims, found: GridDims },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::Decode(e) => write!(f, "Failed to decode world: {e}"),
            WorldError::Encoding(e) => write!(f, "Failed to decode base64: {e}"),
            WorldError::Dimensions { expected, found } => write!(
                f,
                "World is {}x{}x{}, expected {}x{}x{}.",
                found.width, found.depth, found.height, expected.width, expected.depth, expected.height
            ),
        }
    }
}

impl std::error::Error for WorldError {}

impl From<bincode::Error> for WorldError {
    fn from(e: bincode::Error) -> Self {
        WorldError::Decode(e)
    }
}

impl From<base64::DecodeError> for WorldError {
    fn from(e: base64::DecodeError) -> Self {
        WorldError::Encoding(e)
    }
}

#[derive(Deserialize, Serialize)]
struct SavedWorld {
    dims: GridDims,
    blocks: Vec<BlockPos>,
}

/// A fixed grid of cells, each either empty or holding the transform its
/// block is drawn with.
#[derive(Clone, Debug)]
pub struct Map {
    dims: GridDims,
    block_size: f32,
    cells: Vec<Option<Transform>>,
}

impl Map {
    // Blocks sit one cell below the grid's y index, so layer 0 is sunk into
    // the floor.
    const FLOOR_OFFSET: f32 = 1.0;

    /// A grid too large to allocate is replaced by the default one.
    pub fn new(dims: GridDims, block_size: f32) -> Self {
        let (dims, count) = match dims.cell_count() {
            Some(count) => (dims, count),
            None => {
                log::warn!("Grid {dims:?} is too large, using the default grid.");
                let dims = GridDims::default();
                (dims, dims.width * dims.depth * dims.height)
            }
        };

        Map {
            dims,
            block_size,
            cells: vec![None; count],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// The cell that sits at the world origin.
    pub fn centre(&self) -> BlockPos {
        BlockPos::new(self.dims.width / 2, 0, self.dims.depth / 2)
    }

    fn index(&self, pos: BlockPos) -> Option<usize> {
        if pos.x < self.dims.width && pos.z < self.dims.depth && pos.y < self.dims.height {
            Some((pos.x * self.dims.depth + pos.z) * self.dims.height + pos.y)
        } else {
            None
        }
    }

    fn position(&self, index: usize) -> BlockPos {
        let y = index % self.dims.height;
        let z = (index / self.dims.height) % self.dims.depth;
        let x = index / (self.dims.height * self.dims.depth);
        BlockPos::new(x, y, z)
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.index(pos).is_some()
    }

    pub fn get(&self, pos: BlockPos) -> Option<Transform> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Transform for a block in cell `pos`: a cube of the block size,
    /// positioned so the grid is centred on the origin.
    pub fn block_transform(&self, pos: BlockPos) -> Transform {
        let centre = self.centre();
        let s = self.block_size;
        Transform::identity().scaled(s, s, s).translated(
            pos.x as f32 - centre.x as f32,
            pos.y as f32 - Self::FLOOR_OFFSET,
            pos.z as f32 - centre.z as f32,
        )
    }

    /// Returns false if `pos` lies outside the grid.
    pub fn place(&mut self, pos: BlockPos) -> bool {
        let transform = self.block_transform(pos);
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = Some(transform);
                true
            }
            None => false,
        }
    }

    /// Returns false if `pos` lies outside the grid.
    pub fn remove(&mut self, pos: BlockPos) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = None;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (BlockPos, Transform)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|t| (self.position(i), t)))
    }

    /// Fill the outermost ring of cells, `height` layers high.
    pub fn build_perimeter_wall(&mut self, height: usize) {
        let GridDims { width, depth, .. } = self.dims;
        for x in 0..width {
            for z in 0..depth {
                if x == 0 || z == 0 || x + 1 == width || z + 1 == depth {
                    for y in 0..height.min(self.dims.height) {
                        self.place(BlockPos::new(x, y, z));
                    }
                }
            }
        }
    }

    /// The cell `reach` world units in front of the camera, rounded to the
    /// nearest cell and clamped into the grid. This is a single fixed step,
    /// not a ray march, so it may name an empty or occluded cell.
    pub fn nearest_to(&self, camera: &Camera, reach: f32) -> BlockPos {
        let target = camera.eye + camera.direction() * reach;
        let centre = self.centre();

        let cell = |coord: f32, centre: usize, len: usize| -> usize {
            let i = (coord / self.block_size).round() as i64 + centre as i64;
            i.clamp(0, len.saturating_sub(1) as i64) as usize
        };

        BlockPos::new(
            cell(target.x, centre.x, self.dims.width),
            cell(target.y, centre.y, self.dims.height),
            cell(target.z, centre.z, self.dims.depth),
        )
    }
}

pub struct World {
    pub camera: Camera,
    pub map: Map,
    reach: f32,
    sky: Cube,
    floor: Cube,
    block: Cube,
}

impl World {
    const SKY: Colour = Colour::rgb(0.4, 0.4, 1.0);
    const FLOOR: Colour = Colour::rgb(1.0, 0.0, 0.0);
    const BLOCK: Colour = Colour::rgb(0.55, 0.4, 0.25);
    const SKY_SIZE: f32 = 50.0;
    const FLOOR_SIZE: f32 = 40.0;

    pub fn new(settings: &Settings) -> Self {
        let mut map = Map::new(settings.grid, settings.block_size);
        map.build_perimeter_wall(settings.wall_height);

        let mut camera = Camera::default();
        camera.fov = settings.fov;

        // Inside-out so the faces point at a camera within it.
        let sky = Cube::with_transform(
            Self::SKY,
            Transform::identity()
                .scaled(Self::SKY_SIZE, Self::SKY_SIZE, Self::SKY_SIZE)
                .scaled(-1.0, -1.0, -1.0)
                .translated(-0.5, -0.5, -0.5),
        );

        let floor = Cube::with_transform(
            Self::FLOOR,
            Transform::identity()
                .translated(0.0, -0.5, 0.0)
                .scaled(Self::FLOOR_SIZE, 0.0, Self::FLOOR_SIZE)
                .translated(-0.5, 0.0, -0.5),
        )
        .textured(TextureSelect::Unit(0));

        World {
            camera,
            map,
            reach: settings.reach,
            sky,
            floor,
            block: Cube::new(Self::BLOCK),
        }
    }

    pub fn nearest_block_position(&self) -> BlockPos {
        let pos = self.map.nearest_to(&self.camera, self.reach);
        log::debug!("Targeting block {pos:?}.");
        pos
    }

    pub fn nearest_block(&self) -> Option<Transform> {
        self.map.get(self.nearest_block_position())
    }

    pub fn place_block(&mut self, pos: BlockPos) -> bool {
        self.map.place(pos)
    }

    pub fn remove_block(&mut self, pos: BlockPos) -> bool {
        self.map.remove(pos)
    }

    pub fn place_at_target(&mut self) -> bool {
        self.place_block(self.nearest_block_position())
    }

    pub fn remove_at_target(&mut self) -> bool {
        self.remove_block(self.nearest_block_position())
    }

    /// Draw the map's blocks, then the sky and the floor.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        for (_, transform) in self.map.blocks() {
            self.block.transform = transform;
            self.block.render(renderer);
        }
        self.sky.render(renderer);
        self.floor.render(renderer);
    }

    pub fn export(&self) -> Result<Vec<u8>, WorldError> {
        let saved = SavedWorld {
            dims: self.map.dims(),
            blocks: self.map.blocks().map(|(pos, _)| pos).collect(),
        };
        Ok(bincode::serialize(&saved)?)
    }

    /// Replace the map's blocks with those in `bytes`. The map is left
    /// untouched if decoding fails or the dimensions differ.
    pub fn import(&mut self, bytes: &[u8]) -> Result<usize, WorldError> {
        let saved: SavedWorld = bincode::deserialize(bytes)?;
        let expected = self.map.dims();
        if saved.dims != expected {
            return Err(WorldError::Dimensions {
                expected,
                found: saved.dims,
            });
        }

        self.map.clear();
        for pos in &saved.blocks {
            self.map.place(*pos);
        }
        Ok(self.map.count())
    }

    pub fn export_base64(&self) -> Result<String, WorldError> {
        Ok(base64::encode(self.export()?))
    }

    pub fn import_base64(&mut self, encoded: &str) -> Result<usize, WorldError> {
        let bytes = base64::decode(encoded)?;
        self.import(&bytes)
    }
}
