mod tileset;

use thiserror::Error;

use crate::TILE_SIZE_PX;

pub use tileset::{TileSource, Tileset};

/// Tile id that marks an empty cell.
pub const EMPTY_TILE_ID: u32 = 0;

/// One grid of tile ids, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    name: String,
    width: u32,
    height: u32,
    tiles: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilemapError {
    #[error("tile count mismatch in layer '{layer}': expected {expected}, got {actual}")]
    TileCountMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },
    #[error("tilemap has no layers")]
    NoLayers,
    #[error("layer {index} ('{layer}') has no tileset; layers pair with tilesets by index")]
    MissingTileset { index: usize, layer: String },
}

impl TileLayer {
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        tiles: Vec<u32>,
    ) -> Result<Self, TilemapError> {
        let name = name.into();
        let expected = width as usize * height as usize;
        let actual = tiles.len();
        if expected != actual {
            return Err(TilemapError::TileCountMismatch {
                layer: name,
                expected,
                actual,
            });
        }
        Ok(Self {
            name,
            width,
            height,
            tiles,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Non-empty cells as `(index, id)` in storage order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.tiles
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, id)| *id != EMPTY_TILE_ID)
    }
}

/// Map-pixel position of the top-left corner of cell `index`.
pub fn tile_pixel_position(index: usize, layer_width: u32) -> (i32, i32) {
    if layer_width == 0 {
        return (0, 0);
    }
    let width = layer_width as usize;
    let x = (index % width) as i32 * TILE_SIZE_PX as i32;
    let y = (index / width) as i32 * TILE_SIZE_PX as i32;
    (x, y)
}

/// Layers in draw order, each paired with the tileset at the same index.
#[derive(Debug, Clone)]
pub struct Tilemap {
    layers: Vec<TileLayer>,
    tilesets: Vec<Tileset>,
}

impl Tilemap {
    /// Extra tilesets beyond the layer count are kept but never drawn.
    pub fn new(layers: Vec<TileLayer>, tilesets: Vec<Tileset>) -> Result<Self, TilemapError> {
        if layers.is_empty() {
            return Err(TilemapError::NoLayers);
        }
        if let Some((index, layer)) = layers.iter().enumerate().nth(tilesets.len()) {
            return Err(TilemapError::MissingTileset {
                index,
                layer: layer.name.clone(),
            });
        }
        Ok(Self { layers, tilesets })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> impl Iterator<Item = (&TileLayer, &Tileset)> + '_ {
        self.layers.iter().zip(self.tilesets.iter())
    }

    /// Map size in pixels, taken from the first layer.
    pub fn pixel_size(&self) -> (u32, u32) {
        let first = &self.layers[0];
        (first.width * TILE_SIZE_PX, first.height * TILE_SIZE_PX)
    }
}
