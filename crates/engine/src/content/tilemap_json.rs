use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::tilemap::{TileLayer, Tilemap, Tileset};

use super::{load_image, AssetError};

const TILE_LAYER_TYPE: &str = "tilelayer";

/// Tiled map file. Only the fields the game reads are modelled.
#[derive(Debug, Clone, Deserialize)]
struct TilemapJson {
    layers: Vec<TileLayerJson>,
    #[serde(default)]
    tilesets: Vec<TilesetRefJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct TileLayerJson {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default = "default_layer_type")]
    layer_type: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    data: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct TilesetRefJson {
    firstgid: u32,
    source: String,
}

/// Tiled tileset file: an atlas (`image` + `columns`) or a collection of
/// per-tile images (`tiles`).
#[derive(Debug, Clone, Deserialize)]
struct TilesetJson {
    #[serde(default)]
    columns: u32,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    tiles: Vec<TileJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct TileJson {
    id: u32,
    image: String,
}

fn default_layer_type() -> String {
    TILE_LAYER_TYPE.to_string()
}

/// Loads a map file and every tileset it references, images included.
///
/// Tile layers pair with the map's tilesets by index; non-tile layers are
/// ignored.
pub fn load_tilemap(path: &Path) -> Result<Tilemap, AssetError> {
    let map_json: TilemapJson = read_json(path)?;
    let base_dir = parent_dir(path);

    let mut tilesets = Vec::with_capacity(map_json.tilesets.len());
    for tileset_ref in &map_json.tilesets {
        let tileset_path = base_dir.join(&tileset_ref.source);
        tilesets.push(load_tileset(&tileset_path, tileset_ref.firstgid)?);
    }

    let mut layers = Vec::new();
    for layer_json in map_json.layers {
        if layer_json.layer_type != TILE_LAYER_TYPE {
            debug!(
                layer = %layer_json.name,
                layer_type = %layer_json.layer_type,
                "tilemap_layer_skipped"
            );
            continue;
        }
        let layer = TileLayer::new(
            layer_json.name,
            layer_json.width,
            layer_json.height,
            layer_json.data,
        )
        .map_err(|source| AssetError::Tilemap {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            layer = layer.name(),
            occupied_cells = layer.occupied_cells().count(),
            "tilemap_layer_loaded"
        );
        layers.push(layer);
    }

    let tilemap = Tilemap::new(layers, tilesets).map_err(|source| AssetError::Tilemap {
        path: path.to_path_buf(),
        source,
    })?;
    let (width_px, height_px) = tilemap.pixel_size();
    info!(
        path = %path.display(),
        layer_count = tilemap.layer_count(),
        width_px,
        height_px,
        "tilemap_loaded"
    );
    Ok(tilemap)
}

pub fn load_tileset(path: &Path, first_gid: u32) -> Result<Tileset, AssetError> {
    let tileset_json: TilesetJson = read_json(path)?;
    let base_dir = parent_dir(path);

    if !tileset_json.tiles.is_empty() {
        let mut tiles = tileset_json.tiles;
        tiles.sort_by_key(|tile| tile.id);
        let mut images = Vec::with_capacity(tiles.len());
        for (expected_id, tile) in tiles.iter().enumerate() {
            if tile.id as usize != expected_id {
                return Err(AssetError::InvalidTileset {
                    path: path.to_path_buf(),
                    reason: format!(
                        "collection tile ids must be contiguous from 0; expected {expected_id}, got {}",
                        tile.id
                    ),
                });
            }
            images.push(load_image(&base_dir.join(&tile.image))?);
        }
        debug!(path = %path.display(), first_gid, tile_count = images.len(), "tileset_loaded");
        return Ok(Tileset::collection(first_gid, images));
    }

    let Some(image_rel) = tileset_json.image else {
        return Err(AssetError::InvalidTileset {
            path: path.to_path_buf(),
            reason: "expected either 'image' or 'tiles'".to_string(),
        });
    };
    if tileset_json.columns == 0 {
        return Err(AssetError::InvalidTileset {
            path: path.to_path_buf(),
            reason: "atlas tileset must declare a non-zero 'columns'".to_string(),
        });
    }
    let image = load_image(&base_dir.join(image_rel))?;
    debug!(
        path = %path.display(),
        first_gid,
        columns = tileset_json.columns,
        "tileset_loaded"
    );
    Ok(Tileset::uniform(first_gid, tileset_json.columns, image))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AssetError> {
    let raw = fs::read_to_string(path).map_err(|source| AssetError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
        let json_path = error.path().to_string();
        AssetError::ParseJson {
            path: path.to_path_buf(),
            json_path,
            source: error.into_inner(),
        }
    })
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
