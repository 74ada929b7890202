mod bitmap;
mod tilemap_json;

use std::path::PathBuf;

use thiserror::Error;

use crate::tilemap::TilemapError;

pub use bitmap::{load_image, Image};
pub use tilemap_json::{load_tilemap, load_tileset};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open image {path}: {source}")]
    OpenImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} at {json_path}: {source}")]
    ParseJson {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tileset {path}: {reason}")]
    InvalidTileset { path: PathBuf, reason: String },
    #[error("invalid tilemap {path}: {source}")]
    Tilemap {
        path: PathBuf,
        #[source]
        source: TilemapError,
    },
}
