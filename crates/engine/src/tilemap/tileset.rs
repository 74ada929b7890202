use crate::content::Image;
use crate::geometry::PixelRect;
use crate::TILE_SIZE_PX;

/// Source image and the region of it to draw for one tile id.
#[derive(Debug, Clone, Copy)]
pub struct TileSource<'a> {
    pub image: &'a Image,
    pub region: PixelRect,
}

#[derive(Debug, Clone)]
enum TilesetKind {
    /// One atlas cut into 16x16 cells, `columns` cells per row.
    Uniform { columns: u32, image: Image },
    /// One image per tile; images may be larger than a tile.
    Collection { tiles: Vec<Image> },
}

/// Maps global tile ids, starting at `first_gid`, to image regions.
#[derive(Debug, Clone)]
pub struct Tileset {
    first_gid: u32,
    kind: TilesetKind,
}

/// Atlas region of the `local_id`-th cell in a grid `columns` cells wide, or
/// `None` when the cell lies beyond pixel coordinate range.
fn uniform_source_rect(local_id: u32, columns: u32) -> Option<PixelRect> {
    let columns = columns.max(1);
    let x = (local_id % columns).checked_mul(TILE_SIZE_PX)?;
    let y = (local_id / columns).checked_mul(TILE_SIZE_PX)?;
    let x = i32::try_from(x).ok()?;
    let y = i32::try_from(y).ok()?;
    Some(PixelRect::from_origin_size(x, y, TILE_SIZE_PX, TILE_SIZE_PX))
}

impl Tileset {
    pub fn uniform(first_gid: u32, columns: u32, image: Image) -> Self {
        Self {
            first_gid,
            kind: TilesetKind::Uniform { columns, image },
        }
    }

    pub fn collection(first_gid: u32, tiles: Vec<Image>) -> Self {
        Self {
            first_gid,
            kind: TilesetKind::Collection { tiles },
        }
    }

    /// True for per-tile image tilesets, whose art can be taller than a tile.
    pub fn has_tall_tiles(&self) -> bool {
        matches!(self.kind, TilesetKind::Collection { .. })
    }

    pub fn lookup(&self, id: u32) -> Option<TileSource<'_>> {
        let local_id = id.checked_sub(self.first_gid)?;
        match &self.kind {
            TilesetKind::Uniform { columns, image } => {
                if *columns == 0 {
                    return None;
                }
                let region = uniform_source_rect(local_id, *columns)?;
                let bounds = image.bounds();
                if region.max_x > bounds.max_x || region.max_y > bounds.max_y {
                    return None;
                }
                Some(TileSource { image, region })
            }
            TilesetKind::Collection { tiles } => {
                let image = tiles.get(local_id as usize)?;
                Some(TileSource {
                    image,
                    region: image.bounds(),
                })
            }
        }
    }

    /// Vertical draw adjustment for a tile of this set.
    ///
    /// Collection tiles are shifted up by their source height plus one tile;
    /// atlas tiles are drawn unshifted.
    pub fn vertical_draw_offset(&self, source: &TileSource<'_>) -> i32 {
        if self.has_tall_tiles() {
            -(source.region.height() as i32 + TILE_SIZE_PX as i32)
        } else {
            0
        }
    }
}
