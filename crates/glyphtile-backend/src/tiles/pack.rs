use std::path::PathBuf;

use glyphtile_spec::{SpecError, TileGeometry, TileSheetHeader, TILE_SHEET_HEADER_KEYWORD};

use super::TileError;
use crate::buffer::{RgbBuffer, ToRgbBuffer};
use crate::output::OutputDir;
use crate::png::{write_rgb_to_vec_with_hash, PngConfig, TextChunk};

/// A tile sheet written to disk.
#[derive(Debug, Clone)]
pub struct SavedTileSheet {
    /// Path of the PNG.
    pub path: PathBuf,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    /// Header embedded in the PNG.
    pub header: TileSheetHeader,
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
}

/// Arrange `images` into a row-major grid.
///
/// The sheet is `columns * cell_width` wide and `ceil(n / columns)` rows
/// tall. Images that are not exactly cell-sized are centered on a black
/// cell without scaling; unused trailing cells stay black.
pub fn pack_tiles<T: ToRgbBuffer>(
    images: &[T],
    geometry: &TileGeometry,
) -> Result<RgbBuffer, TileError> {
    geometry.validate()?;

    let (width, height) = geometry.sheet_size(images.len())?;
    let mut sheet = RgbBuffer::new_black(width, height);

    for (i, image) in images.iter().enumerate() {
        let tile = fit_to_cell(image.to_rgb_buffer(), geometry);
        let (x, y) = geometry.cell_origin(i)?;
        sheet.paste(&tile, x as i64, y as i64);
    }

    log::debug!(
        "packed {} images into {}x{} sheet ({} rows)",
        images.len(),
        width,
        height,
        geometry.rows_for(images.len())
    );
    Ok(sheet)
}

fn fit_to_cell(image: RgbBuffer, geometry: &TileGeometry) -> RgbBuffer {
    if geometry.fits_exactly(image.width, image.height) {
        return image;
    }
    if image.width > geometry.cell_width || image.height > geometry.cell_height {
        log::warn!(
            "{}x{} image is larger than the {}x{} cell and will be clipped",
            image.width,
            image.height,
            geometry.cell_width,
            geometry.cell_height
        );
    }
    let mut cell = RgbBuffer::new_black(geometry.cell_width, geometry.cell_height);
    let (x, y) = geometry.centering_offset(image.width, image.height);
    cell.paste(&image, x, y);
    cell
}

/// Pack `images` and write the sheet to `{name}.png` inside `out`.
///
/// The geometry and image count are embedded as a JSON `tEXt` chunk.
pub fn save_tile_sheet<T: ToRgbBuffer>(
    images: &[T],
    name: &str,
    out: &OutputDir,
    geometry: &TileGeometry,
    config: &PngConfig,
) -> Result<SavedTileSheet, TileError> {
    if images.is_empty() {
        return Err(TileError::EmptyBatch);
    }

    let sheet = pack_tiles(images, geometry)?;
    let count = u32::try_from(images.len())
        .map_err(|_| SpecError::invalid("count", "too many images for one tile sheet"))?;
    let header = TileSheetHeader::new(*geometry, count);
    let text = [TextChunk::new(TILE_SHEET_HEADER_KEYWORD, header.to_json()?)];

    let (data, hash) = write_rgb_to_vec_with_hash(&sheet, &text, config)?;
    let path = out.join(format!("{}.png", name));
    std::fs::write(&path, &data)?;

    Ok(SavedTileSheet {
        path,
        hash,
        header,
        width: sheet.width,
        height: sheet.height,
    })
}
