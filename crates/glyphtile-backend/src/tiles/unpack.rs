use std::path::Path;

use glyphtile_spec::{SpecError, TileGeometry, TileSheetHeader, TILE_SHEET_HEADER_KEYWORD};

use super::TileError;
use crate::buffer::RgbBuffer;
use crate::png::{read_rgb, DecodedPng};

/// Options for reading a tile sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Ignore any embedded header and stop at the first all-black cell.
    pub ignore_header: bool,
}

/// Cells read from a tile sheet.
#[derive(Debug, Clone)]
pub struct UnpackResult {
    /// Cell images in row-major order, normalized to [0, 1].
    pub cells: Vec<RgbBuffer>,
    /// Header found in the sheet, if it was used.
    pub header: Option<TileSheetHeader>,
    /// Geometry the sheet was sliced with.
    pub geometry: TileGeometry,
}

/// Slice `sheet` into cells.
///
/// Only complete rows are visited. With `count` set, exactly that many cells
/// are returned. Without it, iteration stops at the first all-black cell,
/// so a genuinely black image is indistinguishable from padding.
pub fn slice_tiles(
    sheet: &RgbBuffer,
    geometry: &TileGeometry,
    count: Option<usize>,
) -> Result<Vec<RgbBuffer>, TileError> {
    geometry.validate()?;

    let rows = geometry.rows_in(sheet.height);
    let capacity = (rows as usize)
        .checked_mul(geometry.columns as usize)
        .ok_or_else(|| SpecError::invalid("columns", "sheet cell count overflows"))?;
    if let Some(count) = count {
        if count > capacity {
            return Err(TileError::CountExceedsCapacity { count, capacity });
        }
    }

    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..geometry.columns {
            if count.is_some_and(|n| cells.len() >= n) {
                return Ok(cells);
            }

            let cell = sheet.crop(
                col * geometry.cell_width,
                row * geometry.cell_height,
                geometry.cell_width,
                geometry.cell_height,
            );

            if count.is_none() && cell.is_all_black() {
                log::debug!("all-black cell at row {}, col {}: end of data", row, col);
                return Ok(cells);
            }
            cells.push(cell);
        }
    }
    Ok(cells)
}

pub(crate) fn unpack_decoded(
    decoded: &DecodedPng,
    geometry: Option<&TileGeometry>,
    options: UnpackOptions,
) -> Result<UnpackResult, TileError> {
    let header = match decoded.text(TILE_SHEET_HEADER_KEYWORD) {
        Some(json) if !options.ignore_header => Some(TileSheetHeader::from_json(json)?),
        _ => None,
    };

    let geometry = match (geometry, &header) {
        (Some(requested), Some(header)) if header.geometry != *requested => {
            return Err(TileError::GeometryMismatch {
                stored: header.geometry,
                requested: *requested,
            });
        }
        (Some(requested), _) => *requested,
        (None, Some(header)) => header.geometry,
        (None, None) => {
            log::debug!("no header and no geometry given, using the default grid");
            TileGeometry::default()
        }
    };

    let count = header.map(|h| h.count as usize);
    let cells = slice_tiles(&decoded.image, &geometry, count)?;
    log::debug!(
        "unpacked {} cells ({})",
        cells.len(),
        if header.is_some() { "header count" } else { "black-cell sentinel" }
    );
    Ok(UnpackResult {
        cells,
        header,
        geometry,
    })
}

/// Read a tile sheet from disk with explicit options.
///
/// The caller's geometry must match the sheet's header, when there is one.
pub fn read_tile_sheet(
    path: &Path,
    geometry: &TileGeometry,
    options: UnpackOptions,
) -> Result<UnpackResult, TileError> {
    let decoded = read_rgb(path)?;
    unpack_decoded(&decoded, Some(geometry), options)
}

/// Read a tile sheet from disk, slicing with the geometry in its header.
///
/// Sheets without a usable header are sliced with the default geometry.
pub fn read_tile_sheet_auto(
    path: &Path,
    options: UnpackOptions,
) -> Result<UnpackResult, TileError> {
    let decoded = read_rgb(path)?;
    unpack_decoded(&decoded, None, options)
}

/// Read a tile sheet from disk and return its cells.
pub fn unpack_tiles(path: &Path, geometry: &TileGeometry) -> Result<Vec<RgbBuffer>, TileError> {
    Ok(read_tile_sheet(path, geometry, UnpackOptions::default())?.cells)
}
