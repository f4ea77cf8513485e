//! Tile grid geometry shared by the packer and the unpacker.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default cell width and height in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 224;

/// Default number of columns per row.
pub const DEFAULT_COLUMNS: u32 = 10;

/// Cell size and column count of a tile sheet.
///
/// A sheet must be unpacked with the same geometry it was packed with,
/// otherwise cells are sliced misaligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileGeometry {
    /// Cell width in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_width: u32,
    /// Cell height in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_height: u32,
    /// Number of columns per row.
    #[serde(default = "default_columns")]
    pub columns: u32,
}

fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl TileGeometry {
    /// Creates a geometry with the given cell size and column count.
    pub fn new(cell_width: u32, cell_height: u32, columns: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            columns,
        }
    }

    /// Sets the cell size.
    pub fn with_cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Sets the column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Checks that every dimension is non-zero and that a row of cells fits
    /// in a `u32` pixel width.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(SpecError::invalid(
                "cell_size",
                format!(
                    "cell size must be non-zero, got {}x{}",
                    self.cell_width, self.cell_height
                ),
            ));
        }
        if self.columns == 0 {
            return Err(SpecError::invalid("columns", "must be at least 1"));
        }
        self.sheet_width()?;
        Ok(())
    }

    /// Composite width in pixels, `columns * cell_width`.
    pub fn sheet_width(&self) -> Result<u32, SpecError> {
        self.columns.checked_mul(self.cell_width).ok_or_else(|| {
            SpecError::invalid(
                "columns",
                format!(
                    "{} columns of {}px cells overflow the sheet width",
                    self.columns, self.cell_width
                ),
            )
        })
    }

    /// Number of rows needed to hold `count` images.
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns as usize)
    }

    /// Grid `(row, col)` of image `index`, row-major.
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        let columns = self.columns as usize;
        (index / columns, index % columns)
    }

    /// Pixel offset `(x, y)` of the top-left corner of image `index`.
    pub fn cell_origin(&self, index: usize) -> Result<(u32, u32), SpecError> {
        let (row, col) = self.cell_position(index);
        let x = u32::try_from(col)
            .ok()
            .and_then(|col| col.checked_mul(self.cell_width));
        let y = u32::try_from(row)
            .ok()
            .and_then(|row| row.checked_mul(self.cell_height));
        match (x, y) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(SpecError::invalid(
                "index",
                format!("cell {} lies outside the u32 pixel range", index),
            )),
        }
    }

    /// Composite `(width, height)` for `count` images.
    pub fn sheet_size(&self, count: usize) -> Result<(u32, u32), SpecError> {
        let width = self.sheet_width()?;
        let height = u32::try_from(self.rows_for(count))
            .ok()
            .and_then(|rows| rows.checked_mul(self.cell_height))
            .ok_or_else(|| {
                SpecError::invalid(
                    "count",
                    format!(
                        "{} images in {}px rows overflow the sheet height",
                        count, self.cell_height
                    ),
                )
            })?;
        Ok((width, height))
    }

    /// Number of complete rows in a composite of the given height.
    pub fn rows_in(&self, sheet_height: u32) -> u32 {
        sheet_height / self.cell_height
    }

    /// Offset that centers a `width x height` image in a cell.
    ///
    /// Uses floor division, so images larger than the cell get a negative
    /// offset and are clipped on both sides.
    pub fn centering_offset(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (self.cell_width as i64 - width as i64).div_euclid(2),
            (self.cell_height as i64 - height as i64).div_euclid(2),
        )
    }

    /// Returns true if an image of this size fills a cell exactly.
    pub fn fits_exactly(&self, width: u32, height: u32) -> bool {
        width == self.cell_width && height == self.cell_height
    }
}
