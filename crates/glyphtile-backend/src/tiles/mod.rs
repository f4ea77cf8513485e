//! Tile sheets: packing images into a row-major grid and slicing them back.
//!
//! Every sheet written by [`save_tile_sheet`] carries a [`TileSheetHeader`]
//! in a `tEXt` chunk. When reading, the header's image count is
//! authoritative; sheets without one fall back to treating the first
//! all-black cell as the end of the data.
//!
//! [`TileSheetHeader`]: glyphtile_spec::TileSheetHeader

mod pack;
mod unpack;

pub use pack::{pack_tiles, save_tile_sheet, SavedTileSheet};
pub use unpack::{
    read_tile_sheet, read_tile_sheet_auto, slice_tiles, unpack_tiles, UnpackOptions, UnpackResult,
};

use glyphtile_spec::{SpecError, TileGeometry};
use thiserror::Error;

use crate::png::PngError;

/// Errors that can occur while packing or unpacking a tile sheet.
#[derive(Debug, Error)]
pub enum TileError {
    /// Nothing to pack.
    #[error("Cannot write a tile sheet with no images")]
    EmptyBatch,

    /// The caller's geometry disagrees with the one stored in the sheet.
    #[error("Sheet was packed with {stored:?}, but {requested:?} was requested")]
    GeometryMismatch {
        stored: TileGeometry,
        requested: TileGeometry,
    },

    /// The header claims more images than the sheet can hold.
    #[error("Header declares {count} images but the sheet only has {capacity} cells")]
    CountExceedsCapacity { count: usize, capacity: usize },

    /// Geometry or header is invalid.
    #[error("Invalid tile sheet metadata: {0}")]
    Spec(#[from] SpecError),

    /// PNG encoding or decoding error.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
