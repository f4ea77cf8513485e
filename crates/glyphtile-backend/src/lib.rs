//! GlyphTile Backend
//!
//! Renders characters into fixed-size grayscale glyph images, packs batches
//! of images into a tiled sheet, and slices such sheets back into cells.
//!
//! # Features
//!
//! - **Glyph rasterization**: any TrueType/OpenType font via `ab_glyph`,
//!   glyphs centered horizontally at the top of the canvas
//! - **Tile packing**: row-major grid, off-size images centered on black
//! - **Tile unpacking**: header-driven count, or the black-cell sentinel
//!   for sheets without a header
//! - **Deterministic PNG**: fixed compression settings, BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use glyphtile_backend::{rasterize_font_file, save_tile_sheet, unpack_tiles, OutputDir, PngConfig};
//! use glyphtile_spec::{RasterParams, TileGeometry};
//! use std::path::Path;
//!
//! let params = RasterParams::default();
//! let result = rasterize_font_file(Path::new("Roboto-Regular.ttf"), &params).unwrap();
//!
//! let geometry = TileGeometry::default();
//! let out = OutputDir::create(".").unwrap();
//! let saved = save_tile_sheet(&result.images(), "glyphs", &out, &geometry, &PngConfig::default()).unwrap();
//!
//! let cells = unpack_tiles(&saved.path, &geometry).unwrap();
//! assert_eq!(cells.len(), result.glyphs.len());
//! ```

pub mod buffer;
pub mod font;
pub mod output;
pub mod png;
pub mod raster;
pub mod tiles;

// Re-export main types for convenience
pub use buffer::{GrayscaleBuffer, Rgb, RgbBuffer, ToRgbBuffer};
pub use font::{FontError, GlyphBox, GlyphSource, OutlineFont};
pub use output::{glyph_filename, OutputDir};
pub use self::png::{PngConfig, PngError};
pub use raster::{
    rasterize_charset, rasterize_font_file, save_glyph_images, GlyphRecord, RasterError,
    RasterResult,
};
pub use tiles::{
    pack_tiles, read_tile_sheet, read_tile_sheet_auto, save_tile_sheet, slice_tiles,
    unpack_tiles, SavedTileSheet, TileError, UnpackOptions, UnpackResult,
};
