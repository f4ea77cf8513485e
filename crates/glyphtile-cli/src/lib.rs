//! GlyphTile CLI library.
//!
//! Command implementations for the `glyphtile` binary: rasterizing a
//! character set, packing images into a tile sheet, and unpacking a sheet.

pub mod commands;
pub mod input;
