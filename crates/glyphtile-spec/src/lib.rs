//! GlyphTile parameter and metadata types.
//!
//! This crate holds the plain data shared by the rasterizer, the tile packer
//! and the tile unpacker: raster parameters, the tile geometry value object,
//! the glyph metrics manifest, and the header embedded in tile sheets.
//!
//! # Example
//!
//! ```
//! use glyphtile_spec::{RasterParams, TileGeometry};
//!
//! let params = RasterParams::default().with_font_size(96.0);
//! assert!(params.validate().is_ok());
//!
//! let geometry = TileGeometry::default();
//! assert_eq!(geometry.cell_position(23), (2, 3));
//! assert_eq!(geometry.rows_for(95), 10);
//! ```
//!
//! # Modules
//!
//! - [`charset`]: Default character set and the blank/space rules
//! - [`error`]: Error type for parameter validation
//! - [`geometry`]: Cell size and column count shared by packer and unpacker
//! - [`metadata`]: Glyph metrics manifest and tile sheet header
//! - [`params`]: Raster parameters loaded from JSON or built in code

pub mod charset;
pub mod error;
pub mod geometry;
pub mod metadata;
pub mod params;

pub use charset::{Charset, CharClass, DEFAULT_CHARSET};
pub use error::SpecError;
pub use geometry::TileGeometry;
pub use metadata::{GlyphMetadata, GlyphSetMetadata, TileSheetHeader, TILE_SHEET_HEADER_KEYWORD};
pub use params::RasterParams;
