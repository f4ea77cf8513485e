//! Glyph metrics manifest and tile sheet header.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::geometry::TileGeometry;

/// PNG `tEXt` keyword under which the tile sheet header is stored.
pub const TILE_SHEET_HEADER_KEYWORD: &str = "glyphtile";

/// Current tile sheet header version.
pub const TILE_SHEET_HEADER_VERSION: u32 = 1;

/// Metrics for one rasterized glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphMetadata {
    /// Character as a string (e.g., "A").
    pub character: String,

    /// Unicode scalar value (e.g., 65 for 'A').
    pub char_code: u32,

    /// Image filename relative to the output directory.
    pub file: String,

    /// Bounding box [left, top, right, bottom] in font-rendering coordinates.
    pub bbox: [i32; 4],

    /// Rendered size [width, height].
    pub size: [i32; 2],

    /// Placement [x, y] of the glyph box within the canvas.
    pub position: [i32; 2],
}

/// Manifest written next to the rasterized glyph images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphSetMetadata {
    /// Font em size in pixels.
    pub font_size: f32,

    /// Canvas size [width, height].
    pub canvas_size: [u32; 2],

    /// Characters that were rasterized, in order.
    pub charset: String,

    /// Measured width of the space character, if it was in the set.
    pub space_width: Option<i32>,

    /// One entry per image.
    pub glyphs: Vec<GlyphMetadata>,
}

/// Geometry and image count embedded in a tile sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSheetHeader {
    /// Header format version.
    pub version: u32,

    /// Geometry the sheet was packed with.
    pub geometry: TileGeometry,

    /// Number of images packed, padding cells excluded.
    pub count: u32,
}

impl TileSheetHeader {
    /// Creates a header for the current version.
    pub fn new(geometry: TileGeometry, count: u32) -> Self {
        Self {
            version: TILE_SHEET_HEADER_VERSION,
            geometry,
            count,
        }
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and version-checks a header.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let header: Self = serde_json::from_str(json)?;
        if header.version != TILE_SHEET_HEADER_VERSION {
            return Err(SpecError::UnsupportedHeaderVersion(header.version));
        }
        header.geometry.validate()?;
        Ok(header)
    }
}
