//! Font access for the rasterizer.
//!
//! The rasterizer only needs two things from a font: the bounding box of a
//! character and its coverage mask at a given pen position. [`GlyphSource`]
//! captures exactly that; [`OutlineFont`] implements it for TrueType and
//! OpenType fonts via `ab_glyph`.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use thiserror::Error;

/// Errors from loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("IO error reading font: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid font data: {0}")]
    Invalid(#[from] ab_glyph::InvalidFont),

    #[error("Font does not declare units per em")]
    MissingUnitsPerEm,

    #[error("Font size must be a positive number, got {0}")]
    InvalidSize(f32),
}

/// Bounding box in font-rendering coordinates.
///
/// The origin is the pen position: left edge at x = 0, ascender line at
/// y = 0, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn as_array(&self) -> [i32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

/// A scaled font the rasterizer can measure and draw with.
pub trait GlyphSource {
    /// Bounding box of `c` with the pen at the origin.
    fn measure(&self, c: char) -> GlyphBox;

    /// Draws `c` with the pen at `(x, y)`.
    ///
    /// `plot` receives absolute pixel coordinates (possibly negative) and a
    /// coverage value in [0, 1].
    fn draw(&self, c: char, x: i32, y: i32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// An outline font scaled to a fixed em size.
pub struct OutlineFont {
    font: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl OutlineFont {
    /// Loads a font from raw TTF/OTF bytes at the given em size in pixels.
    pub fn from_bytes(data: Vec<u8>, font_size: f32) -> Result<Self, FontError> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(FontError::InvalidSize(font_size));
        }
        let font = FontVec::try_from_vec(data)?;
        let units_per_em = font.units_per_em().ok_or(FontError::MissingUnitsPerEm)?;
        // PxScale is in terms of ascent - descent, not the em square.
        let scale = PxScale::from(font_size * font.height_unscaled() / units_per_em);
        Ok(Self { font, scale })
    }

    /// Loads a font file at the given em size in pixels.
    pub fn from_path(path: &Path, font_size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path)?;
        log::debug!("loaded font {} ({} bytes)", path.display(), data.len());
        Self::from_bytes(data, font_size)
    }

    /// The `ab_glyph` scale in use.
    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// Distance from the ascender line to the baseline, in pixels.
    pub fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    fn glyph_at(&self, c: char, x: f32, y: f32) -> Glyph {
        // Pen y is the ascender line; ab_glyph positions on the baseline.
        self.font
            .glyph_id(c)
            .with_scale_and_position(self.scale, point(x, y + self.ascent()))
    }
}

impl GlyphSource for OutlineFont {
    fn measure(&self, c: char) -> GlyphBox {
        let glyph = self.glyph_at(c, 0.0, 0.0);
        let id = glyph.id;
        match self.font.outline_glyph(glyph) {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                GlyphBox::new(
                    bounds.min.x as i32,
                    bounds.min.y as i32,
                    bounds.max.x as i32,
                    bounds.max.y as i32,
                )
            }
            None => {
                let advance = self.font.as_scaled(self.scale).h_advance(id);
                GlyphBox::new(0, 0, advance.round() as i32, 0)
            }
        }
    }

    fn draw(&self, c: char, x: i32, y: i32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let glyph = self.glyph_at(c, x as f32, y as f32);
        if let Some(outlined) = self.font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                plot(ox + gx as i32, oy + gy as i32, coverage.clamp(0.0, 1.0));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noto(size: f32) -> OutlineFont {
        OutlineFont::from_bytes(notosans::REGULAR_TTF.to_vec(), size).unwrap()
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        let result = OutlineFont::from_bytes(vec![0u8; 16], 32.0);
        assert!(matches!(result, Err(FontError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_size() {
        let result = OutlineFont::from_bytes(notosans::REGULAR_TTF.to_vec(), 0.0);
        assert!(matches!(result, Err(FontError::InvalidSize(_))));
    }

    #[test]
    fn test_measure_ink_glyph() {
        let font = noto(64.0);
        let b = font.measure('H');
        assert!(b.width() > 0);
        assert!(b.height() > 0);
        assert!(b.top >= 0, "cap height sits below the ascender line");
        assert!(b.bottom as f32 <= font.ascent().ceil() + 1.0);
    }

    #[test]
    fn test_measure_space_uses_advance() {
        let font = noto(64.0);
        let b = font.measure(' ');
        assert_eq!(b.left, 0);
        assert!(b.width() > 0);
        assert_eq!(b.height(), 0);
    }

    #[test]
    fn test_draw_follows_pen() {
        let font = noto(64.0);
        let mut xs = Vec::new();
        font.draw('l', 100, 0, &mut |x, _, c| {
            if c > 0.5 {
                xs.push(x);
            }
        });
        assert!(!xs.is_empty());
        assert!(xs.iter().all(|&x| x >= 100));
    }
}
