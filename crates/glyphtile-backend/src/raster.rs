//! Glyph rasterization.
//!
//! Each character is drawn in black on a white canvas, horizontally centered
//! by its measured width and pinned to the top edge. Canvases are returned
//! normalized to [0, 1]; writing them to disk is a separate step.

use std::path::{Path, PathBuf};

use glyphtile_spec::{CharClass, GlyphMetadata, GlyphSetMetadata, RasterParams, SpecError};
use thiserror::Error;

use crate::buffer::GrayscaleBuffer;
use crate::font::{FontError, GlyphBox, GlyphSource, OutlineFont};
use crate::output::{glyph_filename, OutputDir};
use crate::png::{write_grayscale, PngConfig, PngError};

/// Name of the metrics manifest written by [`save_glyph_images`].
pub const GLYPH_MANIFEST_NAME: &str = "glyphs.json";

/// Errors that can occur during rasterization.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid raster params: {0}")]
    InvalidParams(#[from] SpecError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rasterized character.
#[derive(Debug, Clone)]
pub struct GlyphRecord {
    /// The character.
    pub character: char,
    /// Normalized canvas, white background.
    pub image: GrayscaleBuffer,
    /// Measured bounding box.
    pub bbox: GlyphBox,
    /// Pen position on the canvas; y is always 0.
    pub position: (i32, i32),
}

impl GlyphRecord {
    /// Rendered size `(width, height)` from the bounding box.
    pub fn size(&self) -> (i32, i32) {
        (self.bbox.width(), self.bbox.height())
    }

    fn to_metadata(&self) -> GlyphMetadata {
        let (w, h) = self.size();
        GlyphMetadata {
            character: self.character.to_string(),
            char_code: self.character as u32,
            file: glyph_filename(self.character),
            bbox: self.bbox.as_array(),
            size: [w, h],
            position: [self.position.0, self.position.1],
        }
    }
}

/// Result of rasterizing a character set.
#[derive(Debug, Clone)]
pub struct RasterResult {
    /// One record per rendered character, in charset order.
    pub glyphs: Vec<GlyphRecord>,
    /// The characters actually rendered, in order.
    pub charset: String,
    /// Width of the space character, if the charset contained it.
    pub space_width: Option<i32>,
    /// Params the result was produced with.
    pub params: RasterParams,
}

impl RasterResult {
    pub fn images(&self) -> Vec<&GrayscaleBuffer> {
        self.glyphs.iter().map(|g| &g.image).collect()
    }

    pub fn bboxes(&self) -> Vec<GlyphBox> {
        self.glyphs.iter().map(|g| g.bbox).collect()
    }

    pub fn sizes(&self) -> Vec<(i32, i32)> {
        self.glyphs.iter().map(GlyphRecord::size).collect()
    }

    pub fn positions(&self) -> Vec<(i32, i32)> {
        self.glyphs.iter().map(|g| g.position).collect()
    }

    /// Metrics manifest for this result.
    pub fn to_metadata(&self) -> GlyphSetMetadata {
        GlyphSetMetadata {
            font_size: self.params.font_size,
            canvas_size: self.params.canvas_size,
            charset: self.charset.clone(),
            space_width: self.space_width,
            glyphs: self.glyphs.iter().map(GlyphRecord::to_metadata).collect(),
        }
    }
}

/// Rasterize `params.charset` with a font already scaled to `params.font_size`.
pub fn rasterize_charset<F: GlyphSource + ?Sized>(
    font: &F,
    params: &RasterParams,
) -> Result<RasterResult, RasterError> {
    params.validate()?;

    let canvas_width = params.canvas_width();
    let canvas_height = params.canvas_height();

    let mut glyphs = Vec::new();
    let mut charset = String::new();
    let mut space_width = None;

    for c in params.charset.chars() {
        match CharClass::of(c) {
            CharClass::Blank => continue,
            CharClass::Space => {
                let width = font.measure(c).width();
                log::debug!("space width: {}", width);
                space_width = Some(width);
                continue;
            }
            CharClass::Ink => {}
        }

        let bbox = font.measure(c);
        // Floor division; a glyph wider than the canvas gets a negative offset.
        let x = (canvas_width as i32 - bbox.width()).div_euclid(2);
        let position = (x, 0);
        if bbox.width() > canvas_width as i32 || bbox.bottom > canvas_height as i32 {
            log::warn!(
                "glyph {:?} ({}x{}) overflows the {}x{} canvas",
                c,
                bbox.width(),
                bbox.height(),
                canvas_width,
                canvas_height
            );
        }

        let image = render_glyph(font, c, position, canvas_width, canvas_height);
        log::debug!("rasterized {:?}: bbox {:?}, position {:?}", c, bbox, position);

        charset.push(c);
        glyphs.push(GlyphRecord {
            character: c,
            image,
            bbox,
            position,
        });
    }

    Ok(RasterResult {
        glyphs,
        charset,
        space_width,
        params: params.clone(),
    })
}

/// Load a font file and rasterize `params.charset` with it.
pub fn rasterize_font_file(
    font_path: &Path,
    params: &RasterParams,
) -> Result<RasterResult, RasterError> {
    params.validate()?;
    let font = OutlineFont::from_path(font_path, params.font_size)?;
    rasterize_charset(&font, params)
}

fn render_glyph<F: GlyphSource + ?Sized>(
    font: &F,
    c: char,
    (x, y): (i32, i32),
    width: u32,
    height: u32,
) -> GrayscaleBuffer {
    let mut canvas = vec![255u8; (width as usize) * (height as usize)];
    font.draw(c, x, y, &mut |px, py, coverage| {
        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
            return;
        }
        let idx = py as usize * width as usize + px as usize;
        // Blend black ink over whatever is already there.
        let old = canvas[idx] as f32;
        canvas[idx] = (old * (1.0 - coverage)).round() as u8;
    });
    GrayscaleBuffer::from_bytes(width, height, &canvas)
}

/// Write every glyph canvas as a PNG plus the `glyphs.json` manifest.
///
/// Returns the paths of the images, in charset order.
pub fn save_glyph_images(
    result: &RasterResult,
    out: &OutputDir,
    config: &PngConfig,
) -> Result<Vec<PathBuf>, RasterError> {
    let mut paths = Vec::with_capacity(result.glyphs.len());
    for glyph in &result.glyphs {
        let path = out.join(glyph_filename(glyph.character));
        write_grayscale(&glyph.image, &path, config)?;
        paths.push(path);
    }

    let manifest = serde_json::to_string_pretty(&result.to_metadata())?;
    std::fs::write(out.join(GLYPH_MANIFEST_NAME), manifest)?;
    log::debug!(
        "wrote {} glyph images to {}",
        paths.len(),
        out.path().display()
    );

    Ok(paths)
}
