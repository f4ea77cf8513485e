//! Rasterization tests against a real TrueType font (Noto Sans Regular).

use glyphtile_backend::{
    rasterize_charset, rasterize_font_file, save_glyph_images, GlyphSource, OutlineFont,
    OutputDir, PngConfig, RasterError,
};
use glyphtile_spec::{Charset, GlyphSetMetadata, RasterParams, DEFAULT_CHARSET};

fn noto(params: &RasterParams) -> OutlineFont {
    OutlineFont::from_bytes(notosans::REGULAR_TTF.to_vec(), params.font_size).unwrap()
}

// ============================================================================
// Default charset
// ============================================================================

/// Every printable character except space yields a canvas-sized image in [0, 1].
#[test]
fn test_default_charset_images_valid() {
    let params = RasterParams::default();
    let result = rasterize_charset(&noto(&params), &params).unwrap();

    assert_eq!(result.glyphs.len(), 94);
    assert_eq!(result.charset, Charset::default().ink_chars());
    for glyph in &result.glyphs {
        let img = &glyph.image;
        assert_eq!((img.width, img.height), (224, 224), "{:?}", glyph.character);
        assert!(img.is_normalized(), "{:?} out of range", glyph.character);
        assert!(
            img.data.iter().any(|&v| v < 0.5),
            "{:?} has no ink",
            glyph.character
        );
        assert_eq!(glyph.position.1, 0);
    }
}

/// The space is measured but produces no image.
#[test]
fn test_space_width_non_negative() {
    let params = RasterParams::default();
    let result = rasterize_charset(&noto(&params), &params).unwrap();

    let width = result.space_width.expect("default charset contains a space");
    assert!(width >= 0);
    assert!(!result.charset.contains(' '));
}

/// Rasterized characters keep charset order.
#[test]
fn test_order_preserved() {
    let params = RasterParams::default().with_charset(Charset::new("zA9 ~"));
    let result = rasterize_charset(&noto(&params), &params).unwrap();
    assert_eq!(result.charset, "zA9~");
    let chars: Vec<char> = result.glyphs.iter().map(|g| g.character).collect();
    assert_eq!(chars, vec!['z', 'A', '9', '~']);
}

// ============================================================================
// Placement
// ============================================================================

/// Pen offset is (canvas_width - glyph_width) div 2.
#[test]
fn test_position_from_measured_width() {
    let params = RasterParams::default();
    let font = noto(&params);
    let result = rasterize_charset(&font, &params).unwrap();

    for glyph in &result.glyphs {
        let expected = (224 - glyph.bbox.width()).div_euclid(2);
        assert_eq!(glyph.position.0, expected, "{:?}", glyph.character);
        assert_eq!(glyph.bbox, font.measure(glyph.character));
    }
}

/// The first inked row lines up with the top of the measured box.
#[test]
fn test_ink_starts_near_top() {
    let params = RasterParams::default().with_charset(Charset::new("H"));
    let result = rasterize_charset(&noto(&params), &params).unwrap();
    let glyph = &result.glyphs[0];
    let img = &glyph.image;

    let first_ink_row = (0..img.height)
        .find(|&y| (0..img.width).any(|x| img.get(x, y) < 0.5))
        .unwrap();
    assert!((first_ink_row as i32 - glyph.bbox.top).abs() <= 1);
}

/// A glyph wider than the canvas is drawn off-canvas, not clamped.
#[test]
fn test_wide_glyph_overflows() {
    let params = RasterParams::default()
        .with_canvas_size(32, 224)
        .with_charset(Charset::new("W"));
    let result = rasterize_charset(&noto(&params), &params).unwrap();
    let glyph = &result.glyphs[0];
    assert!(glyph.bbox.width() > 32);
    assert!(glyph.position.0 < 0);
    assert!(glyph.image.is_normalized());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_default_charset() {
    let tmp = tempfile::tempdir().unwrap();
    let out = OutputDir::create(tmp.path().join("out")).unwrap();
    let params = RasterParams::default().with_font_size(48.0).with_canvas_size(64, 64);
    let result = rasterize_charset(&noto(&params), &params).unwrap();

    let paths = save_glyph_images(&result, &out, &PngConfig::fast()).unwrap();
    assert_eq!(paths.len(), 94);
    assert!(out.join("dot.png").is_file());
    assert!(out.join("slash.png").is_file());
    assert!(out.join("colon.png").is_file());
    assert!(out.join("A.png").is_file());

    let manifest = std::fs::read_to_string(out.join("glyphs.json")).unwrap();
    let meta: GlyphSetMetadata = serde_json::from_str(&manifest).unwrap();
    assert_eq!(meta.glyphs.len(), 94);
    assert_eq!(meta.canvas_size, [64, 64]);
    assert_eq!(meta.space_width, result.space_width);
}

#[test]
fn test_rasterize_font_file() {
    let tmp = tempfile::tempdir().unwrap();
    let font_path = tmp.path().join("NotoSans-Regular.ttf");
    std::fs::write(&font_path, notosans::REGULAR_TTF).unwrap();

    let params = RasterParams::default().with_charset(Charset::new("ab"));
    let result = rasterize_font_file(&font_path, &params).unwrap();
    assert_eq!(result.charset, "ab");
}

#[test]
fn test_missing_font_file() {
    let params = RasterParams::default();
    let result = rasterize_font_file(std::path::Path::new("/nonexistent/font.ttf"), &params);
    assert!(matches!(result, Err(RasterError::Font(_))));
}

#[test]
fn test_default_charset_constant_is_used() {
    assert_eq!(RasterParams::default().charset.as_str(), DEFAULT_CHARSET);
}
