//! Rasterize command implementation
//!
//! Renders a character set with a font file, writes one PNG per glyph plus
//! a `glyphs.json` manifest, and optionally tiles the glyphs into a sheet.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphtile_backend::{
    rasterize_font_file, save_glyph_images, save_tile_sheet, OutputDir, PngConfig,
};
use glyphtile_spec::{RasterParams, TileGeometry};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use super::reporting::{print_json, print_sheet, SheetReport};

#[derive(Debug, Serialize)]
struct RasterReport {
    font: String,
    out_dir: String,
    charset: String,
    glyph_count: usize,
    space_width: Option<i32>,
    sheet: Option<SheetReport>,
}

/// Run the rasterize command
///
/// # Arguments
/// * `font` - Path to a TTF/OTF font
/// * `out_dir` - Directory for glyph images and the manifest
/// * `params` - Raster params (font size, canvas, charset)
/// * `sheet` - If set, also write `{sheet}.png` in the current directory
/// * `columns` - Column count for the sheet
/// * `json` - Print a JSON report instead of colored text
pub fn run(
    font: &str,
    out_dir: &str,
    params: &RasterParams,
    sheet: Option<&str>,
    columns: u32,
    json: bool,
) -> Result<ExitCode> {
    if !json {
        println!(
            "{} {} at {}px on {}x{}",
            "Rasterizing:".cyan().bold(),
            font,
            params.font_size,
            params.canvas_width(),
            params.canvas_height()
        );
    }

    let result = rasterize_font_file(Path::new(font), params)
        .with_context(|| format!("Failed to rasterize with font: {}", font))?;

    let out = OutputDir::create(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;
    let config = PngConfig::default();
    let paths = save_glyph_images(&result, &out, &config)
        .with_context(|| format!("Failed to write glyph images to: {}", out_dir))?;

    let sheet_report = match sheet {
        Some(name) => {
            let geometry =
                TileGeometry::new(params.canvas_width(), params.canvas_height(), columns);
            let cwd = OutputDir::create(".")?;
            let saved = save_tile_sheet(&result.images(), name, &cwd, &geometry, &config)
                .with_context(|| format!("Failed to write tile sheet: {}", name))?;
            Some(SheetReport::from(&saved))
        }
        None => None,
    };

    if json {
        print_json(&RasterReport {
            font: font.to_string(),
            out_dir: out_dir.to_string(),
            charset: result.charset.clone(),
            glyph_count: paths.len(),
            space_width: result.space_width,
            sheet: sheet_report,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} Rendered {} glyphs to {}",
        "SUCCESS".green().bold(),
        paths.len(),
        out_dir
    );
    match result.space_width {
        Some(width) => println!("  {} {}px", "space width:".dimmed(), width),
        None => println!(
            "{} charset has no space; space width not measured",
            "WARNING".yellow().bold()
        ),
    }
    if let Some(report) = &sheet_report {
        print_sheet(report);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphtile_spec::Charset;

    #[test]
    fn test_rasterize_writes_glyphs_and_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let font_path = tmp.path().join("NotoSans-Regular.ttf");
        std::fs::write(&font_path, notosans::REGULAR_TTF).unwrap();
        let out_dir = tmp.path().join("out");

        let params = RasterParams::default()
            .with_font_size(32.0)
            .with_canvas_size(48, 48)
            .with_charset(Charset::new("a.b "));
        run(
            font_path.to_str().unwrap(),
            out_dir.to_str().unwrap(),
            &params,
            None,
            10,
            true,
        )
        .unwrap();

        assert!(out_dir.join("a.png").is_file());
        assert!(out_dir.join("dot.png").is_file());
        assert!(out_dir.join("b.png").is_file());
        assert!(out_dir.join("glyphs.json").is_file());
    }

    #[test]
    fn test_rasterize_missing_font_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");
        let result = run(
            "/nonexistent/font.ttf",
            out_dir.to_str().unwrap(),
            &RasterParams::default(),
            None,
            10,
            true,
        );
        assert!(result.is_err());
        assert!(!out_dir.exists());
    }
}
