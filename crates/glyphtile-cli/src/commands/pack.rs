//! Pack command implementation
//!
//! Tiles a list of images into a single sheet PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphtile_backend::{save_tile_sheet, OutputDir, PngConfig};
use glyphtile_spec::TileGeometry;
use std::process::ExitCode;

use super::reporting::{print_json, print_sheet, SheetReport};
use crate::input::{collect_image_paths, load_image};

/// Run the pack command
///
/// # Arguments
/// * `files` - Image files, packed in the given order
/// * `input_dir` - Directory whose PNGs are appended in filename order
/// * `name` - Sheet name; the file is `{name}.png`
/// * `out_dir` - Directory to write the sheet into
/// * `geometry` - Cell size and column count
/// * `json` - Print a JSON report instead of colored text
pub fn run(
    files: &[String],
    input_dir: Option<&str>,
    name: &str,
    out_dir: &str,
    geometry: &TileGeometry,
    json: bool,
) -> Result<ExitCode> {
    let paths = collect_image_paths(files, input_dir)?;

    if !json {
        println!(
            "{} {} images into {}x{} cells, {} columns",
            "Packing:".cyan().bold(),
            paths.len(),
            geometry.cell_width,
            geometry.cell_height,
            geometry.columns
        );
    }

    let images = paths
        .iter()
        .map(|path| load_image(path))
        .collect::<Result<Vec<_>>>()?;

    let out = OutputDir::create(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;
    let saved = save_tile_sheet(&images, name, &out, geometry, &PngConfig::default())
        .with_context(|| format!("Failed to write tile sheet: {}", name))?;
    let report = SheetReport::from(&saved);

    if json {
        print_json(&report)?;
    } else {
        print_sheet(&report);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphtile_backend::unpack_tiles;

    #[test]
    fn test_pack_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let inputs = tmp.path().join("in");
        std::fs::create_dir(&inputs).unwrap();
        for i in 0..3u8 {
            let img = image::RgbImage::from_pixel(8, 8, image::Rgb([10 + i, 20, 30]));
            img.save(inputs.join(format!("{}.png", i))).unwrap();
        }

        let geometry = TileGeometry::new(8, 8, 2);
        let out_dir = tmp.path().to_str().unwrap();
        run(&[], inputs.to_str(), "sheet", out_dir, &geometry, true).unwrap();

        let cells = unpack_tiles(&tmp.path().join("sheet.png"), &geometry).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].to_rgb8()[0], 12);
    }
}
