//! Unpack command implementation
//!
//! Slices a tile sheet back into individual cell images.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphtile_backend::png::write_rgb;
use glyphtile_backend::{
    read_tile_sheet, read_tile_sheet_auto, OutputDir, PngConfig, UnpackOptions,
};
use glyphtile_spec::TileGeometry;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use super::reporting::print_json;

#[derive(Debug, Serialize)]
struct UnpackReport {
    input: String,
    count: usize,
    from_header: bool,
    geometry: TileGeometry,
    cells: Vec<String>,
}

/// Filename of cell `index`, e.g. `cell_0007.png`.
pub fn cell_filename(index: usize) -> String {
    format!("cell_{:04}.png", index)
}

/// Run the unpack command
///
/// # Arguments
/// * `input` - Tile sheet PNG
/// * `out_dir` - Where to write the cells; if `None`, only count them
/// * `geometry` - Cell size and column count; if `None`, taken from the sheet header
/// * `ignore_header` - Stop at the first black cell even if a count is embedded
/// * `json` - Print a JSON report instead of colored text
pub fn run(
    input: &str,
    out_dir: Option<&str>,
    geometry: Option<&TileGeometry>,
    ignore_header: bool,
    json: bool,
) -> Result<ExitCode> {
    if !json {
        println!("{} {}", "Unpacking:".cyan().bold(), input);
    }

    let options = UnpackOptions { ignore_header };
    let path = Path::new(input);
    let result = match geometry {
        Some(geometry) => read_tile_sheet(path, geometry, options),
        None => read_tile_sheet_auto(path, options),
    }
    .with_context(|| format!("Failed to read tile sheet: {}", input))?;

    let mut written = Vec::new();
    if let Some(dir) = out_dir {
        let out = OutputDir::create(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir))?;
        let config = PngConfig::default();
        for (i, cell) in result.cells.iter().enumerate() {
            let path = out.join(cell_filename(i));
            write_rgb(cell, &path, &config)
                .with_context(|| format!("Failed to write cell: {}", path.display()))?;
            written.push(path.to_string_lossy().to_string());
        }
    }

    if json {
        print_json(&UnpackReport {
            input: input.to_string(),
            count: result.cells.len(),
            from_header: result.header.is_some(),
            geometry: result.geometry,
            cells: written,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    let source = if result.header.is_some() {
        "count from sheet header"
    } else {
        "stopped at first black cell"
    };
    println!(
        "{} {} cells ({})",
        "SUCCESS".green().bold(),
        result.cells.len(),
        source
    );
    println!(
        "  {} {}x{}, {} columns",
        "grid:".dimmed(),
        result.geometry.cell_width,
        result.geometry.cell_height,
        result.geometry.columns
    );
    if let Some(dir) = out_dir {
        println!("  {} {}", "written to:".dimmed(), dir);
    }

    Ok(ExitCode::SUCCESS)
}
