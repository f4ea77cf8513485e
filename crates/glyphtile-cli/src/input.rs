//! Loading of command inputs: raster params, tile geometry, and images.

use anyhow::{bail, Context, Result};
use glyphtile_backend::RgbBuffer;
use glyphtile_spec::error::parse_size;
use glyphtile_spec::{Charset, RasterParams, TileGeometry};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Command-line values that take precedence over a params file.
#[derive(Debug, Clone, Default)]
pub struct RasterOverrides {
    pub font_size: Option<f32>,
    pub canvas: Option<String>,
    pub charset: Option<String>,
}

/// Load raster params from an optional JSON file, then apply overrides.
pub fn load_raster_params(path: Option<&str>, overrides: &RasterOverrides) -> Result<RasterParams> {
    let mut params = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file: {}", path))?;
            RasterParams::from_json(&content)
                .with_context(|| format!("Failed to parse params file: {}", path))?
        }
        None => RasterParams::default(),
    };

    if let Some(font_size) = overrides.font_size {
        params.font_size = font_size;
    }
    if let Some(canvas) = &overrides.canvas {
        params.canvas_size = parse_size(canvas)?;
    }
    if let Some(charset) = &overrides.charset {
        params.charset = Charset::new(charset.clone());
    }

    params.validate()?;
    Ok(params)
}

/// Build a tile geometry from `WxH` and a column count.
pub fn parse_geometry(cell: &str, columns: u32) -> Result<TileGeometry> {
    let [w, h] = parse_size(cell)?;
    let geometry = TileGeometry::new(w, h, columns);
    geometry.validate()?;
    Ok(geometry)
}

/// Build a tile geometry only if the cell size or column count was given.
///
/// A missing half falls back to the default (`224x224`, 10 columns).
pub fn parse_optional_geometry(
    cell: Option<&str>,
    columns: Option<u32>,
) -> Result<Option<TileGeometry>> {
    if cell.is_none() && columns.is_none() {
        return Ok(None);
    }
    let default = TileGeometry::default();
    let cell = match cell {
        Some(cell) => parse_size(cell)?,
        None => [default.cell_width, default.cell_height],
    };
    let geometry = TileGeometry::new(cell[0], cell[1], columns.unwrap_or(default.columns));
    geometry.validate()?;
    Ok(Some(geometry))
}

/// Resolve the images to pack: explicit files first, then the PNGs of
/// `input_dir` in filename order.
pub fn collect_image_paths(files: &[String], input_dir: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    if let Some(dir) = input_dir {
        let mut found = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("Failed to read directory: {}", dir))?;
            let path = entry.path();
            let is_png = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("png"));
            if entry.file_type().is_file() && is_png {
                found.push(path.to_path_buf());
            }
        }
        found.sort();
        paths.extend(found);
    }

    if paths.is_empty() {
        bail!("No input images given");
    }
    Ok(paths)
}

/// Decode an image file into an RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbBuffer> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?
        .to_rgb8();
    log::debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(RgbBuffer::from_rgb8(img.width(), img.height(), img.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overrides_win_over_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("params.json");
        fs::write(&path, r#"{"font_size": 48, "charset": "abc"}"#).unwrap();

        let overrides = RasterOverrides {
            font_size: Some(96.0),
            canvas: Some("64x32".to_string()),
            charset: None,
        };
        let params = load_raster_params(path.to_str(), &overrides).unwrap();
        assert_eq!(params.font_size, 96.0);
        assert_eq!(params.canvas_size, [64, 32]);
        assert_eq!(params.charset.as_str(), "abc");
    }

    #[test]
    fn test_defaults_without_file() {
        let params = load_raster_params(None, &RasterOverrides::default()).unwrap();
        assert_eq!(params, RasterParams::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = RasterOverrides {
            font_size: Some(-1.0),
            ..Default::default()
        };
        assert!(load_raster_params(None, &overrides).is_err());
    }

    #[test]
    fn test_parse_geometry() {
        assert_eq!(
            parse_geometry("224x224", 10).unwrap(),
            TileGeometry::default()
        );
        assert!(parse_geometry("224x224", 0).is_err());
        assert!(parse_geometry("224", 10).is_err());
        assert!(parse_geometry("70000x1", 70_000).is_err());
    }

    #[test]
    fn test_parse_optional_geometry() {
        assert!(parse_optional_geometry(None, None).unwrap().is_none());
        assert_eq!(
            parse_optional_geometry(Some("64x32"), None).unwrap(),
            Some(TileGeometry::new(64, 32, 10))
        );
        assert_eq!(
            parse_optional_geometry(None, Some(4)).unwrap(),
            Some(TileGeometry::new(224, 224, 4))
        );
        assert!(parse_optional_geometry(Some("70000x1"), Some(70_000)).is_err());
    }

    #[test]
    fn test_collect_image_paths_sorted_pngs_only() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.png", "c.PNG", "notes.txt"] {
            fs::write(tmp.path().join(name), b"").unwrap();
        }
        let dir = tmp.path().to_str().unwrap();
        let paths = collect_image_paths(&["first.png".to_string()], Some(dir)).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["first.png", "a.png", "b.png", "c.PNG"]);
    }

    #[test]
    fn test_collect_image_paths_empty() {
        assert!(collect_image_paths(&[], None).is_err());
    }
}
