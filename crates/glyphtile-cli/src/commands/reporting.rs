use anyhow::{Context, Result};
use colored::Colorize;
use glyphtile_backend::SavedTileSheet;
use serde::Serialize;

/// Summary of a written tile sheet.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SheetReport {
    pub path: String,
    pub hash: String,
    pub width: u32,
    pub height: u32,
    pub count: u32,
    pub columns: u32,
    pub cell_size: [u32; 2],
}

impl From<&SavedTileSheet> for SheetReport {
    fn from(saved: &SavedTileSheet) -> Self {
        Self {
            path: saved.path.to_string_lossy().to_string(),
            hash: saved.hash.clone(),
            width: saved.width,
            height: saved.height,
            count: saved.header.count,
            columns: saved.header.geometry.columns,
            cell_size: [
                saved.header.geometry.cell_width,
                saved.header.geometry.cell_height,
            ],
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn print_sheet(report: &SheetReport) {
    println!(
        "{} Wrote {} ({}x{}, {} images, {} columns)",
        "SUCCESS".green().bold(),
        report.path,
        report.width,
        report.height,
        report.count,
        report.columns
    );
    println!("  {} {}", "hash:".dimmed(), report.hash);
}
