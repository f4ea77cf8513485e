//! GlyphTile CLI - glyph image datasets from font files
//!
//! This binary rasterizes character sets into per-glyph images, packs
//! images into tile sheets, and unpacks tile sheets back into cells.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use glyphtile_cli::commands;
use glyphtile_cli::input::{
    load_raster_params, parse_geometry, parse_optional_geometry, RasterOverrides,
};

/// GlyphTile - Glyph Rasterization and Tile Sheets
#[derive(Parser)]
#[command(name = "glyphtile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every character of a charset into its own PNG
    Rasterize {
        /// Path to a TTF/OTF font file
        #[arg(short, long)]
        font: String,

        /// Directory for glyph images and glyphs.json
        #[arg(short, long, default_value = "out")]
        out_dir: String,

        /// JSON params file (font_size, canvas_size, charset)
        #[arg(short, long)]
        params: Option<String>,

        /// Font em size in pixels (overrides params file)
        #[arg(long)]
        font_size: Option<f32>,

        /// Canvas size as WIDTHxHEIGHT (overrides params file)
        #[arg(long)]
        canvas: Option<String>,

        /// Characters to render (overrides params file)
        #[arg(long)]
        charset: Option<String>,

        /// Also tile the glyphs into NAME.png in the current directory
        #[arg(long)]
        sheet: Option<String>,

        /// Columns per row for --sheet
        #[arg(long, default_value_t = 10)]
        columns: u32,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Tile images into a single sheet PNG
    Pack {
        /// Image files, packed in the given order
        images: Vec<String>,

        /// Directory of PNGs to append, in filename order
        #[arg(short, long)]
        input_dir: Option<String>,

        /// Sheet name; writes NAME.png
        #[arg(long)]
        out: String,

        /// Directory to write the sheet into
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Cell size as WIDTHxHEIGHT
        #[arg(long, default_value = "224x224")]
        cell: String,

        /// Columns per row
        #[arg(long, default_value_t = 10)]
        columns: u32,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Slice a tile sheet back into cell images
    Unpack {
        /// Path to the tile sheet PNG
        #[arg(short, long)]
        input: String,

        /// Directory to write cell_NNNN.png files into (default: count only)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Cell size as WIDTHxHEIGHT (default: from the sheet header, else 224x224)
        #[arg(long)]
        cell: Option<String>,

        /// Columns per row (default: from the sheet header, else 10)
        #[arg(long)]
        columns: Option<u32>,

        /// Ignore the embedded header and stop at the first all-black cell
        #[arg(long)]
        ignore_header: bool,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the default character set
    Charset {
        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rasterize {
            font,
            out_dir,
            params,
            font_size,
            canvas,
            charset,
            sheet,
            columns,
            json,
        } => {
            let overrides = RasterOverrides {
                font_size,
                canvas,
                charset,
            };
            load_raster_params(params.as_deref(), &overrides).and_then(|params| {
                commands::rasterize::run(
                    &font,
                    &out_dir,
                    &params,
                    sheet.as_deref(),
                    columns,
                    json,
                )
            })
        }
        Commands::Pack {
            images,
            input_dir,
            out,
            out_dir,
            cell,
            columns,
            json,
        } => parse_geometry(&cell, columns).and_then(|geometry| {
            commands::pack::run(
                &images,
                input_dir.as_deref(),
                &out,
                &out_dir,
                &geometry,
                json,
            )
        }),
        Commands::Unpack {
            input,
            out_dir,
            cell,
            columns,
            ignore_header,
            json,
        } => parse_optional_geometry(cell.as_deref(), columns).and_then(|geometry| {
            commands::unpack::run(
                &input,
                out_dir.as_deref(),
                geometry.as_ref(),
                ignore_header,
                json,
            )
        }),
        Commands::Charset { json } => commands::charset::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_rasterize_defaults() {
        let cli = Cli::try_parse_from(["glyphtile", "rasterize", "--font", "Roboto-Regular.ttf"])
            .unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Rasterize {
                font,
                out_dir,
                params,
                font_size,
                canvas,
                charset,
                sheet,
                columns,
                json,
            } => {
                assert_eq!(font, "Roboto-Regular.ttf");
                assert_eq!(out_dir, "out");
                assert!(params.is_none());
                assert!(font_size.is_none());
                assert!(canvas.is_none());
                assert!(charset.is_none());
                assert!(sheet.is_none());
                assert_eq!(columns, 10);
                assert!(!json);
            }
            _ => panic!("expected rasterize command"),
        }
    }

    #[test]
    fn test_cli_parses_rasterize_overrides() {
        let cli = Cli::try_parse_from([
            "glyphtile",
            "-v",
            "rasterize",
            "--font",
            "f.ttf",
            "--font-size",
            "96",
            "--canvas",
            "128x128",
            "--charset",
            "abc",
            "--sheet",
            "glyphs",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Rasterize {
                font_size,
                canvas,
                charset,
                sheet,
                json,
                ..
            } => {
                assert_eq!(font_size, Some(96.0));
                assert_eq!(canvas.as_deref(), Some("128x128"));
                assert_eq!(charset.as_deref(), Some("abc"));
                assert_eq!(sheet.as_deref(), Some("glyphs"));
                assert!(json);
            }
            _ => panic!("expected rasterize command"),
        }
    }

    #[test]
    fn test_cli_parses_pack() {
        let cli = Cli::try_parse_from([
            "glyphtile",
            "pack",
            "--out",
            "batch",
            "a.png",
            "b.png",
            "--columns",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Pack {
                images,
                input_dir,
                out,
                out_dir,
                cell,
                columns,
                json,
            } => {
                assert_eq!(images, vec!["a.png", "b.png"]);
                assert!(input_dir.is_none());
                assert_eq!(out, "batch");
                assert_eq!(out_dir, ".");
                assert_eq!(cell, "224x224");
                assert_eq!(columns, 4);
                assert!(!json);
            }
            _ => panic!("expected pack command"),
        }
    }

    #[test]
    fn test_cli_pack_requires_out() {
        assert!(Cli::try_parse_from(["glyphtile", "pack", "a.png"]).is_err());
    }

    #[test]
    fn test_cli_parses_unpack() {
        let cli = Cli::try_parse_from([
            "glyphtile",
            "unpack",
            "--input",
            "batch.png",
            "--out-dir",
            "cells",
            "--ignore-header",
        ])
        .unwrap();
        match cli.command {
            Commands::Unpack {
                input,
                out_dir,
                cell,
                columns,
                ignore_header,
                json,
            } => {
                assert_eq!(input, "batch.png");
                assert_eq!(out_dir.as_deref(), Some("cells"));
                assert!(cell.is_none());
                assert!(columns.is_none());
                assert!(ignore_header);
                assert!(!json);
            }
            _ => panic!("expected unpack command"),
        }
    }

    #[test]
    fn test_cli_parses_charset() {
        let cli = Cli::try_parse_from(["glyphtile", "charset", "--json"]).unwrap();
        match cli.command {
            Commands::Charset { json } => assert!(json),
            _ => panic!("expected charset command"),
        }
    }
}
