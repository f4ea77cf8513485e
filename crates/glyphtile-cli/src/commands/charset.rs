//! Charset command implementation
//!
//! Prints the default character set and how each character is treated.

use anyhow::Result;
use colored::Colorize;
use glyphtile_spec::{CharClass, Charset};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting::print_json;

#[derive(Debug, Serialize)]
struct CharsetReport {
    rendered: String,
    rendered_count: usize,
    measured_only: Vec<u32>,
    skipped: Vec<u32>,
}

fn report(charset: &Charset) -> CharsetReport {
    let codes = |class: CharClass| {
        charset
            .chars()
            .filter(|&c| CharClass::of(c) == class)
            .map(|c| c as u32)
            .collect::<Vec<_>>()
    };
    let rendered = charset.ink_chars();
    CharsetReport {
        rendered_count: rendered.chars().count(),
        rendered,
        measured_only: codes(CharClass::Space),
        skipped: codes(CharClass::Blank),
    }
}

/// Run the charset command
pub fn run(json: bool) -> Result<ExitCode> {
    let report = report(&Charset::default());
    if json {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} characters",
        "Rendered:".cyan().bold(),
        report.rendered_count
    );
    println!("  {}", report.rendered);
    println!(
        "{} {:?}",
        "Measured only:".cyan().bold(),
        report.measured_only
    );
    println!("{} {:?}", "Skipped:".cyan().bold(), report.skipped);
    Ok(ExitCode::SUCCESS)
}
