//! dfm finishes command - list the per-finish size limits.

use anyhow::Result;
use colored::Colorize;
use dfm_analyze::{DEFAULT_FINISH_SIZE_LIMIT, FINISH_SIZE_LIMITS};
use serde::Serialize;

use crate::{output, Cli, OutputFormat};

#[derive(Serialize)]
struct FinishTable {
    finishes: Vec<FinishInfo>,
    default_limit_mm: f64,
}

#[derive(Serialize)]
struct FinishInfo {
    finish: String,
    max_dimension_mm: f64,
}

pub fn run(cli: &Cli) -> Result<()> {
    let table = FinishTable {
        finishes: FINISH_SIZE_LIMITS
            .iter()
            .map(|(finish, limit)| FinishInfo {
                finish: finish.to_string(),
                max_dimension_mm: *limit,
            })
            .collect(),
        default_limit_mm: DEFAULT_FINISH_SIZE_LIMIT,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&table, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Finish Size Limits".bold().underline());
                for info in &table.finishes {
                    // Pad before coloring so ANSI codes don't skew alignment
                    println!(
                        "  {} {:>6}mm",
                        format!("{:<22}", info.finish).cyan(),
                        info.max_dimension_mm
                    );
                }
                println!(
                    "  {} {:>6}mm",
                    format!("{:<22}", "(unknown finish)").dimmed(),
                    table.default_limit_mm
                );
            }
        }
    }

    Ok(())
}
