//! dfm analyze command - run manufacturability checks on a part.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use dfm_analyze::{
    analyze_part_with_limits, BoundingBox, CheckStatus, DfmReport, GeometrySummary,
    MachineLimits, Manufacturability, PartDescriptor,
};
use serde::{Deserialize, Serialize};

use crate::{output, Cli, OutputFormat};

/// Geometry summary as produced by the upstream CAD/mesh parser.
#[derive(Deserialize)]
struct GeometryFile {
    bounding_box: BoundingBoxFile,
    volume: f64,
    surface_area: f64,
}

#[derive(Deserialize)]
struct BoundingBoxFile {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Serialize)]
struct AnalysisResult {
    file_name: String,
    overall_score: u32,
    manufacturability: String,
    estimated_issues: usize,
    checks: Vec<CheckInfo>,
    recommendations: Vec<String>,
}

#[derive(Serialize)]
struct CheckInfo {
    id: String,
    name: String,
    status: String,
    details: String,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    file_name: &str,
    bbox: Option<&[f64]>,
    volume: Option<f64>,
    surface_area: Option<f64>,
    geometry_path: Option<&Path>,
    finish: Option<&str>,
    tolerance: Option<&str>,
    min_thickness: f64,
    cli: &Cli,
) -> Result<()> {
    let geometry = match (geometry_path, bbox) {
        (Some(path), _) => Some(load_geometry(path)?),
        (None, Some(extents)) => {
            let volume = volume.context("--volume is required with --bbox")?;
            let surface_area = surface_area.context("--surface-area is required with --bbox")?;
            Some(GeometrySummary::new(
                BoundingBox::new(extents[0], extents[1], extents[2]),
                volume,
                surface_area,
            ))
        }
        (None, None) => None,
    };

    let mut part = PartDescriptor::new(file_name);
    if let Some(geometry) = geometry {
        part = part.with_geometry(geometry);
    }
    if let Some(finish) = finish {
        part = part.with_finish(finish);
    }
    if let Some(tolerance) = tolerance {
        part = part.with_tolerance(tolerance);
    }

    part.validate()?;

    let mut limits = MachineLimits::cnc_default();
    limits.min_wall_thickness = min_thickness;

    let report = analyze_part_with_limits(&part, &limits);

    let result = AnalysisResult {
        file_name: file_name.to_string(),
        overall_score: report.overall_score,
        manufacturability: report.manufacturability.to_string(),
        estimated_issues: report.estimated_issues,
        checks: report
            .checks
            .iter()
            .map(|c| CheckInfo {
                id: c.id.to_string(),
                name: c.name.to_string(),
                status: c.status.to_string(),
                details: c.details.clone(),
            })
            .collect(),
        recommendations: report.recommendations.clone(),
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&result, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                render_text(&report, file_name);
            }
        }
    }

    // Exit with error code when the part is not manufacturable as uploaded
    if !report.is_manufacturable() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_geometry(path: &Path) -> Result<GeometrySummary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read geometry from {:?}", path))?;
    let file: GeometryFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse geometry JSON from {:?}", path))?;

    Ok(GeometrySummary::new(
        BoundingBox::new(file.bounding_box.x, file.bounding_box.y, file.bounding_box.z),
        file.volume,
        file.surface_area,
    ))
}

fn render_text(report: &DfmReport, file_name: &str) {
    println!("{}", "DFM Analysis Report".bold().underline());
    println!("  {}: {}", "File".cyan(), file_name);
    println!(
        "  {}: {}",
        "Manufacturability".cyan(),
        rating_label(report.manufacturability)
    );
    println!("  {}: {}/100", "Score".cyan(), report.overall_score);

    println!("\n{}", "Checks:".bold());
    for check in &report.checks {
        println!("  {} {}: {}", status_icon(check.status), check.name, check.details);
    }

    if !report.recommendations.is_empty() {
        println!("\n{}", "Recommendations:".bold());
        for recommendation in &report.recommendations {
            println!("  - {}", recommendation);
        }
    }

    println!(
        "\n{}: {} passed, {} warnings, {} failed, {} info",
        "Summary".bold(),
        report.pass_count().to_string().green(),
        report.warning_count().to_string().yellow(),
        report.fail_count().to_string().red(),
        report.info_count().to_string().blue()
    );
    if report.estimated_issues > 0 {
        println!(
            "{}: {}",
            "Estimated issues".yellow(),
            report.estimated_issues
        );
    }
}

/// Status-to-glyph lookup for terminal rendering.
fn status_icon(status: CheckStatus) -> colored::ColoredString {
    match status {
        CheckStatus::Pass => "✓".green(),
        CheckStatus::Warning => "⚠".yellow(),
        CheckStatus::Fail => "✗".red(),
        CheckStatus::Info => "ℹ".blue(),
    }
}

/// Rating-to-color lookup for terminal rendering.
fn rating_label(rating: Manufacturability) -> colored::ColoredString {
    match rating {
        Manufacturability::Excellent => rating.as_str().green().bold(),
        Manufacturability::Good => rating.as_str().blue().bold(),
        Manufacturability::Fair => rating.as_str().yellow().bold(),
        Manufacturability::Poor => rating.as_str().red().bold(),
    }
}
