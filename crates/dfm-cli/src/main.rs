//! dfm: Command-line interface for Design-for-Manufacturability analysis.
//!
//! This tool runs the dfm-analyze manufacturability checks against a part
//! described on the command line (or via an upstream geometry JSON file),
//! suitable for scripting and quote-pipeline automation.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=dfm_analyze=info` - Basic operation logging
//! - `RUST_LOG=dfm_analyze=debug` - Per-analysis detail
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Analyze an upload with inline geometry
//! dfm analyze bracket.step --bbox 120 80 40 --volume 180000 --surface-area 52000
//!
//! # JSON output for scripting
//! dfm analyze bracket.step --finish anodize --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use miette::Diagnostic;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{analyze, finishes};

/// dfm - A command-line tool for part manufacturability analysis.
///
/// Evaluate uploaded parts against CNC manufacturing constraints and
/// report per-check results, a score, and remediation recommendations.
#[derive(Parser)]
#[command(name = "dfm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a part for manufacturability
    Analyze {
        /// Uploaded file name; its extension drives the file-type check
        file_name: String,

        /// Bounding box extents in mm
        #[arg(
            long,
            num_args = 3,
            value_names = ["X", "Y", "Z"],
            requires = "volume",
            requires = "surface_area",
            conflicts_with = "geometry"
        )]
        bbox: Option<Vec<f64>>,

        /// Part volume in mm³
        #[arg(long, requires = "bbox", conflicts_with = "geometry")]
        volume: Option<f64>,

        /// Part surface area in mm²
        #[arg(long, requires = "bbox", conflicts_with = "geometry")]
        surface_area: Option<f64>,

        /// Read the geometry summary from a JSON file produced upstream
        #[arg(long)]
        geometry: Option<PathBuf>,

        /// Requested surface finish (see `dfm finishes`)
        #[arg(long)]
        finish: Option<String>,

        /// Requested tolerance, e.g. "±0.05mm"
        #[arg(long)]
        tolerance: Option<String>,

        /// Minimum wall thickness for the analysis (mm)
        #[arg(long, default_value = "0.8")]
        min_thickness: f64,
    },

    /// List the per-finish maximum part sizes
    Finishes,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    // If quiet, don't initialize any tracing
    if quiet {
        return;
    }

    // Check RUST_LOG first, then fall back to -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "dfm_analyze=info",
            2 => "dfm_analyze=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Install miette's panic hook for better error display in development
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Analyze {
            file_name,
            bbox,
            volume,
            surface_area,
            geometry,
            finish,
            tolerance,
            min_thickness,
        } => analyze::run(
            file_name,
            bbox.as_deref(),
            *volume,
            *surface_area,
            geometry.as_deref(),
            finish.as_deref(),
            tolerance.as_deref(),
            *min_thickness,
            &cli,
        ),
        Commands::Finishes => finishes::run(&cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            // Library errors carry a code and help text worth surfacing
            if let Some(dfm_err) = e.downcast_ref::<dfm_analyze::DfmError>() {
                eprintln!("{}: {}", "Error".red().bold(), dfm_err);
                eprintln!("  {}: {}", "Code".cyan(), dfm_err.code());
                if let Some(help) = dfm_err.help() {
                    eprintln!("  {}: {}", "Help".green(), help);
                }
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
