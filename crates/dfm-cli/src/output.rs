//! Machine-readable output helpers.

use serde::Serialize;

use crate::OutputFormat;

/// Print a serializable result in the requested format.
///
/// Text rendering is handled by each command; this covers the JSON path.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }

    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize output: {}", e),
        }
    }
}
