//! Error types for DFM analysis.
//!
//! The evaluator itself is total: it always produces a best-effort report
//! for well-formed input. The only failures this crate can report are
//! input-contract violations surfaced by [`PartDescriptor::validate`]
//! and the checked analysis entry point.
//!
//! Each error carries a machine-readable code in the format `DFM-XXXX`
//! (2xxx = input validation), available via [`DfmError::code`].
//!
//! [`PartDescriptor::validate`]: crate::PartDescriptor::validate

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for DFM operations.
pub type DfmResult<T> = Result<T, DfmError>;

/// Errors raised when a part descriptor violates the input contract.
#[derive(Debug, Error, Diagnostic)]
pub enum DfmError {
    /// The part has no usable file name.
    #[error("part has no file name")]
    #[diagnostic(
        code(dfm::part::empty_file_name),
        help("Supply the original upload name; its extension drives the file-type check.")
    )]
    EmptyFileName,

    /// A bounding-box extent is zero, negative, or not finite.
    #[error("invalid bounding-box extent: {axis} is {value}")]
    #[diagnostic(
        code(dfm::part::dimension),
        help("Bounding-box extents are millimeter lengths and must be finite and greater than zero.")
    )]
    InvalidDimension { axis: &'static str, value: f64 },

    /// Volume or surface area is negative or not finite.
    #[error("invalid geometry measure: {quantity} is {value}")]
    #[diagnostic(
        code(dfm::part::measure),
        help("Volume (mm³) and surface area (mm²) must be finite and non-negative.")
    )]
    InvalidMeasure { quantity: &'static str, value: f64 },
}

impl DfmError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            DfmError::EmptyFileName => "DFM-2001",
            DfmError::InvalidDimension { .. } => "DFM-2002",
            DfmError::InvalidMeasure { .. } => "DFM-2003",
        }
    }
}
