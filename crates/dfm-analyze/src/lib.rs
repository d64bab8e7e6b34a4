//! Design-for-Manufacturability (DFM) analysis for uploaded parts.
//!
//! This crate evaluates a part description — upload file name, an optional
//! geometry summary from an upstream CAD/mesh parser, and the selected
//! manufacturing options — against a fixed set of CNC manufacturability
//! rules, and produces a structured report: ten per-rule check results, an
//! overall score, a qualitative rating, and remediation recommendations.
//!
//! The evaluator is a pure, synchronous, in-memory function. It performs
//! no geometry computation of its own: the geometry summary arrives
//! precomputed and opaque, and several checks are documented
//! approximations over it rather than true mesh analysis.
//!
//! # Units and Scale
//!
//! **All lengths are millimeters (mm)**, areas mm², volumes mm³. The
//! machine envelope, wall-thickness floor, finish size limits and
//! tolerance floor in [`limits`] are all expressed in these units.
//!
//! # Quick Start
//!
//! ```
//! use dfm_analyze::{BoundingBox, GeometrySummary, PartDescriptor};
//!
//! let part = PartDescriptor::new("bracket.step")
//!     .with_geometry(GeometrySummary::new(
//!         BoundingBox::new(120.0, 80.0, 40.0),
//!         180_000.0,
//!         52_000.0,
//!     ))
//!     .with_finish("anodize")
//!     .with_tolerance("±0.05mm");
//!
//! let report = part.analyze();
//!
//! println!("{}", report);
//! assert!(report.is_manufacturable());
//! ```
//!
//! # Logging
//!
//! The analysis emits `tracing` events: `debug` spans of each run and
//! `warn` for failed checks. Install a `tracing-subscriber` in the
//! application to see them (e.g. `RUST_LOG=dfm_analyze=debug`).

mod error;
mod types;

pub mod analyze;
pub mod limits;
pub mod report;

pub use error::{DfmError, DfmResult};
pub use types::{BoundingBox, GeometrySummary, PartDescriptor};

pub use analyze::{analyze_part, analyze_part_checked, analyze_part_with_limits};
pub use limits::{
    finish_size_limit, MachineLimits, DEFAULT_BOUNDING_BOX, DEFAULT_FINISH_SIZE_LIMIT,
    FINISH_SIZE_LIMITS, SUPPORTED_FILE_TYPES,
};
pub use report::{CheckResult, CheckStatus, DfmReport, Manufacturability};
