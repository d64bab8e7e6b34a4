//! Core input types for DFM analysis.
//!
//! A [`PartDescriptor`] is the evaluator's entire input: the uploaded file
//! name, an optional geometry summary produced by an upstream CAD/mesh
//! parser, and the manufacturing options the customer selected. The
//! evaluator never mutates it.

use crate::error::{DfmError, DfmResult};

/// Axis-aligned bounding box extents in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Extent along X in mm.
    pub x: f64,
    /// Extent along Y in mm.
    pub y: f64,
    /// Extent along Z in mm.
    pub z: f64,
}

impl BoundingBox {
    /// Create a bounding box from its three extents.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Largest of the three extents.
    pub fn max_dim(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Smallest of the three extents.
    pub fn min_dim(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }
}

/// Simplified geometry metrics for an uploaded part.
///
/// Produced by an external CAD/mesh parser and passed in opaquely; this
/// crate performs no geometry analysis of its own. All values are in
/// millimeter units (mm, mm², mm³).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySummary {
    /// Bounding box extents.
    pub bounding_box: BoundingBox,
    /// Part volume in mm³.
    pub volume: f64,
    /// Part surface area in mm².
    pub surface_area: f64,
}

impl GeometrySummary {
    /// Create a geometry summary.
    pub fn new(bounding_box: BoundingBox, volume: f64, surface_area: f64) -> Self {
        Self {
            bounding_box,
            volume,
            surface_area,
        }
    }
}

/// Description of an uploaded part, as configured by the customer.
///
/// Read-only input to the evaluator. The file extension drives the
/// file-type check; `geometry` is absent when no upstream analysis ran;
/// `finish` and `tolerance` are free-form selections from the quote flow.
///
/// # Example
///
/// ```
/// use dfm_analyze::{BoundingBox, GeometrySummary, PartDescriptor};
///
/// let part = PartDescriptor::new("bracket.step")
///     .with_geometry(GeometrySummary::new(
///         BoundingBox::new(120.0, 80.0, 40.0),
///         180_000.0,
///         52_000.0,
///     ))
///     .with_finish("anodize")
///     .with_tolerance("±0.05mm");
///
/// assert!(part.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PartDescriptor {
    /// Original upload name, e.g. `"bracket.step"`.
    pub file_name: String,
    /// Geometry summary, if an upstream parser produced one.
    pub geometry: Option<GeometrySummary>,
    /// Requested surface finish identifier (matched case-insensitively).
    pub finish: Option<String>,
    /// Requested tolerance, e.g. `"±0.05mm"`; only the numeric part matters.
    pub tolerance: Option<String>,
}

impl PartDescriptor {
    /// Create a descriptor for the named upload with no geometry or options.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            geometry: None,
            finish: None,
            tolerance: None,
        }
    }

    /// Attach a geometry summary.
    pub fn with_geometry(mut self, geometry: GeometrySummary) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Set the requested surface finish.
    pub fn with_finish(mut self, finish: impl Into<String>) -> Self {
        self.finish = Some(finish.into());
        self
    }

    /// Set the requested tolerance string.
    pub fn with_tolerance(mut self, tolerance: impl Into<String>) -> Self {
        self.tolerance = Some(tolerance.into());
        self
    }

    /// Check the input contract the evaluator itself does not enforce.
    ///
    /// The analysis functions are total over well-formed input; this
    /// catches the cases the caller is responsible for preventing: an
    /// empty file name, non-positive or non-finite bounding-box extents,
    /// and negative or non-finite volume/surface area.
    pub fn validate(&self) -> DfmResult<()> {
        if self.file_name.trim().is_empty() {
            return Err(DfmError::EmptyFileName);
        }

        if let Some(geometry) = &self.geometry {
            let axes = [
                ("x", geometry.bounding_box.x),
                ("y", geometry.bounding_box.y),
                ("z", geometry.bounding_box.z),
            ];
            for (axis, value) in axes {
                if !value.is_finite() || value <= 0.0 {
                    return Err(DfmError::InvalidDimension { axis, value });
                }
            }

            let measures = [
                ("volume", geometry.volume),
                ("surface area", geometry.surface_area),
            ];
            for (quantity, value) in measures {
                if !value.is_finite() || value < 0.0 {
                    return Err(DfmError::InvalidMeasure { quantity, value });
                }
            }
        }

        Ok(())
    }
}
