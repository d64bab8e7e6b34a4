//! Static manufacturing constraint data.
//!
//! Everything here is fixed, process-lifetime constant configuration: the
//! file-format whitelist, the machine work envelope, and the per-finish
//! size limits. The values mirror the shop's CNC capabilities and must
//! not drift, since quoted parts are re-analyzed against them.

use crate::types::BoundingBox;

/// File extensions accepted for CNC machining, lower-case.
pub const SUPPORTED_FILE_TYPES: &[&str] = &[
    "stl", "step", "stp", "iges", "igs", "obj", "3mf", "x_t", "x_b",
];

/// Maximum part dimension per surface finish, in mm.
///
/// Keys are lower-case finish identifiers as selected in the quote flow.
/// Finishes not in this table fall back to [`DEFAULT_FINISH_SIZE_LIMIT`].
pub const FINISH_SIZE_LIMITS: &[(&str, f64)] = &[
    ("anodize", 600.0),
    ("anodize-type-ii", 600.0),
    ("anodize-type-iii", 400.0),
    ("powder_coat", 800.0),
    ("chrome", 300.0),
    ("nickel", 400.0),
    ("electroless_nickel", 500.0),
    ("passivate", 1000.0),
    ("black_oxide", 800.0),
    ("none", 1000.0),
    ("standard", 1000.0),
];

/// Size limit applied when the finish is unknown or not selected, in mm.
pub const DEFAULT_FINISH_SIZE_LIMIT: f64 = 1000.0;

/// Bounding box assumed when no geometry summary is available, in mm.
pub const DEFAULT_BOUNDING_BOX: BoundingBox = BoundingBox {
    x: 100.0,
    y: 100.0,
    z: 50.0,
};

/// Look up the maximum part dimension for a finish, case-insensitively.
pub fn finish_size_limit(finish: Option<&str>) -> f64 {
    let Some(finish) = finish else {
        return DEFAULT_FINISH_SIZE_LIMIT;
    };
    let finish = finish.to_lowercase();

    FINISH_SIZE_LIMITS
        .iter()
        .find(|(name, _)| *name == finish)
        .map(|(_, limit)| *limit)
        .unwrap_or(DEFAULT_FINISH_SIZE_LIMIT)
}

/// Machine capability limits used by the analysis.
#[derive(Debug, Clone)]
pub struct MachineLimits {
    /// Work envelope (X, Y, Z) in mm.
    pub max_dimensions: (f64, f64, f64),

    /// Minimum wall thickness in mm.
    pub min_wall_thickness: f64,

    /// Largest acceptable ratio of longest to shortest extent.
    pub max_aspect_ratio: f64,

    /// Tightest tolerance achievable without grinding or EDM, in mm.
    pub min_tolerance: f64,
}

impl Default for MachineLimits {
    fn default() -> Self {
        Self::cnc_default()
    }
}

impl MachineLimits {
    /// Default limits for 3-axis CNC machining.
    pub fn cnc_default() -> Self {
        Self {
            max_dimensions: (1000.0, 500.0, 500.0),
            min_wall_thickness: 0.8,
            max_aspect_ratio: 10.0,
            min_tolerance: 0.025,
        }
    }
}
