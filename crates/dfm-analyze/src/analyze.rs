//! Design-for-Manufacturability analysis.
//!
//! This module runs a part descriptor through ten fixed manufacturability
//! checks and aggregates the outcomes into a [`DfmReport`]: per-check
//! results, an overall score, a qualitative rating, and remediation
//! recommendations.
//!
//! The analysis is a pure function: no I/O, no randomness, no shared
//! state. Calling it twice with the same input yields the same report,
//! and concurrent calls are independent.
//!
//! Several checks are deliberate approximations standing in for true
//! geometric analysis — the shell count is inferred from geometry
//! presence, the void heuristic compares volume against surface area,
//! and wall thickness is estimated from the smallest bounding-box
//! extent. Downstream consumers depend on these exact formulas; do not
//! substitute higher-fidelity versions without coordinating a scoring
//! change.
//!
//! # Example
//!
//! ```
//! use dfm_analyze::{analyze_part, BoundingBox, GeometrySummary, PartDescriptor};
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
//! let report = analyze_part(&part);
//! assert_eq!(report.checks.len(), 10);
//! assert_eq!(report.overall_score, 100);
//! ```

use tracing::{debug, warn};

use crate::error::DfmResult;
use crate::limits::{self, MachineLimits, DEFAULT_BOUNDING_BOX, SUPPORTED_FILE_TYPES};
use crate::report::{CheckResult, CheckStatus, DfmReport, Manufacturability};
use crate::types::PartDescriptor;

/// Wall thickness assumed when no geometry summary is available, in mm.
const NO_GEOMETRY_WALL_ESTIMATE: f64 = 2.0;

/// Tolerance assumed when the request is absent or unparseable, in mm.
const DEFAULT_TOLERANCE: f64 = 0.1;

/// Analyze a part with the default CNC machine limits.
pub fn analyze_part(part: &PartDescriptor) -> DfmReport {
    analyze_part_with_limits(part, &MachineLimits::cnc_default())
}

/// Validate the input contract, then analyze.
///
/// [`analyze_part`] is total and produces a best-effort report even for
/// contract-violating input; this variant rejects such input up front.
pub fn analyze_part_checked(part: &PartDescriptor) -> DfmResult<DfmReport> {
    part.validate()?;
    Ok(analyze_part(part))
}

/// Analyze a part against specific machine limits.
pub fn analyze_part_with_limits(part: &PartDescriptor, limits: &MachineLimits) -> DfmReport {
    debug!("running DFM analysis for {}", part.file_name);

    let mut checks: Vec<CheckResult> = Vec::with_capacity(10);
    let mut recommendations: Vec<String> = Vec::new();
    let mut estimated_issues = 0usize;

    // Shared inputs. Without real multi-body detection the shell count is
    // inferred from geometry presence: one shell when a summary exists,
    // zero (analysis pending) when it doesn't.
    let shell_count: usize = if part.geometry.is_some() { 1 } else { 0 };
    let bbox = part
        .geometry
        .map(|g| g.bounding_box)
        .unwrap_or(DEFAULT_BOUNDING_BOX);
    let max_dim = bbox.max_dim();
    let min_dim = bbox.min_dim();

    // 1. File type
    let ext = file_extension(&part.file_name);
    let supported = SUPPORTED_FILE_TYPES.contains(&ext.as_str());
    checks.push(CheckResult {
        id: "file-type",
        name: "File Type",
        description: "Verifies the file format is supported for manufacturing".to_string(),
        status: if supported {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        },
        details: if supported {
            format!("{} format is supported", ext.to_uppercase())
        } else {
            format!("{} may not be optimal. Consider STEP or STL", ext.to_uppercase())
        },
    });
    if !supported {
        estimated_issues += 1;
        recommendations
            .push("Convert your file to STEP (.step/.stp) format for best results".to_string());
    }

    // 2. Floating parts. Unreachable fail under the single-shell
    // approximation; the branch stays for when real shell counts arrive.
    let has_floating_parts = shell_count > 1;
    checks.push(CheckResult {
        id: "floating-parts",
        name: "Floating Parts Check",
        description: "Detects disconnected geometry that cannot be manufactured".to_string(),
        status: if has_floating_parts {
            CheckStatus::Fail
        } else {
            CheckStatus::Pass
        },
        details: if has_floating_parts {
            format!("{} separate bodies detected", shell_count)
        } else {
            "Single solid body detected".to_string()
        },
    });

    // 3. Large part dimension
    let (max_x, max_y, max_z) = limits.max_dimensions;
    let exceeds_envelope = bbox.x > max_x || bbox.y > max_y || bbox.z > max_z;
    checks.push(CheckResult {
        id: "large-part",
        name: "Large Part Dimension",
        description: "Checks if part fits within machine work envelope".to_string(),
        status: if exceeds_envelope {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        },
        details: if exceeds_envelope {
            format!("Max dimension {:.1}mm exceeds limit", max_dim)
        } else {
            format!(
                "Dimensions: {:.1} × {:.1} × {:.1}mm",
                bbox.x, bbox.y, bbox.z
            )
        },
    });
    if exceeds_envelope {
        estimated_issues += 1;
    }

    // 4. Model fidelity
    let geometry_validated = part.geometry.map(|g| g.volume > 0.0).unwrap_or(false);
    checks.push(CheckResult {
        id: "model-fidelity",
        name: "Model Fidelity",
        description: "Validates mesh quality and geometric integrity".to_string(),
        status: if geometry_validated {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        },
        details: if geometry_validated {
            "Geometry validated successfully".to_string()
        } else {
            "Unable to fully validate - check model quality".to_string()
        },
    });

    // 5. Shell count, informational restatement of check 2
    let (shell_status, shell_details) = match shell_count {
        1 => (CheckStatus::Pass, "Single watertight shell".to_string()),
        0 => (CheckStatus::Info, "Shell analysis pending".to_string()),
        n => (CheckStatus::Warning, format!("{} shells detected", n)),
    };
    checks.push(CheckResult {
        id: "shell-count",
        name: "Model Shell Count",
        description: "Ensures model is a single watertight solid".to_string(),
        status: shell_status,
        details: shell_details,
    });

    // 6. Finish size compatibility
    let finish_limit = limits::finish_size_limit(part.finish.as_deref());
    let exceeds_finish_size = max_dim > finish_limit;
    checks.push(CheckResult {
        id: "finish-size",
        name: "Part Exceeds Maximum Size for Finish",
        description: "Checks if part size is compatible with the selected finish".to_string(),
        status: if exceeds_finish_size {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        },
        details: if exceeds_finish_size {
            format!(
                "Part too large for {}. Max: {}mm",
                part.finish.as_deref().unwrap_or("selected finish"),
                finish_limit
            )
        } else {
            format!(
                "Compatible with {} finish",
                part.finish.as_deref().unwrap_or("standard")
            )
        },
    });
    if exceeds_finish_size {
        recommendations.push("Consider a different finish option for large parts".to_string());
    }

    // 7. Void heuristic: volume below surface area times the minimum wall
    // thickness suggests internal cavities. A crude proxy, not detection.
    let has_internal_voids = part
        .geometry
        .map(|g| g.volume < g.surface_area * limits.min_wall_thickness)
        .unwrap_or(false);
    checks.push(CheckResult {
        id: "void-check",
        name: "Void Check",
        description: "Detects internal voids that may affect manufacturing".to_string(),
        status: if has_internal_voids {
            CheckStatus::Info
        } else {
            CheckStatus::Pass
        },
        details: if has_internal_voids {
            "Internal features detected - may require special tooling".to_string()
        } else {
            "No problematic voids detected".to_string()
        },
    });

    // 8. Minimum wall thickness, estimated as 10% of the smallest extent
    let wall_estimate = if part.geometry.is_some() {
        min_dim * 0.1
    } else {
        NO_GEOMETRY_WALL_ESTIMATE
    };
    let wall_thickness_ok = wall_estimate >= limits.min_wall_thickness;
    checks.push(CheckResult {
        id: "wall-thickness",
        name: "Minimum Wall Thickness",
        description: format!(
            "Ensures walls are at least {}mm thick",
            limits.min_wall_thickness
        ),
        status: if wall_thickness_ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        },
        details: if wall_thickness_ok {
            format!("Wall thickness adequate (≥{}mm)", limits.min_wall_thickness)
        } else {
            "Thin walls detected - risk of breakage".to_string()
        },
    });
    if !wall_thickness_ok {
        estimated_issues += 1;
        recommendations.push(format!(
            "Increase wall thickness to at least {}mm for CNC machining",
            limits.min_wall_thickness
        ));
    }

    // 9. Aspect ratio
    let aspect_ratio = max_dim / min_dim;
    let aspect_ratio_ok = aspect_ratio < limits.max_aspect_ratio;
    checks.push(CheckResult {
        id: "aspect-ratio",
        name: "Aspect Ratio",
        description: "Checks for very thin/long parts that may flex during machining".to_string(),
        status: if aspect_ratio_ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        },
        details: if aspect_ratio_ok {
            format!("Aspect ratio: {:.1}:1 (acceptable)", aspect_ratio)
        } else {
            format!("High aspect ratio {:.1}:1 - may cause vibration", aspect_ratio)
        },
    });
    if !aspect_ratio_ok {
        recommendations.push("High aspect ratio parts may require special fixturing".to_string());
    }

    // 10. Tolerance achievability
    let tolerance = parse_tolerance(part.tolerance.as_deref());
    let tolerance_ok = tolerance >= limits.min_tolerance;
    checks.push(CheckResult {
        id: "tolerance",
        name: "Tolerance Achievability",
        description: "Verifies requested tolerance is achievable".to_string(),
        status: if tolerance_ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        },
        details: if tolerance_ok {
            format!("±{}mm is achievable", tolerance)
        } else {
            format!("±{}mm may require grinding or EDM", tolerance)
        },
    });

    for check in &checks {
        if check.status == CheckStatus::Fail {
            warn!("{} check failed: {}", check.name, check.details);
        }
    }

    let pass_count = checks.iter().filter(|c| c.status == CheckStatus::Pass).count();
    let warning_count = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();
    let fail_count = checks.iter().filter(|c| c.status == CheckStatus::Fail).count();

    // Each pass earns full weight, each warning half; fail and info earn
    // nothing. Fails carry no extra penalty here because the rating below
    // already forces them to poor.
    let overall_score = (((pass_count * 10 + warning_count * 5) as f64
        / (checks.len() * 10) as f64)
        * 100.0)
        .round() as u32;

    let manufacturability = if fail_count > 0 {
        Manufacturability::Poor
    } else if warning_count > 2 {
        Manufacturability::Fair
    } else if warning_count > 0 {
        Manufacturability::Good
    } else {
        Manufacturability::Excellent
    };

    debug!(
        "DFM analysis complete for {}: {}/100 ({}), {} issue(s)",
        part.file_name, overall_score, manufacturability, estimated_issues
    );

    DfmReport {
        overall_score,
        manufacturability,
        checks,
        recommendations,
        estimated_issues,
    }
}

/// Lower-cased substring after the last `.` of the file name.
///
/// A name with no dot yields the whole name, which then fails the
/// whitelist lookup rather than being treated specially.
fn file_extension(file_name: &str) -> String {
    file_name.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Parse the numeric part of a tolerance string such as `"±0.05mm"`.
///
/// Strips everything except digits and decimal points; anything that
/// still fails to parse falls back to [`DEFAULT_TOLERANCE`].
fn parse_tolerance(tolerance: Option<&str>) -> f64 {
    let digits: String = tolerance
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse().unwrap_or(DEFAULT_TOLERANCE)
}

impl PartDescriptor {
    /// Analyze this part with the default CNC machine limits.
    pub fn analyze(&self) -> DfmReport {
        analyze_part(self)
    }

    /// Analyze this part against specific machine limits.
    pub fn analyze_with_limits(&self, limits: &MachineLimits) -> DfmReport {
        analyze_part_with_limits(self, limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, GeometrySummary};
    use approx::assert_relative_eq;

    /// A part every check is happy with.
    fn clean_part() -> PartDescriptor {
        PartDescriptor::new("bracket.step")
            .with_geometry(GeometrySummary::new(
                BoundingBox::new(120.0, 80.0, 40.0),
                180_000.0,
                52_000.0,
            ))
            .with_finish("anodize")
            .with_tolerance("±0.05mm")
    }

    fn statuses(report: &DfmReport) -> Vec<CheckStatus> {
        report.checks.iter().map(|c| c.status).collect()
    }

    #[test]
    fn test_clean_part_is_excellent() {
        let report = analyze_part(&clean_part());

        assert_eq!(report.overall_score, 100);
        assert_eq!(report.manufacturability, Manufacturability::Excellent);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.estimated_issues, 0);
        assert!(statuses(&report).iter().all(|s| *s == CheckStatus::Pass));
    }

    #[test]
    fn test_checks_keep_fixed_rule_order() {
        let report = analyze_part(&clean_part());
        let ids: Vec<&str> = report.checks.iter().map(|c| c.id).collect();

        assert_eq!(
            ids,
            vec![
                "file-type",
                "floating-parts",
                "large-part",
                "model-fidelity",
                "shell-count",
                "finish-size",
                "void-check",
                "wall-thickness",
                "aspect-ratio",
                "tolerance",
            ]
        );
    }

    #[test]
    fn test_unsupported_file_type_fails_and_forces_poor() {
        let report = analyze_part(&PartDescriptor::new("drawing.xyz"));

        let file_check = &report.checks[0];
        assert_eq!(file_check.status, CheckStatus::Fail);
        assert_eq!(file_check.details, "XYZ may not be optimal. Consider STEP or STL");

        // One fail forces poor regardless of the other nine checks.
        assert_eq!(report.manufacturability, Manufacturability::Poor);
        assert_eq!(report.estimated_issues, 1);
        assert_eq!(
            report.recommendations,
            vec!["Convert your file to STEP (.step/.stp) format for best results"]
        );
    }

    #[test]
    fn test_file_name_without_extension_fails_whitelist() {
        let report = analyze_part(&PartDescriptor::new("bracket"));
        assert_eq!(report.checks[0].status, CheckStatus::Fail);
        assert_eq!(
            report.checks[0].details,
            "BRACKET may not be optimal. Consider STEP or STL"
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let report = analyze_part(&PartDescriptor::new("bracket.STEP"));
        assert_eq!(report.checks[0].status, CheckStatus::Pass);
        assert_eq!(report.checks[0].details, "STEP format is supported");
    }

    #[test]
    fn test_missing_geometry_uses_default_bounding_box() {
        let report = analyze_part(&PartDescriptor::new("bracket.step"));

        let dimension_check = &report.checks[2];
        assert_eq!(dimension_check.status, CheckStatus::Pass);
        assert_eq!(dimension_check.details, "Dimensions: 100.0 × 100.0 × 50.0mm");

        // No geometry: fidelity warns, shell count is pending.
        assert_eq!(report.checks[3].status, CheckStatus::Warning);
        assert_eq!(report.checks[4].status, CheckStatus::Info);
        assert_eq!(report.checks[4].details, "Shell analysis pending");

        // The fallback wall estimate (2.0mm) passes the 0.8mm minimum.
        assert_eq!(report.checks[7].status, CheckStatus::Pass);
    }

    #[test]
    fn test_oversized_part_warns_and_counts_issue() {
        let part = PartDescriptor::new("plate.step").with_geometry(GeometrySummary::new(
            BoundingBox::new(1200.0, 400.0, 300.0),
            5_000_000.0,
            900_000.0,
        ));
        let report = analyze_part(&part);

        let dimension_check = &report.checks[2];
        assert_eq!(dimension_check.status, CheckStatus::Warning);
        assert_eq!(dimension_check.details, "Max dimension 1200.0mm exceeds limit");
        assert_eq!(report.estimated_issues, 1);

        // Oversize is a warning, never a fail.
        assert_eq!(report.fail_count(), 0);
    }

    #[test]
    fn test_envelope_is_checked_per_axis() {
        // 600mm fits the X limit but exceeds the 500mm Y limit.
        let part = PartDescriptor::new("plate.step").with_geometry(GeometrySummary::new(
            BoundingBox::new(400.0, 600.0, 100.0),
            2_000_000.0,
            500_000.0,
        ));
        let report = analyze_part(&part);
        assert_eq!(report.checks[2].status, CheckStatus::Warning);
    }

    #[test]
    fn test_zero_volume_geometry_warns_fidelity() {
        let part = PartDescriptor::new("shell.stl").with_geometry(GeometrySummary::new(
            BoundingBox::new(100.0, 100.0, 50.0),
            0.0,
            60_000.0,
        ));
        let report = analyze_part(&part);

        assert_eq!(report.checks[3].status, CheckStatus::Warning);
        // Geometry is present, so the shell count still reads as one.
        assert_eq!(report.checks[4].status, CheckStatus::Pass);
    }

    #[test]
    fn test_finish_size_warning_adds_one_recommendation() {
        let part = PartDescriptor::new("rail.step")
            .with_geometry(GeometrySummary::new(
                BoundingBox::new(350.0, 100.0, 100.0),
                3_000_000.0,
                300_000.0,
            ))
            .with_finish("Chrome");
        let report = analyze_part(&part);

        let finish_check = &report.checks[5];
        assert_eq!(finish_check.status, CheckStatus::Warning);
        assert_eq!(finish_check.details, "Part too large for Chrome. Max: 300mm");
        assert_eq!(
            report.recommendations,
            vec!["Consider a different finish option for large parts"]
        );

        // Finish-size warnings are not part of the curated issue count.
        assert_eq!(report.estimated_issues, 0);
    }

    #[test]
    fn test_void_heuristic_flags_info() {
        // volume < surface_area * 0.8 trips the heuristic.
        let part = PartDescriptor::new("lattice.stl").with_geometry(GeometrySummary::new(
            BoundingBox::new(100.0, 100.0, 50.0),
            30_000.0,
            60_000.0,
        ));
        let report = analyze_part(&part);

        let void_check = &report.checks[6];
        assert_eq!(void_check.status, CheckStatus::Info);
        assert_eq!(
            void_check.details,
            "Internal features detected - may require special tooling"
        );
        // Informational only: no recommendation, no issue.
        assert_eq!(report.estimated_issues, 0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_thin_walls_warn_with_recommendation_and_issue() {
        // Smallest extent 5mm -> estimated wall 0.5mm, below the 0.8mm floor.
        let part = PartDescriptor::new("blade.step").with_geometry(GeometrySummary::new(
            BoundingBox::new(40.0, 20.0, 5.0),
            3_500.0,
            2_000.0,
        ));
        let report = analyze_part(&part);

        assert_eq!(report.checks[7].status, CheckStatus::Warning);
        assert_eq!(report.checks[7].details, "Thin walls detected - risk of breakage");
        assert!(report
            .recommendations
            .contains(&"Increase wall thickness to at least 0.8mm for CNC machining".to_string()));
        assert_eq!(report.estimated_issues, 1);
    }

    #[test]
    fn test_high_aspect_ratio_warns_without_issue() {
        // 240/20 = 12:1, past the 10:1 limit.
        let part = PartDescriptor::new("rod.step").with_geometry(GeometrySummary::new(
            BoundingBox::new(240.0, 20.0, 20.0),
            90_000.0,
            32_000.0,
        ));
        let report = analyze_part(&part);

        let aspect_check = &report.checks[8];
        assert_eq!(aspect_check.status, CheckStatus::Warning);
        assert_eq!(aspect_check.details, "High aspect ratio 12.0:1 - may cause vibration");
        assert!(report
            .recommendations
            .contains(&"High aspect ratio parts may require special fixturing".to_string()));
        assert_eq!(report.estimated_issues, 0);
    }

    #[test]
    fn test_tight_tolerance_warns() {
        let part = clean_part().with_tolerance("±0.01mm");
        let report = analyze_part(&part);

        let tolerance_check = &report.checks[9];
        assert_eq!(tolerance_check.status, CheckStatus::Warning);
        assert_eq!(tolerance_check.details, "±0.01mm may require grinding or EDM");
    }

    #[test]
    fn test_absent_tolerance_defaults_to_achievable() {
        let report = analyze_part(&PartDescriptor::new("bracket.step"));

        let tolerance_check = &report.checks[9];
        assert_eq!(tolerance_check.status, CheckStatus::Pass);
        assert_eq!(tolerance_check.details, "±0.1mm is achievable");
    }

    #[test]
    fn test_parse_tolerance() {
        assert_relative_eq!(parse_tolerance(Some("±0.05mm")), 0.05);
        assert_relative_eq!(parse_tolerance(Some("0.025 mm")), 0.025);
        assert_relative_eq!(parse_tolerance(Some("+/- .5")), 0.5);
        // Absent or unparseable input falls back to the 0.1mm default.
        assert_relative_eq!(parse_tolerance(None), 0.1);
        assert_relative_eq!(parse_tolerance(Some("tight")), 0.1);
        assert_relative_eq!(parse_tolerance(Some("0..5")), 0.1);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("bracket.STEP"), "step");
        assert_eq!(file_extension("part.tar.gz"), "gz");
        assert_eq!(file_extension("noextension"), "noextension");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_score_formula_with_mixed_statuses() {
        // bad extension (fail) + chrome over 300mm (warning) + thin wall
        // (warning) + high aspect ratio (warning) + void info; passes are
        // checks 2, 3, 4, 5, 10.
        let part = PartDescriptor::new("drawing.xyz")
            .with_geometry(GeometrySummary::new(
                BoundingBox::new(350.0, 4.0, 4.0),
                1_000.0,
                5_000.0,
            ))
            .with_finish("chrome");
        let report = analyze_part(&part);

        assert_eq!(report.pass_count(), 5);
        assert_eq!(report.warning_count(), 3);
        assert_eq!(report.fail_count(), 1);
        assert_eq!(report.info_count(), 1);

        // round(100 * (10*5 + 5*3) / 100) = 65
        assert_eq!(report.overall_score, 65);
        assert_eq!(report.manufacturability, Manufacturability::Poor);
        // Issues counted at checks 1 and 8 only.
        assert_eq!(report.estimated_issues, 2);
    }

    #[test]
    fn test_recommendations_follow_rule_order() {
        // Triggers the four recommendation-emitting checks at once.
        let part = PartDescriptor::new("drawing.xyz")
            .with_geometry(GeometrySummary::new(
                BoundingBox::new(350.0, 4.0, 4.0),
                1_000.0,
                5_000.0,
            ))
            .with_finish("chrome");
        let report = analyze_part(&part);

        assert_eq!(
            report.recommendations,
            vec![
                "Convert your file to STEP (.step/.stp) format for best results",
                "Consider a different finish option for large parts",
                "Increase wall thickness to at least 0.8mm for CNC machining",
                "High aspect ratio parts may require special fixturing",
            ]
        );
    }

    #[test]
    fn test_rating_precedence() {
        // 1-2 warnings -> good
        let one_warning = clean_part().with_tolerance("±0.01mm");
        assert_eq!(
            analyze_part(&one_warning).manufacturability,
            Manufacturability::Good
        );

        // >2 warnings, no fails -> fair
        let part = PartDescriptor::new("rod.step")
            .with_geometry(GeometrySummary::new(
                BoundingBox::new(350.0, 4.0, 4.0),
                1_000.0,
                5_000.0,
            ))
            .with_finish("chrome");
        let report = analyze_part(&part);
        assert_eq!(report.fail_count(), 0);
        assert!(report.warning_count() > 2);
        assert_eq!(report.manufacturability, Manufacturability::Fair);
    }

    #[test]
    fn test_analysis_is_pure() {
        let part = clean_part().with_tolerance("±0.01mm");
        let first = analyze_part(&part);
        let second = analyze_part(&part);

        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn test_checked_analysis_rejects_bad_input() {
        assert!(analyze_part_checked(&PartDescriptor::new("")).is_err());
        assert!(analyze_part_checked(&clean_part()).is_ok());
    }

    #[test]
    fn test_custom_limits_flow_through() {
        let mut limits = MachineLimits::cnc_default();
        limits.min_wall_thickness = 5.0;

        // Smallest extent 40mm -> 4.0mm estimate, below the raised floor.
        let report = analyze_part_with_limits(&clean_part(), &limits);
        assert_eq!(report.checks[7].status, CheckStatus::Warning);
        assert!(report
            .recommendations
            .contains(&"Increase wall thickness to at least 5mm for CNC machining".to_string()));
    }

    #[test]
    fn test_descriptor_analyze_method() {
        let report = clean_part().analyze();
        assert_eq!(report.overall_score, 100);
    }
}
