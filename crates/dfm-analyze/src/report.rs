//! Report types produced by DFM analysis.

/// Outcome of a single manufacturability check.
///
/// There is no loading/pending variant: that is a transient display state
/// owned by whatever UI renders the report, never part of a completed
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// The check passed.
    Pass,
    /// The check found a concern that does not block manufacturing.
    Warning,
    /// The check found a blocking problem.
    Fail,
    /// Informational finding, neither pass nor problem.
    Info,
}

impl CheckStatus {
    /// Stable lower-case string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Fail => "fail",
            CheckStatus::Info => "info",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative manufacturability rating for the whole part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturability {
    /// Every check passed (informational findings allowed).
    Excellent,
    /// One or two warnings.
    Good,
    /// More than two warnings.
    Fair,
    /// At least one check failed outright.
    Poor,
}

impl Manufacturability {
    /// Stable lower-case string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Manufacturability::Excellent => "excellent",
            Manufacturability::Good => "good",
            Manufacturability::Fair => "fair",
            Manufacturability::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Manufacturability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one manufacturability check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Stable identifier, unique per rule (e.g. `"wall-thickness"`).
    pub id: &'static str,

    /// Human-readable rule name.
    pub name: &'static str,

    /// What the rule verifies.
    pub description: String,

    /// Outcome of this evaluation.
    pub status: CheckStatus,

    /// Explanation specific to this evaluation's inputs.
    pub details: String,
}

/// Complete manufacturability report for one part.
///
/// Produced fresh by every analysis call; immutable once returned. The
/// `checks` sequence always holds one entry per rule in the fixed rule
/// order.
#[derive(Debug, Clone)]
pub struct DfmReport {
    /// Overall score in [0, 100].
    pub overall_score: u32,

    /// Qualitative rating derived from the check statuses.
    pub manufacturability: Manufacturability,

    /// One result per rule, in fixed rule order.
    pub checks: Vec<CheckResult>,

    /// Remediation advice, in rule evaluation order. May be empty.
    pub recommendations: Vec<String>,

    /// Count of findings that materially block manufacturability. A
    /// curated subset of the serious rules, not every non-pass check.
    pub estimated_issues: usize,
}

impl DfmReport {
    /// Number of checks with the given status.
    pub fn status_count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Number of passed checks.
    pub fn pass_count(&self) -> usize {
        self.status_count(CheckStatus::Pass)
    }

    /// Number of warning checks.
    pub fn warning_count(&self) -> usize {
        self.status_count(CheckStatus::Warning)
    }

    /// Number of failed checks.
    pub fn fail_count(&self) -> usize {
        self.status_count(CheckStatus::Fail)
    }

    /// Number of informational checks.
    pub fn info_count(&self) -> usize {
        self.status_count(CheckStatus::Info)
    }

    /// Whether the part can be manufactured as uploaded.
    ///
    /// Anything short of a `poor` rating is considered manufacturable;
    /// warnings indicate risk, not rejection.
    pub fn is_manufacturable(&self) -> bool {
        self.manufacturability != Manufacturability::Poor
    }
}

impl std::fmt::Display for DfmReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DFM Report:")?;
        writeln!(f, "  Score: {}/100", self.overall_score)?;
        writeln!(f, "  Manufacturability: {}", self.manufacturability)?;
        writeln!(
            f,
            "  Checks: {} pass, {} warning, {} fail, {} info",
            self.pass_count(),
            self.warning_count(),
            self.fail_count(),
            self.info_count()
        )?;

        for check in &self.checks {
            writeln!(f, "  [{}] {}: {}", check.status, check.name, check.details)?;
        }

        if !self.recommendations.is_empty() {
            writeln!(f, "  Recommendations:")?;
            for recommendation in &self.recommendations {
                writeln!(f, "    - {}", recommendation)?;
            }
        }

        writeln!(f, "  Estimated issues: {}", self.estimated_issues)?;

        Ok(())
    }
}
