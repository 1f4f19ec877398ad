//! Diagnostic Scorer
//!
//! Validates the caller-supplied assessment input, computes the overall
//! score and maturity classification, derives strengths and weaknesses, and
//! assembles the frozen `Diagnostic` snapshot. The current maturity level is
//! an input asserted by the caller (policy/heuristic), not derived from the
//! scores; it resolves through the registry fallback so the snapshot always
//! references a valid level.

use crate::error::{GuidanceError, Result};
use crate::maturity;
use crate::types::{CategoryScores, ComplianceCheck, Diagnostic, Recommendation};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Days between a diagnostic and the next scheduled assessment
pub const ASSESSMENT_CADENCE_DAYS: i64 = 90;

/// Category score at or above which the category counts as a strength
const STRENGTH_THRESHOLD: u8 = 70;
/// Category score below which the category counts as a weakness
const WEAKNESS_THRESHOLD: u8 = 60;

/// Caller-supplied input for one diagnostic run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticInput {
    pub association_id: String,
    /// Current maturity level asserted by the caller (1..=5; invalid ids
    /// fall back to level 1)
    pub current_level: u8,
    pub categories: CategoryScores,
    /// Checklist to seed; `None` uses the default catalog
    #[serde(default)]
    pub checks: Option<Vec<ComplianceCheck>>,
    /// Assessment time; `None` uses the current time
    #[serde(default)]
    pub performed_at: Option<DateTime<Utc>>,
}

impl DiagnosticInput {
    /// Reject out-of-range category scores
    ///
    /// Missing categories are unrepresentable (struct fields), so the only
    /// input corruption left to catch is a score above 100.
    pub fn validate(&self) -> Result<()> {
        for (category, score) in self.categories.entries() {
            if score > 100 {
                return Err(GuidanceError::InvalidDiagnosticInput {
                    reason: format!("{category} score {score} exceeds 100"),
                });
            }
        }
        Ok(())
    }
}

/// Build the frozen diagnostic snapshot from validated input
///
/// `recommendations` and `checks` are the freshly generated live sets; the
/// snapshot takes copies by value, so later mutations of the live stores
/// never alter the diagnostic.
pub fn build(
    input: &DiagnosticInput,
    recommendations: Vec<Recommendation>,
    checks: Vec<ComplianceCheck>,
) -> Result<Diagnostic> {
    input.validate()?;

    let performed_at = input.performed_at.unwrap_or_else(Utc::now);
    let current = maturity::level_or_first(input.current_level);
    let target = maturity::next_level(current.id);
    let overall_score = input.categories.mean();

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (category, score) in input.categories.entries() {
        if score >= STRENGTH_THRESHOLD {
            strengths.push(strength_line(category));
        } else if score < WEAKNESS_THRESHOLD {
            weaknesses.push(weakness_line(category));
        }
    }

    info!(
        association = %input.association_id,
        overall = overall_score,
        level = current.id,
        "diagnostic performed"
    );

    Ok(Diagnostic {
        id: format!("diag_{}", performed_at.timestamp()),
        association_id: input.association_id.clone(),
        performed_at,
        current_maturity_level: current.id,
        target_maturity_level: target.id,
        overall_score,
        categories: input.categories,
        strengths,
        weaknesses,
        recommendations,
        compliance_checks: checks,
        next_assessment_date: performed_at + Duration::days(ASSESSMENT_CADENCE_DAYS),
    })
}

fn strength_line(category: &str) -> String {
    match category {
        "governance" => "Committed and capable leadership team".to_string(),
        "operations" => "Regular, well-run activities".to_string(),
        "compliance" => "Solid track record on obligations".to_string(),
        "performance" => "Good relations with members and steady results".to_string(),
        other => format!("Strong {other} practices"),
    }
}

fn weakness_line(category: &str) -> String {
    match category {
        "governance" => "Administrative documentation incomplete".to_string(),
        "operations" => "Internal communication needs improvement".to_string(),
        "compliance" => "Compliance items left unaddressed".to_string(),
        "performance" => "Financial processes need to be formalized".to_string(),
        other => format!("Weak {other} practices"),
    }
}
