//! Guidance Engine facade
//!
//! Ties the scorer, the checklist store, and the recommendation/insight
//! engines together behind the narrow API the host (UI, API layer) consumes.
//! One instance per session or tenant; all state is explicit and in-memory,
//! with no locking (the host serializes access). A new `run_diagnostic`
//! supersedes everything held by the previous run.

use crate::checklist::{self, ChecklistStore};
use crate::diagnostic::{self, DiagnosticInput};
use crate::error::Result;
use crate::insight::InsightEngine;
use crate::maturity::{self, MaturityLevel};
use crate::recommend::RecommendationEngine;
use crate::types::{
    ComplianceCategory, ComplianceStatus, Diagnostic, Insight, Recommendation,
};
use tracing::info;

/// Session-scoped guidance engine
///
/// Owns at most one current diagnostic plus the live checklist,
/// recommendation, and insight sets derived from it.
#[derive(Debug, Clone, Default)]
pub struct GuidanceEngine {
    diagnostic: Option<Diagnostic>,
    checklist: ChecklistStore,
    recommendations: RecommendationEngine,
    insights: InsightEngine,
}

impl GuidanceEngine {
    /// Create an engine with no diagnostic yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a diagnostic, replacing all prior state
    ///
    /// Validates the input, scores it, seeds the checklist (default catalog
    /// when the input carries none), and regenerates recommendations and
    /// insights. The returned snapshot is frozen; the live sets evolve
    /// independently through the mutation methods below.
    pub fn run_diagnostic(&mut self, input: DiagnosticInput) -> Result<&Diagnostic> {
        input.validate()?;

        let checks = input
            .checks
            .clone()
            .unwrap_or_else(checklist::default_checks);

        let recommendations = self.recommendations.generate(&input.categories).to_vec();
        let diag = diagnostic::build(&input, recommendations, checks.clone())?;

        self.checklist.seed(checks);
        self.insights.generate(&diag);
        info!(diagnostic = %diag.id, "diagnostic installed");

        Ok(&*self.diagnostic.insert(diag))
    }

    /// Drop all state, returning the engine to its pre-diagnostic condition
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Set one compliance check's status (stamps `last_checked`)
    pub fn update_compliance_status(&mut self, id: &str, status: ComplianceStatus) -> Result<()> {
        self.checklist.update_status(id, status)
    }

    /// Mark one recommendation completed (idempotent)
    pub fn mark_recommendation_complete(&mut self, id: &str) -> Result<()> {
        self.recommendations.mark_complete(id)
    }

    /// Dismiss one insight (one-way)
    pub fn dismiss_insight(&mut self, id: &str) -> Result<()> {
        self.insights.dismiss(id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The current diagnostic snapshot, if one has been run
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    /// Current maturity level (level 1 before any diagnostic, as the
    /// source dashboard defaults)
    pub fn current_maturity_level(&self) -> &'static MaturityLevel {
        match &self.diagnostic {
            Some(d) => maturity::level_or_first(d.current_maturity_level),
            None => maturity::level_or_first(1),
        }
    }

    /// The level after the current one, clamped at the ceiling
    pub fn next_maturity_level(&self) -> &'static MaturityLevel {
        maturity::next_level(self.current_maturity_level().id)
    }

    /// Overall compliance score over the live checklist
    pub fn compliance_score(&self) -> u8 {
        self.checklist.compliance_score()
    }

    /// Compliance score restricted to one category
    pub fn compliance_score_by_category(&self, category: ComplianceCategory) -> u8 {
        self.checklist.score_by_category(category)
    }

    /// The live checklist in insertion order
    pub fn compliance_checks(&self) -> &[crate::types::ComplianceCheck] {
        self.checklist.items()
    }

    /// Active insights, priority descending
    pub fn active_insights(&self) -> Vec<&Insight> {
        self.insights.active()
    }

    /// Pending recommendations, priority descending
    pub fn pending_recommendations(&self) -> Vec<&Recommendation> {
        self.recommendations.pending()
    }

    /// Every recommendation regardless of status
    pub fn all_recommendations(&self) -> &[Recommendation] {
        self.recommendations.all()
    }

    /// Every insight regardless of dismissal
    pub fn all_insights(&self) -> &[Insight] {
        self.insights.all()
    }
}
