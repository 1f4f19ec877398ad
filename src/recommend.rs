//! Recommendation Engine
//!
//! Generates prioritized recommendations from the diagnostic category scores
//! via a deterministic score-band rule table, then tracks their lifecycle
//! (pending / in_progress / completed / dismissed). Completed and dismissed
//! items drop out of the `pending()` view but stay addressable by id.
//!
//! Rule table: score < 60 -> High priority, 60..75 -> Medium, 75..85 -> Low,
//! >= 85 -> no recommendation for that category. One template per category,
//! with a stable slug id, so generation is reproducible and testable.

use crate::error::{GuidanceError, Result};
use crate::types::{
    CategoryScores, Recommendation, RecommendationPriority, RecommendationStatus,
};
use tracing::{debug, info};

/// Score below which a category gets a High priority recommendation
const HIGH_BAND: u8 = 60;
/// Score below which a category gets a Medium priority recommendation
const MEDIUM_BAND: u8 = 75;
/// Score below which a category gets a Low priority recommendation
const LOW_BAND: u8 = 85;

/// In-memory store for the live recommendation set
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    records: Vec<Recommendation>,
}

impl RecommendationEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the live set from category scores, replacing any prior set
    ///
    /// Recommendations come out in category order (governance, operations,
    /// compliance, performance); `pending()` applies the priority sort.
    pub fn generate(&mut self, scores: &CategoryScores) -> &[Recommendation] {
        self.records = scores
            .entries()
            .iter()
            .filter_map(|&(category, score)| {
                priority_for_score(score).map(|priority| template(category, priority))
            })
            .collect();
        info!(count = self.records.len(), "recommendations generated");
        &self.records
    }

    /// Mark a recommendation completed
    ///
    /// Idempotent: completing an already-completed item is a no-op. Unknown
    /// ids fail with `NotFound` and mutate nothing.
    pub fn mark_complete(&mut self, id: &str) -> Result<()> {
        let rec = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GuidanceError::not_found("recommendation", id))?;

        rec.status = RecommendationStatus::Completed;
        debug!(recommendation = id, "recommendation completed");
        Ok(())
    }

    /// Pending recommendations, priority descending, insertion order on ties
    ///
    /// `sort_by` is stable, so equal priorities keep their generation order
    /// across every call.
    pub fn pending(&self) -> Vec<&Recommendation> {
        let mut view: Vec<&Recommendation> = self
            .records
            .iter()
            .filter(|r| r.status == RecommendationStatus::Pending)
            .collect();
        view.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        view
    }

    /// Every recommendation regardless of status, in generation order
    pub fn all(&self) -> &[Recommendation] {
        &self.records
    }

    /// Look up one recommendation by id
    pub fn get(&self, id: &str) -> Option<&Recommendation> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Band rule mapping a category score to a priority (None above the bands)
fn priority_for_score(score: u8) -> Option<RecommendationPriority> {
    match score {
        s if s < HIGH_BAND => Some(RecommendationPriority::High),
        s if s < MEDIUM_BAND => Some(RecommendationPriority::Medium),
        s if s < LOW_BAND => Some(RecommendationPriority::Low),
        _ => None,
    }
}

/// Templated recommendation for a weak category
fn template(category: &'static str, priority: RecommendationPriority) -> Recommendation {
    let (title, description, action_steps, estimated_duration, resources, impact) = match category
    {
        "governance" => (
            "Finalize the internal rules",
            "Complete internal rules clarify decision processes and strengthen governance.",
            vec![
                "Hold a working session with the board",
                "Draft the rules from the template",
                "Submit the draft to the general assembly",
                "Vote and adopt the final rules",
            ],
            "2-3 weeks",
            vec![
                "Internal rules template",
                "Methodology guide",
                "Sector examples",
            ],
            "Significant improvement of internal governance",
        ),
        "operations" => (
            "Formalize operating procedures",
            "Documented procedures make day-to-day operations repeatable and transferable.",
            vec![
                "Inventory recurring activities",
                "Write one procedure sheet per activity",
                "Assign an owner to each procedure",
                "Review procedures quarterly",
            ],
            "1 month",
            vec![
                "Procedure sheet template",
                "Operations handbook",
            ],
            "Repeatable operations and easier handovers",
        ),
        "compliance" => (
            "Close the compliance gaps",
            "Open compliance items expose the association to legal and financial risk.",
            vec![
                "Review the checklist items still pending or non-compliant",
                "Prioritize the required items",
                "Assign each item to a board member with a due date",
                "Re-run the checklist after remediation",
            ],
            "3-4 weeks",
            vec![
                "Compliance checklist",
                "Legal reference guide",
            ],
            "Reduced legal exposure and audit readiness",
        ),
        "performance" => (
            "Set up performance tracking",
            "Regular indicators let the association steer activities and report impact.",
            vec![
                "Define income and expense categories",
                "Set up a monthly tracking table",
                "Train the treasurer on the tools",
                "Establish quarterly checkpoints",
            ],
            "1 month",
            vec![
                "Budget template",
                "Financial tracking tools",
                "Online training",
            ],
            "Better financial control and transparency",
        ),
        other => (
            "Strengthen this area",
            "This category scored below the expected threshold.",
            vec!["Review the category findings with the board"],
            "2 weeks",
            vec![],
            other,
        ),
    };

    Recommendation {
        id: format!("rec_{category}"),
        priority,
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        action_steps: action_steps.into_iter().map(String::from).collect(),
        estimated_duration: estimated_duration.to_string(),
        resources: resources.into_iter().map(String::from).collect(),
        impact: impact.to_string(),
        status: RecommendationStatus::Pending,
    }
}
