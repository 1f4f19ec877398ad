//! Insight Engine
//!
//! Derives ranked, typed insights from a diagnostic through a deterministic
//! rule table, then tracks dismissals. Dismissal is one-way: dismissed
//! insights leave the `active()` view but are retained as an audit trail.
//!
//! Rule table (priority in parentheses):
//! - required check with a deadline within 45 days of the diagnostic -> Warning (9)
//! - category score below 50 -> Warning (8)
//! - maturity level >= 2 -> Opportunity: regional grant eligibility (8)
//! - maturity level <= 3 -> Suggestion: officer training (6)
//! - category score >= 85 -> Achievement (5)
//!
//! `created_at` is the diagnostic's `performed_at`, so generation is
//! reproducible for a given input.

use crate::error::{GuidanceError, Result};
use crate::types::{Diagnostic, Insight, InsightKind};
use chrono::Duration;
use tracing::{debug, info};

/// Days ahead within which a required check's deadline raises a warning
const DEADLINE_WINDOW_DAYS: i64 = 45;
/// Category score below this raises a weak-category warning
const WEAK_CATEGORY_THRESHOLD: u8 = 50;
/// Category score at or above this earns an achievement
const STRONG_CATEGORY_THRESHOLD: u8 = 85;
/// Minimum maturity level for the grant-eligibility opportunity
const GRANT_ELIGIBILITY_LEVEL: u8 = 2;
/// Maximum maturity level at which officer training is suggested
const TRAINING_SUGGESTION_LEVEL: u8 = 3;

/// In-memory store for the live insight set
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    records: Vec<Insight>,
}

impl InsightEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the live set from a diagnostic, replacing any prior set
    pub fn generate(&mut self, diagnostic: &Diagnostic) -> &[Insight] {
        let mut insights = Vec::new();
        let created_at = diagnostic.performed_at;
        let horizon = created_at + Duration::days(DEADLINE_WINDOW_DAYS);

        // Deadline warnings, one per required check due inside the window
        for check in &diagnostic.compliance_checks {
            let Some(deadline) = check.next_deadline else {
                continue;
            };
            if check.required && deadline >= created_at && deadline <= horizon {
                insights.push(Insight {
                    id: format!("insight_deadline_{}", check.id),
                    kind: InsightKind::Warning,
                    title: format!("Deadline approaching: {}", check.title),
                    description: format!(
                        "\"{}\" is due by {}.",
                        check.title,
                        deadline.format("%Y-%m-%d")
                    ),
                    category: check.category.label().to_string(),
                    priority: 9,
                    actionable: true,
                    actions: Some(vec![
                        "Set a date with the board".to_string(),
                        "Prepare the supporting documents".to_string(),
                        "Notify the members within the statutory notice period".to_string(),
                    ]),
                    created_at,
                    dismissed: false,
                });
            }
        }

        // Weak category warnings
        for (category, score) in diagnostic.categories.entries() {
            if score < WEAK_CATEGORY_THRESHOLD {
                insights.push(Insight {
                    id: format!("insight_weak_{category}"),
                    kind: InsightKind::Warning,
                    title: format!("Weak {category} score"),
                    description: format!(
                        "The {category} score ({score}/100) is below the attention threshold."
                    ),
                    category: category.to_string(),
                    priority: 8,
                    actionable: true,
                    actions: Some(vec![
                        "Review the category findings with the board".to_string(),
                        "Pick the matching recommendation as a starting point".to_string(),
                    ]),
                    created_at,
                    dismissed: false,
                });
            }
        }

        // Grant eligibility opportunity
        if diagnostic.current_maturity_level >= GRANT_ELIGIBILITY_LEVEL {
            insights.push(Insight {
                id: "insight_grant_eligibility".to_string(),
                kind: InsightKind::Opportunity,
                title: "Eligible for regional development grants".to_string(),
                description:
                    "Your maturity level makes you eligible for regional associative development grants."
                        .to_string(),
                category: "Funding".to_string(),
                priority: 8,
                actionable: true,
                actions: Some(vec![
                    "Check the call-for-projects calendar".to_string(),
                    "Prepare an application file".to_string(),
                    "Contact the regional associative liaison".to_string(),
                ]),
                created_at,
                dismissed: false,
            });
        }

        // Officer training suggestion
        if diagnostic.current_maturity_level <= TRAINING_SUGGESTION_LEVEL {
            insights.push(Insight {
                id: "insight_officer_training".to_string(),
                kind: InsightKind::Suggestion,
                title: "Officer training available".to_string(),
                description:
                    "A free training on modern association management is offered by the department."
                        .to_string(),
                category: "Training".to_string(),
                priority: 6,
                actionable: true,
                actions: Some(vec![
                    "Register for the training".to_string(),
                    "Identify priority participants".to_string(),
                    "Plan how to apply what is learned".to_string(),
                ]),
                created_at,
                dismissed: false,
            });
        }

        // Strong category achievements
        for (category, score) in diagnostic.categories.entries() {
            if score >= STRONG_CATEGORY_THRESHOLD {
                insights.push(Insight {
                    id: format!("insight_strong_{category}"),
                    kind: InsightKind::Achievement,
                    title: format!("Strong {category} score"),
                    description: format!(
                        "The {category} score ({score}/100) stands out. Keep it up."
                    ),
                    category: category.to_string(),
                    priority: 5,
                    actionable: false,
                    actions: None,
                    created_at,
                    dismissed: false,
                });
            }
        }

        info!(count = insights.len(), "insights generated");
        self.records = insights;
        &self.records
    }

    /// Dismiss an insight (one-way; no undo is exposed)
    ///
    /// Idempotent: dismissing an already-dismissed insight is a no-op.
    /// Unknown ids fail with `NotFound` and touch nothing.
    pub fn dismiss(&mut self, id: &str) -> Result<()> {
        let insight = self
            .records
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| GuidanceError::not_found("insight", id))?;

        insight.dismissed = true;
        debug!(insight = id, "insight dismissed");
        Ok(())
    }

    /// Active insights: not dismissed, priority descending, ties broken by
    /// `created_at` ascending then generation order (stable sort)
    pub fn active(&self) -> Vec<&Insight> {
        let mut view: Vec<&Insight> = self.records.iter().filter(|i| !i.dismissed).collect();
        view.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.created_at.cmp(&b.created_at))
        });
        view
    }

    /// Every insight regardless of dismissal, in generation order
    pub fn all(&self) -> &[Insight] {
        &self.records
    }

    /// Look up one insight by id
    pub fn get(&self, id: &str) -> Option<&Insight> {
        self.records.iter().find(|i| i.id == id)
    }
}
