//! Core data model for the guidance engine
//!
//! Closed status/category enums plus the plain record types shared by the
//! checklist store, the recommendation engine, and the insight engine.
//! Status fields are enums rather than strings; the string boundary lives
//! in the `FromStr` impls, which reject unknown values with
//! [`GuidanceError::InvalidStatus`].

use crate::error::GuidanceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Compliance check category (fixed closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    Legal,
    Governance,
    Financial,
    Operational,
}

impl ComplianceCategory {
    /// All categories, in catalog order
    pub const ALL: [ComplianceCategory; 4] = [
        ComplianceCategory::Legal,
        ComplianceCategory::Governance,
        ComplianceCategory::Financial,
        ComplianceCategory::Operational,
    ];

    /// Human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceCategory::Legal => "Legal Compliance",
            ComplianceCategory::Governance => "Governance",
            ComplianceCategory::Financial => "Financial Management",
            ComplianceCategory::Operational => "Operations",
        }
    }

    /// Short description of what the category covers
    pub fn description(&self) -> &'static str {
        match self {
            ComplianceCategory::Legal => "Statutory and regulatory obligations",
            ComplianceCategory::Governance => "Governance structure and decision processes",
            ComplianceCategory::Financial => "Financial transparency and rigor",
            ComplianceCategory::Operational => "Operational effectiveness and service quality",
        }
    }
}

impl std::fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceCategory::Legal => write!(f, "legal"),
            ComplianceCategory::Governance => write!(f, "governance"),
            ComplianceCategory::Financial => write!(f, "financial"),
            ComplianceCategory::Operational => write!(f, "operational"),
        }
    }
}

impl FromStr for ComplianceCategory {
    type Err = GuidanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legal" => Ok(ComplianceCategory::Legal),
            "governance" => Ok(ComplianceCategory::Governance),
            "financial" => Ok(ComplianceCategory::Financial),
            "operational" => Ok(ComplianceCategory::Operational),
            other => Err(GuidanceError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// Status of a single compliance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pending,
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Pending => write!(f, "pending"),
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::NonCompliant => write!(f, "non_compliant"),
            ComplianceStatus::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

impl FromStr for ComplianceStatus {
    type Err = GuidanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplianceStatus::Pending),
            "compliant" => Ok(ComplianceStatus::Compliant),
            "non_compliant" => Ok(ComplianceStatus::NonCompliant),
            "not_applicable" => Ok(ComplianceStatus::NotApplicable),
            other => Err(GuidanceError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A single auditable requirement with a mutable status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub id: String,
    pub category: ComplianceCategory,
    pub title: String,
    pub description: String,
    pub required: bool,
    pub status: ComplianceStatus,
    /// Stamped on every status mutation
    pub last_checked: Option<DateTime<Utc>>,
    /// Regulatory or internal deadline, if one applies
    pub next_deadline: Option<DateTime<Utc>>,
    /// Supporting documents attached to this check
    #[serde(default)]
    pub documents: Vec<String>,
    /// Concrete remediation steps for this check
    #[serde(default)]
    pub action_items: Vec<String>,
}

impl ComplianceCheck {
    /// Create a new check seeded as `Pending`
    pub fn new(
        id: impl Into<String>,
        category: ComplianceCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: description.into(),
            required,
            status: ComplianceStatus::Pending,
            last_checked: None,
            next_deadline: None,
            documents: Vec::new(),
            action_items: Vec::new(),
        }
    }

    /// Set a deadline on the check
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.next_deadline = Some(deadline);
        self
    }

    /// Attach action items
    pub fn with_action_items(mut self, items: Vec<String>) -> Self {
        self.action_items = items;
        self
    }
}

/// Recommendation priority (ordinal: High sorts before Medium before Low)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    /// Numeric rank used for descending-priority sorts (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            RecommendationPriority::High => 3,
            RecommendationPriority::Medium => 2,
            RecommendationPriority::Low => 1,
        }
    }
}

impl std::fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationPriority::High => write!(f, "high"),
            RecommendationPriority::Medium => write!(f, "medium"),
            RecommendationPriority::Low => write!(f, "low"),
        }
    }
}

/// Lifecycle state of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    InProgress,
    Completed,
    Dismissed,
}

impl std::fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationStatus::Pending => write!(f, "pending"),
            RecommendationStatus::InProgress => write!(f, "in_progress"),
            RecommendationStatus::Completed => write!(f, "completed"),
            RecommendationStatus::Dismissed => write!(f, "dismissed"),
        }
    }
}

impl FromStr for RecommendationStatus {
    type Err = GuidanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RecommendationStatus::Pending),
            "in_progress" => Ok(RecommendationStatus::InProgress),
            "completed" => Ok(RecommendationStatus::Completed),
            "dismissed" => Ok(RecommendationStatus::Dismissed),
            other => Err(GuidanceError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// An actionable, prioritized improvement suggestion with a lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub priority: RecommendationPriority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub action_steps: Vec<String>,
    pub estimated_duration: String,
    pub resources: Vec<String>,
    pub impact: String,
    pub status: RecommendationStatus,
}

/// Kind of insight surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Opportunity,
    Suggestion,
    Achievement,
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::Warning => write!(f, "warning"),
            InsightKind::Opportunity => write!(f, "opportunity"),
            InsightKind::Suggestion => write!(f, "suggestion"),
            InsightKind::Achievement => write!(f, "achievement"),
        }
    }
}

/// A ranked, typed observation derived from a diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Ranking weight, higher = more urgent (not an enum)
    pub priority: u8,
    pub actionable: bool,
    pub actions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub dismissed: bool,
}

/// Per-category diagnostic sub-scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub governance: u8,
    pub operations: u8,
    pub compliance: u8,
    pub performance: u8,
}

impl CategoryScores {
    /// Scores paired with their category names, in a fixed order
    pub fn entries(&self) -> [(&'static str, u8); 4] {
        [
            ("governance", self.governance),
            ("operations", self.operations),
            ("compliance", self.compliance),
            ("performance", self.performance),
        ]
    }

    /// Arithmetic mean of the four scores, rounded to nearest integer
    pub fn mean(&self) -> u8 {
        let sum = self.governance as u32
            + self.operations as u32
            + self.compliance as u32
            + self.performance as u32;
        ((sum as f64) / 4.0).round() as u8
    }
}

/// A point-in-time snapshot of scores, checklist, and derived guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: String,
    pub association_id: String,
    pub performed_at: DateTime<Utc>,
    pub current_maturity_level: u8,
    pub target_maturity_level: u8,
    pub overall_score: u8,
    pub categories: CategoryScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Frozen copy at generation time; the live set is owned by the engine
    pub recommendations: Vec<Recommendation>,
    /// Frozen copy at generation time; the live set is owned by the store
    pub compliance_checks: Vec<ComplianceCheck>,
    pub next_assessment_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliance_status_round_trip() {
        for s in ["pending", "compliant", "non_compliant", "not_applicable"] {
            let status: ComplianceStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_compliance_status_rejects_unknown() {
        let err = "done".parse::<ComplianceStatus>().unwrap_err();
        assert_eq!(
            err,
            GuidanceError::InvalidStatus {
                value: "done".to_string()
            }
        );
    }

    #[test]
    fn test_recommendation_status_round_trip() {
        for s in ["pending", "in_progress", "completed", "dismissed"] {
            let status: RecommendationStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_priority_rank_ordering() {
        assert!(RecommendationPriority::High.rank() > RecommendationPriority::Medium.rank());
        assert!(RecommendationPriority::Medium.rank() > RecommendationPriority::Low.rank());
    }

    #[test]
    fn test_category_scores_mean_rounds() {
        let scores = CategoryScores {
            governance: 70,
            operations: 60,
            compliance: 55,
            performance: 75,
        };
        assert_eq!(scores.mean(), 65);

        // 281 / 4 = 70.25 -> 70
        let scores = CategoryScores {
            governance: 70,
            operations: 70,
            compliance: 70,
            performance: 71,
        };
        assert_eq!(scores.mean(), 70);

        // 282 / 4 = 70.5 -> 71
        let scores = CategoryScores {
            governance: 70,
            operations: 70,
            compliance: 71,
            performance: 71,
        };
        assert_eq!(scores.mean(), 71);
    }

    #[test]
    fn test_check_serde_uses_snake_case_tags() {
        let check = ComplianceCheck::new(
            "legal_statutes",
            ComplianceCategory::Legal,
            "Statutes filed",
            "Statutes are filed and current",
            true,
        );
        let json = serde_json::to_string(&check).unwrap();
        assert!(json.contains("\"category\":\"legal\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
