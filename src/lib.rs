//! Boussole - Organizational Maturity Diagnostic & Recommendation Engine
//!
//! A library-level rules engine for association management dashboards:
//!
//! - classifies an organization into one of five maturity levels
//! - maintains a compliance checklist with per-item status and scoring
//! - derives prioritized recommendations and typed insights from a diagnostic
//! - tracks the lifecycle of those records as the host mutates them
//!
//! The engine is synchronous and in-memory. One [`GuidanceEngine`] instance
//! per session or tenant; the host owns persistence, auth, and rendering.
//!
//! ```
//! use boussole::{CategoryScores, DiagnosticInput, GuidanceEngine};
//!
//! let mut engine = GuidanceEngine::new();
//! engine
//!     .run_diagnostic(DiagnosticInput {
//!         association_id: "assoc_001".to_string(),
//!         current_level: 2,
//!         categories: CategoryScores {
//!             governance: 70,
//!             operations: 60,
//!             compliance: 55,
//!             performance: 75,
//!         },
//!         checks: None,
//!         performed_at: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(engine.diagnostic().unwrap().overall_score, 65);
//! assert_eq!(engine.next_maturity_level().id, 3);
//! ```

pub mod checklist;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod insight;
pub mod maturity;
pub mod recommend;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use checklist::{default_checks, ChecklistStore};
pub use diagnostic::DiagnosticInput;
pub use engine::GuidanceEngine;
pub use error::GuidanceError;
pub use insight::InsightEngine;
pub use maturity::MaturityLevel;
pub use recommend::RecommendationEngine;
pub use report::{GuidanceReport, ReportFormat};
pub use types::{
    CategoryScores, ComplianceCategory, ComplianceCheck, ComplianceStatus, Diagnostic, Insight,
    InsightKind, Recommendation, RecommendationPriority, RecommendationStatus,
};
