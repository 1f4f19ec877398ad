//! Guidance report generation
//!
//! Read-side projection of the engine state, rendered as Text, JSON, or
//! Markdown for the host to display or export. Building a report never
//! mutates the engine.

use crate::engine::GuidanceEngine;
use crate::types::{ComplianceCategory, ComplianceStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Snapshot of engine state for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceReport {
    pub association_id: Option<String>,
    pub overall_score: Option<u8>,
    pub current_level: String,
    pub target_level: String,
    pub compliance_score: u8,
    pub compliance_by_category: Vec<CategoryScoreLine>,
    pub checks_total: usize,
    pub checks_compliant: usize,
    pub pending_recommendations: Vec<ReportLine>,
    pub active_insights: Vec<ReportLine>,
}

/// One compliance category with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScoreLine {
    pub category: String,
    pub score: u8,
}

/// One recommendation or insight, reduced to its display essentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLine {
    pub id: String,
    pub title: String,
    pub tag: String,
}

impl GuidanceReport {
    /// Snapshot the engine's current read-side state
    pub fn from_engine(engine: &GuidanceEngine) -> Self {
        let diagnostic = engine.diagnostic();
        let checks = engine.compliance_checks();

        let compliance_by_category = ComplianceCategory::ALL
            .iter()
            .map(|&c| CategoryScoreLine {
                category: c.label().to_string(),
                score: engine.compliance_score_by_category(c),
            })
            .collect();

        Self {
            association_id: diagnostic.map(|d| d.association_id.clone()),
            overall_score: diagnostic.map(|d| d.overall_score),
            current_level: engine.current_maturity_level().name.to_string(),
            target_level: engine.next_maturity_level().name.to_string(),
            compliance_score: engine.compliance_score(),
            compliance_by_category,
            checks_total: checks.len(),
            checks_compliant: checks
                .iter()
                .filter(|c| c.status == ComplianceStatus::Compliant)
                .count(),
            pending_recommendations: engine
                .pending_recommendations()
                .iter()
                .map(|r| ReportLine {
                    id: r.id.clone(),
                    title: r.title.clone(),
                    tag: r.priority.to_string(),
                })
                .collect(),
            active_insights: engine
                .active_insights()
                .iter()
                .map(|i| ReportLine {
                    id: i.id.clone(),
                    title: i.title.clone(),
                    tag: i.kind.to_string(),
                })
                .collect(),
        }
    }

    /// Render in the requested format
    pub fn format(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.format_text(),
            ReportFormat::Json => self.format_json(),
            ReportFormat::Markdown => self.format_markdown(),
        }
    }

    /// Plain-text report
    pub fn format_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "ORGANIZATIONAL GUIDANCE REPORT");
        let _ = writeln!(out, "==============================");
        if let Some(id) = &self.association_id {
            let _ = writeln!(out, "Association: {id}");
        }
        if let Some(score) = self.overall_score {
            let _ = writeln!(out, "Overall score: {score}/100");
        }
        let _ = writeln!(
            out,
            "Maturity: {} (target: {})",
            self.current_level, self.target_level
        );
        let _ = writeln!(
            out,
            "Compliance: {}% ({}/{} checks compliant)",
            self.compliance_score, self.checks_compliant, self.checks_total
        );
        for line in &self.compliance_by_category {
            let _ = writeln!(out, "  {}: {}%", line.category, line.score);
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Pending recommendations ({}):",
            self.pending_recommendations.len()
        );
        for rec in &self.pending_recommendations {
            let _ = writeln!(out, "  [{}] {}", rec.tag, rec.title);
        }
        let _ = writeln!(out, "Active insights ({}):", self.active_insights.len());
        for insight in &self.active_insights {
            let _ = writeln!(out, "  [{}] {}", insight.tag, insight.title);
        }
        out
    }

    /// JSON report
    pub fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Markdown report
    pub fn format_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Organizational Guidance Report\n");
        if let Some(id) = &self.association_id {
            let _ = writeln!(out, "**Association:** {id}  ");
        }
        if let Some(score) = self.overall_score {
            let _ = writeln!(out, "**Overall score:** {score}/100  ");
        }
        let _ = writeln!(
            out,
            "**Maturity:** {} → {}  ",
            self.current_level, self.target_level
        );
        let _ = writeln!(out, "**Compliance:** {}%\n", self.compliance_score);

        let _ = writeln!(out, "| Category | Score |");
        let _ = writeln!(out, "|----------|-------|");
        for line in &self.compliance_by_category {
            let _ = writeln!(out, "| {} | {}% |", line.category, line.score);
        }

        let _ = writeln!(out, "\n## Pending recommendations\n");
        for rec in &self.pending_recommendations {
            let _ = writeln!(out, "- **{}** — {}", rec.tag, rec.title);
        }
        let _ = writeln!(out, "\n## Active insights\n");
        for insight in &self.active_insights {
            let _ = writeln!(out, "- **{}** — {}", insight.tag, insight.title);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticInput;
    use crate::types::CategoryScores;
    use chrono::{TimeZone, Utc};

    fn engine_with_diagnostic() -> GuidanceEngine {
        let mut engine = GuidanceEngine::new();
        engine
            .run_diagnostic(DiagnosticInput {
                association_id: "assoc_001".to_string(),
                current_level: 2,
                categories: CategoryScores {
                    governance: 70,
                    operations: 60,
                    compliance: 55,
                    performance: 75,
                },
                checks: None,
                performed_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()),
            })
            .unwrap();
        engine
    }

    #[test]
    fn test_report_snapshots_engine_state() {
        let engine = engine_with_diagnostic();
        let report = GuidanceReport::from_engine(&engine);

        assert_eq!(report.association_id.as_deref(), Some("assoc_001"));
        assert_eq!(report.overall_score, Some(65));
        assert_eq!(report.current_level, "Structured");
        assert_eq!(report.target_level, "Organized");
        assert_eq!(report.checks_total, 8);
        assert_eq!(report.compliance_score, 0);
        assert_eq!(report.compliance_by_category.len(), 4);
    }

    #[test]
    fn test_format_text() {
        let report = GuidanceReport::from_engine(&engine_with_diagnostic());
        let text = report.format_text();
        assert!(text.contains("ORGANIZATIONAL GUIDANCE REPORT"));
        assert!(text.contains("Overall score: 65/100"));
        assert!(text.contains("Maturity: Structured (target: Organized)"));
    }

    #[test]
    fn test_format_json_is_valid() {
        let report = GuidanceReport::from_engine(&engine_with_diagnostic());
        let json = report.format_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["overall_score"], 65);
        assert_eq!(parsed["current_level"], "Structured");
    }

    #[test]
    fn test_format_markdown_has_table() {
        let report = GuidanceReport::from_engine(&engine_with_diagnostic());
        let md = report.format_markdown();
        assert!(md.contains("# Organizational Guidance Report"));
        assert!(md.contains("| Category | Score |"));
    }

    #[test]
    fn test_report_on_empty_engine() {
        let report = GuidanceReport::from_engine(&GuidanceEngine::new());
        assert!(report.association_id.is_none());
        assert!(report.overall_score.is_none());
        assert_eq!(report.current_level, "Emerging");
        assert_eq!(report.compliance_score, 0);
        assert_eq!(report.checks_total, 0);
    }
}
