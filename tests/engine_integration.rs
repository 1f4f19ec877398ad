//! End-to-end scenarios for the guidance engine

use boussole::{
    CategoryScores, ComplianceCategory, ComplianceCheck, ComplianceStatus, DiagnosticInput,
    GuidanceEngine, GuidanceError, InsightKind,
};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn input_with(categories: CategoryScores) -> DiagnosticInput {
    DiagnosticInput {
        association_id: "assoc_001".to_string(),
        current_level: 2,
        categories,
        checks: None,
        performed_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()),
    }
}

fn sample_input() -> DiagnosticInput {
    input_with(CategoryScores {
        governance: 70,
        operations: 60,
        compliance: 55,
        performance: 75,
    })
}

/// Scenario 1: overall score is the rounded mean of the category scores
#[test]
fn diagnostic_scores_sample_categories_at_65() {
    let mut engine = GuidanceEngine::new();
    let diag = engine.run_diagnostic(sample_input()).unwrap();
    assert_eq!(diag.overall_score, 65);
    assert_eq!(diag.current_maturity_level, 2);
    assert_eq!(diag.target_maturity_level, 3);
}

/// Scenario 2: compliance score tracks checklist mutations exactly
#[test]
fn compliance_score_follows_checklist_updates() {
    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(sample_input()).unwrap();

    // 8 default checks, none compliant yet
    assert_eq!(engine.compliance_checks().len(), 8);
    assert_eq!(engine.compliance_score(), 0);

    engine
        .update_compliance_status("legal_statutes", ComplianceStatus::Compliant)
        .unwrap();
    engine
        .update_compliance_status("gov_board", ComplianceStatus::Compliant)
        .unwrap();

    // 2 of 8 -> 25
    assert_eq!(engine.compliance_score(), 25);

    engine
        .update_compliance_status("fin_bank_account", ComplianceStatus::Compliant)
        .unwrap();
    // 3 of 8 -> 37.5 -> 38
    assert_eq!(engine.compliance_score(), 38);
}

/// Scenario 3: deadline warning is generated, dismissible, and dismissal of
/// an unknown id fails without touching anything else
#[test]
fn deadline_warning_lifecycle() {
    let performed_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let mut checks = boussole::default_checks();
    if let Some(assembly) = checks.iter_mut().find(|c| c.id == "legal_annual_assembly") {
        assembly.next_deadline = Some(performed_at + Duration::days(30));
    }

    let mut input = sample_input();
    input.checks = Some(checks);

    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(input).unwrap();

    let warning_id = "insight_deadline_legal_annual_assembly";
    let warning = engine
        .active_insights()
        .into_iter()
        .find(|i| i.id == warning_id)
        .expect("deadline warning should be generated");
    assert_eq!(warning.kind, InsightKind::Warning);
    assert_eq!(warning.priority, 9);

    let active_before = engine.active_insights().len();
    let err = engine.dismiss_insight("insight_unknown").unwrap_err();
    assert!(matches!(err, GuidanceError::NotFound { .. }));
    assert_eq!(engine.active_insights().len(), active_before);

    engine.dismiss_insight(warning_id).unwrap();
    assert!(!engine.active_insights().iter().any(|i| i.id == warning_id));
    assert_eq!(engine.active_insights().len(), active_before - 1);
}

/// Scenario 4: level 2 -> next level is the registry entry with id 3
#[test]
fn next_maturity_level_from_level_two() {
    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(sample_input()).unwrap();
    let next = engine.next_maturity_level();
    assert_eq!(next.id, 3);
    assert_eq!(next.name, "Organized");
}

/// Completing a recommendation removes it from the pending view but keeps
/// the priority order of the remaining items stable
#[test]
fn recommendation_lifecycle_and_ordering() {
    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(sample_input()).unwrap();

    let ids: Vec<String> = engine
        .pending_recommendations()
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(ids[0], "rec_compliance"); // the only High

    engine.mark_recommendation_complete("rec_compliance").unwrap();
    engine.mark_recommendation_complete("rec_compliance").unwrap(); // idempotent

    let after: Vec<String> = engine
        .pending_recommendations()
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(after, ids[1..].to_vec());
}

/// Checklist membership is fixed between runs and updates never delete
#[test]
fn checklist_membership_is_fixed_per_diagnostic() {
    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(sample_input()).unwrap();

    for status in [
        ComplianceStatus::Compliant,
        ComplianceStatus::NonCompliant,
        ComplianceStatus::NotApplicable,
        ComplianceStatus::Pending,
    ] {
        engine
            .update_compliance_status("op_action_plan", status)
            .unwrap();
        assert_eq!(engine.compliance_checks().len(), 8);
    }
}

/// A caller-supplied checklist replaces the default catalog
#[test]
fn custom_checklist_is_seeded_verbatim() {
    let mut input = sample_input();
    input.checks = Some(vec![
        ComplianceCheck::new("only", ComplianceCategory::Legal, "Only check", "", true),
    ]);

    let mut engine = GuidanceEngine::new();
    engine.run_diagnostic(input).unwrap();
    assert_eq!(engine.compliance_checks().len(), 1);

    engine
        .update_compliance_status("only", ComplianceStatus::Compliant)
        .unwrap();
    assert_eq!(engine.compliance_score(), 100);
}

proptest! {
    /// Overall score stays in 0..=100 and equals the rounded mean
    #[test]
    fn overall_score_is_rounded_mean(g in 0u8..=100, o in 0u8..=100, c in 0u8..=100, p in 0u8..=100) {
        let mut engine = GuidanceEngine::new();
        let diag = engine
            .run_diagnostic(input_with(CategoryScores {
                governance: g,
                operations: o,
                compliance: c,
                performance: p,
            }))
            .unwrap();

        let expected = ((g as f64 + o as f64 + c as f64 + p as f64) / 4.0).round() as u8;
        prop_assert_eq!(diag.overall_score, expected);
        prop_assert!(diag.overall_score <= 100);
    }

    /// Compliance score stays in 0..=100 for any compliant/total split
    #[test]
    fn compliance_score_is_bounded(total in 0usize..40, compliant_seed in 0usize..40) {
        let mut store = boussole::ChecklistStore::new();
        let items: Vec<ComplianceCheck> = (0..total)
            .map(|i| ComplianceCheck::new(
                format!("check_{i}"),
                ComplianceCategory::Operational,
                format!("Check {i}"),
                "",
                false,
            ))
            .collect();
        store.seed(items);

        let compliant = compliant_seed.min(total);
        for i in 0..compliant {
            store.update_status(&format!("check_{i}"), ComplianceStatus::Compliant).unwrap();
        }

        let score = store.compliance_score();
        prop_assert!(score <= 100);
        if total == 0 {
            prop_assert_eq!(score, 0);
        } else {
            let expected = ((compliant as f64 / total as f64) * 100.0).round() as u8;
            prop_assert_eq!(score, expected);
        }
    }
}
