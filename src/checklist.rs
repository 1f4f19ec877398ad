//! Compliance Checklist Store
//!
//! Owns the single live checklist for a session. Items are seeded wholesale
//! when a diagnostic runs, then mutated one status at a time. Every mutation
//! stamps `last_checked`; membership is fixed between seeds (no deletion).

use crate::error::{GuidanceError, Result};
use crate::types::{ComplianceCategory, ComplianceCheck, ComplianceStatus};
use chrono::Utc;
use tracing::debug;

/// In-memory store for the live compliance checklist
#[derive(Debug, Clone, Default)]
pub struct ChecklistStore {
    items: Vec<ComplianceCheck>,
}

impl ChecklistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the checklist wholesale (used once per diagnostic run)
    pub fn seed(&mut self, items: Vec<ComplianceCheck>) {
        debug!(count = items.len(), "seeding compliance checklist");
        self.items = items;
    }

    /// Set the status of one check, stamping `last_checked`
    ///
    /// Fails with `NotFound` if the id is unknown; no item is touched on
    /// failure.
    pub fn update_status(&mut self, id: &str, status: ComplianceStatus) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| GuidanceError::not_found("compliance check", id))?;

        item.status = status;
        item.last_checked = Some(Utc::now());
        debug!(check = id, status = %status, "compliance check updated");
        Ok(())
    }

    /// Overall compliance score: `round(100 * compliant / total)`, 0 when empty
    pub fn compliance_score(&self) -> u8 {
        Self::score_of(&self.items)
    }

    /// Compliance score restricted to one category, 0 when the category is empty
    pub fn score_by_category(&self, category: ComplianceCategory) -> u8 {
        let subset: Vec<&ComplianceCheck> = self
            .items
            .iter()
            .filter(|c| c.category == category)
            .collect();
        if subset.is_empty() {
            return 0;
        }
        let compliant = subset
            .iter()
            .filter(|c| c.status == ComplianceStatus::Compliant)
            .count();
        ((compliant as f64 / subset.len() as f64) * 100.0).round() as u8
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ComplianceCheck] {
        &self.items
    }

    /// Look up one check by id
    pub fn get(&self, id: &str) -> Option<&ComplianceCheck> {
        self.items.iter().find(|c| c.id == id)
    }

    fn score_of(items: &[ComplianceCheck]) -> u8 {
        if items.is_empty() {
            return 0;
        }
        let compliant = items
            .iter()
            .filter(|c| c.status == ComplianceStatus::Compliant)
            .count();
        ((compliant as f64 / items.len() as f64) * 100.0).round() as u8
    }
}

/// Default checklist seeded when a diagnostic supplies no checks
///
/// Eight items across the four categories, all `Pending`.
pub fn default_checks() -> Vec<ComplianceCheck> {
    vec![
        ComplianceCheck::new(
            "legal_statutes",
            ComplianceCategory::Legal,
            "Statutes filed and current",
            "Statutes are filed with the registration authority and reflect the current situation",
            true,
        ),
        ComplianceCheck::new(
            "legal_internal_rules",
            ComplianceCategory::Legal,
            "Internal rules adopted",
            "Internal rules complement the statutes and are voted in general assembly",
            true,
        ),
        ComplianceCheck::new(
            "legal_annual_assembly",
            ComplianceCategory::Legal,
            "Annual general assembly",
            "The annual general assembly is held within the statutory deadline",
            true,
        ),
        ComplianceCheck::new(
            "gov_board",
            ComplianceCategory::Governance,
            "Board constituted",
            "The board is elected and includes at minimum a chair, a treasurer, and a secretary",
            true,
        ),
        ComplianceCheck::new(
            "gov_minutes",
            ComplianceCategory::Governance,
            "Systematic meeting minutes",
            "Every meeting produces archived minutes",
            true,
        ),
        ComplianceCheck::new(
            "fin_bank_account",
            ComplianceCategory::Financial,
            "Dedicated bank account",
            "The association holds a bank account used exclusively for its activity",
            true,
        ),
        ComplianceCheck::new(
            "fin_bookkeeping",
            ComplianceCategory::Financial,
            "Bookkeeping maintained",
            "Accounts are kept rigorously and up to date",
            true,
        ),
        ComplianceCheck::new(
            "op_action_plan",
            ComplianceCategory::Operational,
            "Annual action plan",
            "An action plan is defined and tracked every year",
            false,
        ),
    ]
}
