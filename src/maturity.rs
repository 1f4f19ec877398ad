//! Maturity Model Registry
//!
//! Static ordered catalog of the five organizational maturity levels.
//! Loaded once at first use, never mutated. Lookups fall back to level 1
//! rather than erroring; `next_level` clamps at the ceiling.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Number of levels in the maturity model
pub const MAX_LEVEL: u8 = 5;

/// An immutable maturity catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaturityLevel {
    /// 1..=5, strictly ordered, unique
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

static MATURITY_LEVELS: Lazy<Vec<MaturityLevel>> = Lazy::new(|| {
    vec![
        MaturityLevel {
            id: 1,
            name: "Emerging",
            description: "Basic structure, minimal documentation",
            requirements: &[
                "Statutes filed with the registration authority",
                "Board constituted (at minimum chair, treasurer, secretary)",
                "Founding general assembly held",
                "Bank account opened",
            ],
            benefits: &[
                "Recognized legal existence",
                "Ability to receive donations",
                "Eligibility for basic grants",
            ],
        },
        MaturityLevel {
            id: 2,
            name: "Structured",
            description: "Governance established, processes defined",
            requirements: &[
                "Internal rules adopted",
                "Systematic meeting minutes",
                "Annual action plan defined",
                "Membership dues system in place",
                "Roles and responsibilities clarified",
            ],
            benefits: &[
                "Structured internal operations",
                "Better organized activities",
                "Stronger credibility with partners",
            ],
        },
        MaturityLevel {
            id: 3,
            name: "Organized",
            description: "Optimized procedures, internal controls",
            requirements: &[
                "Procedures documented and applied",
                "Rigorous financial management",
                "Reporting system in place",
                "Officer training completed",
                "Modern management tools in use",
            ],
            benefits: &[
                "Optimized operational efficiency",
                "Reduced risk exposure",
                "Controlled growth capacity",
            ],
        },
        MaturityLevel {
            id: 4,
            name: "Optimized",
            description: "Measured performance, continuous improvement",
            requirements: &[
                "Performance indicators defined",
                "Regular impact evaluation",
                "Quality system in place",
                "Innovation in practices",
                "Strategic partnerships developed",
            ],
            benefits: &[
                "Measurable social impact",
                "Sector recognition",
                "Access to major funding",
            ],
        },
        MaturityLevel {
            id: 5,
            name: "Excellence",
            description: "Innovation, sector leadership, measurable impact",
            requirements: &[
                "Recognized sector leadership",
                "Active innovation and R&D",
                "Influence on public policy",
                "Replication and spin-offs",
                "Certified excellence standards",
            ],
            benefits: &[
                "Sector reference",
                "Systemic impact",
                "Long-term sustainability",
            ],
        },
    ]
});

/// Full catalog in level order (1..=5)
pub fn levels() -> &'static [MaturityLevel] {
    &MATURITY_LEVELS
}

/// Look up a level by id
pub fn level(id: u8) -> Option<&'static MaturityLevel> {
    MATURITY_LEVELS.iter().find(|l| l.id == id)
}

/// Look up a level by id, falling back to level 1 for invalid ids
pub fn level_or_first(id: u8) -> &'static MaturityLevel {
    level(id).unwrap_or(&MATURITY_LEVELS[0])
}

/// The level after `id`, clamped at the ceiling (`next_level(5)` is level 5)
pub fn next_level(id: u8) -> &'static MaturityLevel {
    let next = id.saturating_add(1).min(MAX_LEVEL);
    level_or_first(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_total_order_without_gaps() {
        let catalog = levels();
        assert_eq!(catalog.len(), MAX_LEVEL as usize);
        for (i, l) in catalog.iter().enumerate() {
            assert_eq!(l.id, i as u8 + 1);
            assert!(!l.requirements.is_empty());
            assert!(!l.benefits.is_empty());
        }
    }

    #[test]
    fn test_level_lookup() {
        assert_eq!(level(3).unwrap().name, "Organized");
        assert!(level(0).is_none());
        assert!(level(6).is_none());
    }

    #[test]
    fn test_level_or_first_falls_back() {
        assert_eq!(level_or_first(2).id, 2);
        assert_eq!(level_or_first(0).id, 1);
        assert_eq!(level_or_first(42).id, 1);
    }

    #[test]
    fn test_next_level_steps_and_clamps() {
        for id in 1..=4 {
            assert_eq!(next_level(id).id, id + 1);
        }
        assert_eq!(next_level(5).id, 5);
        assert_eq!(next_level(u8::MAX).id, 5);
    }
}
