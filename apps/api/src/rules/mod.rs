//! Fraud-scoring rules. Each rule is an independent pure function over the
//! structured context, returning a bounded contribution and an optional
//! explanation. The registry is assembled once and never mutated; evaluation
//! order is the order below, grouped by theme so the final reason list reads
//! as a coherent narrative.

pub mod application;
pub mod compensation;
pub mod contact;
pub mod duplication;
pub mod identity;
pub mod language;
pub mod process;
pub mod promises;
pub mod title;
pub mod urgency;

use thiserror::Error;

use crate::parsing::schema::JdContext;

/// A single rule's contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSignal {
    pub score: f64,
    pub reason: Option<String>,
}

impl RuleSignal {
    pub fn clean() -> Self {
        RuleSignal {
            score: 0.0,
            reason: None,
        }
    }

    pub fn flag(score: f64, reason: impl Into<String>) -> Self {
        RuleSignal {
            score,
            reason: Some(reason.into()),
        }
    }
}

/// A rule that could not evaluate its input. The engine folds these into
/// zero-contribution entries; they never reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleFailure {
    #[error("rule input unusable: {0}")]
    UnusableInput(&'static str),
}

pub type RuleResult = Result<RuleSignal, RuleFailure>;
pub type RuleFn = fn(&JdContext) -> RuleResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTheme {
    Urgency,
    Compensation,
    Identity,
    Credibility,
    Behavioral,
    Structural,
}

pub struct RuleDef {
    pub name: &'static str,
    pub theme: RuleTheme,
    pub run: RuleFn,
}

/// The full rule registry, in evaluation order.
pub static REGISTRY: &[RuleDef] = &[
    // Urgency / psychological pressure
    RuleDef {
        name: "urgent_language",
        theme: RuleTheme::Urgency,
        run: urgency::urgent_language_rule,
    },
    RuleDef {
        name: "urgency_density",
        theme: RuleTheme::Urgency,
        run: urgency::urgency_density_rule,
    },
    // Compensation integrity
    RuleDef {
        name: "unrealistic_salary",
        theme: RuleTheme::Compensation,
        run: compensation::unrealistic_salary_rule,
    },
    RuleDef {
        name: "role_salary_mismatch",
        theme: RuleTheme::Compensation,
        run: compensation::role_salary_mismatch_rule,
    },
    // Identity / legitimacy
    RuleDef {
        name: "missing_company_identity",
        theme: RuleTheme::Identity,
        run: identity::missing_company_identity_rule,
    },
    RuleDef {
        name: "poor_contact_info",
        theme: RuleTheme::Identity,
        run: contact::poor_contact_info_rule,
    },
    // Content credibility
    RuleDef {
        name: "generic_job_title",
        theme: RuleTheme::Credibility,
        run: title::generic_job_title_rule,
    },
    RuleDef {
        name: "hiring_process_absence",
        theme: RuleTheme::Credibility,
        run: process::hiring_process_absence_rule,
    },
    RuleDef {
        name: "over_promising_language",
        theme: RuleTheme::Credibility,
        run: promises::over_promising_language_rule,
    },
    RuleDef {
        name: "language_inconsistency",
        theme: RuleTheme::Credibility,
        run: language::language_inconsistency_rule,
    },
    // Behavioral / application funnel
    RuleDef {
        name: "suspicious_application_flow",
        theme: RuleTheme::Behavioral,
        run: application::suspicious_application_flow_rule,
    },
    // Structural / duplication
    RuleDef {
        name: "copy_paste_jd",
        theme: RuleTheme::Structural,
        run: duplication::copy_paste_jd_rule,
    },
];
