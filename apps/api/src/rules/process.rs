//! Hiring-process credibility rule: postings that promise hiring without any
//! evaluation, or describe a role in detail yet never mention selection
//! steps.

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const STRONG_NO_PROCESS: &[&str] = &[
    "no interview",
    "without interview",
    "direct joining",
    "instant joining",
    "same day joining",
    "same day selection",
    "guaranteed selection",
    "offer letter immediately",
    "instant offer",
    "no selection process",
    "no hr round",
    "no screening",
];

const VAGUE_SHORTCUTS: &[&str] = &[
    "simple selection process",
    "easy hiring process",
    "very easy selection",
    "minimal interview",
    "quick selection",
    "fastest hiring",
    "hassle free hiring",
    "smooth selection",
];

const PROCESS_MENTIONS: &[&str] = &[
    "interview",
    "technical round",
    "assessment",
    "screening",
    "shortlist",
    "selection process",
    "hr interview",
    "panel interview",
];

pub fn hiring_process_absence_rule(ctx: &JdContext) -> RuleResult {
    let lower = ctx.raw_text.to_lowercase();

    if STRONG_NO_PROCESS.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.9,
            "Job claims hiring or selection without any interview or formal evaluation",
        ));
    }

    let vague_hits = VAGUE_SHORTCUTS.iter().filter(|p| lower.contains(*p)).count();
    if vague_hits >= 2 {
        return Ok(RuleSignal::flag(
            0.6,
            "Hiring process described vaguely with unusually simplified claims",
        ));
    }
    if vague_hits == 1 {
        return Ok(RuleSignal::flag(
            0.4,
            "Job suggests unusually easy hiring process without clarity",
        ));
    }

    // Parser already found explicit process steps: credible.
    if !ctx.hiring_flow.steps.is_empty() {
        return Ok(RuleSignal::clean());
    }

    let has_role_info = !ctx.responsibilities.is_empty() || !ctx.requirements.is_empty();
    let mentions_process = PROCESS_MENTIONS.iter().any(|p| lower.contains(p));

    if has_role_info && !mentions_process {
        return Ok(RuleSignal::flag(
            0.35,
            "Job post describes the role but does not explain interview or selection steps",
        ));
    }

    Ok(RuleSignal::clean())
}
