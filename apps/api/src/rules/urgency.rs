//! Urgency / psychological-pressure rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::JdContext;
use crate::rules::{RuleFailure, RuleResult, RuleSignal};

const URGENT_PHRASES: &[&str] = &[
    "immediate join",
    "urgent hiring",
    "limited slots",
    "join immediately",
    "only few positions",
];

/// Flat check for classic urgent call-to-action wording.
pub fn urgent_language_rule(ctx: &JdContext) -> RuleResult {
    let lower = ctx.raw_text.to_lowercase();

    if URGENT_PHRASES.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.7,
            "Urgent call-to-action language detected",
        ));
    }

    Ok(RuleSignal::clean())
}

const STRONG_URGENCY_PATTERNS: &[&str] = &[
    r"\bjoin immediately\b",
    r"\bimmediate join(?:ing)?\b",
    r"\bapply now\b",
    r"\bjoin now\b",
    r"\bno interview\b",
    r"\binstant selection\b",
    r"\bselected instantly\b",
    r"\bguaranteed selection\b",
    r"\blimited slots\b",
    r"\bact fast\b",
    r"\bapply asap\b",
];

const MILD_URGENCY_PATTERNS: &[&str] = &[
    r"\burgent\b",
    r"\burgently\b",
    r"\basap\b",
    r"\bimmediately\b",
    r"\bfast hiring\b",
    r"\bquick hiring\b",
];

static STRONG_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(STRONG_URGENCY_PATTERNS));
static MILD_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(MILD_URGENCY_PATTERNS));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("urgency pattern"))
        .collect()
}

/// Measures how hard the posting pushes urgency. Repetition escalates the
/// score; a single mild mention stays low.
pub fn urgency_density_rule(ctx: &JdContext) -> RuleResult {
    if ctx.raw_text.trim().is_empty() {
        return Err(RuleFailure::UnusableInput("empty raw text"));
    }
    // Very weak parses over-flag; sit this one out.
    if ctx.confidence_score < 0.35 {
        return Ok(RuleSignal::clean());
    }

    let mut text = ctx.job.title.clone().unwrap_or_default();
    text.push(' ');
    text.push_str(&ctx.raw_text);
    let lower = text.to_lowercase();

    let strong_hits: usize = STRONG_RES.iter().map(|re| re.find_iter(&lower).count()).sum();
    let mild_hits: usize = MILD_RES.iter().map(|re| re.find_iter(&lower).count()).sum();
    let total_hits = strong_hits + mild_hits;

    if strong_hits >= 3 || total_hits >= 6 {
        return Ok(RuleSignal::flag(
            0.9,
            "Extreme urgency pressure with repeated guaranteed / instant joining signals",
        ));
    }
    if strong_hits >= 2 || total_hits >= 4 {
        return Ok(RuleSignal::flag(
            0.7,
            "Multiple aggressive urgency phrases detected",
        ));
    }
    if strong_hits == 1 && total_hits >= 3 {
        return Ok(RuleSignal::flag(
            0.6,
            "Urgency-driven hiring language repeated several times",
        ));
    }
    if total_hits == 2 {
        return Ok(RuleSignal::flag(
            0.45,
            "Repeated urgency tone found in job post",
        ));
    }
    if total_hits == 1 {
        return Ok(RuleSignal::flag(
            0.25,
            "Some urgency pressure detected in the job description",
        ));
    }

    Ok(RuleSignal::clean())
}
