//! Over-promising language rule: guaranteed placements, effortless income,
//! instant approval.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const STRONG_GUARANTEES: &[&str] = &[
    "guaranteed job",
    "100% job guarantee",
    "assured placement",
    "job assured",
    "placement guaranteed",
    "offer letter guaranteed",
    "salary guaranteed",
    "fixed job after training",
    "job without interview",
    "selection without interview",
    "instant selection",
    "same day joining guaranteed",
];

const MEDIUM_PROMISES: &[&str] = &[
    "earn unlimited",
    "no effort required",
    "effortless income",
    "easy money",
    "earn while you sleep",
    "work only few hours and earn",
    "guaranteed selection",
    "instant approval",
    "quick approval",
    "job sure shot",
];

static EXCLAMATION_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("exclamation pattern"));

static SHOUTING_CAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("caps pattern"));

pub fn over_promising_language_rule(ctx: &JdContext) -> RuleResult {
    let text = &ctx.raw_text;
    if text.trim().is_empty() {
        return Ok(RuleSignal::clean());
    }
    let lower = text.to_lowercase();

    if STRONG_GUARANTEES.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.9,
            "Unrealistic guaranteed hiring or placement promises detected",
        ));
    }

    let medium_hits = MEDIUM_PROMISES.iter().filter(|p| lower.contains(*p)).count();
    if medium_hits == 0 {
        return Ok(RuleSignal::clean());
    }

    let exclamation_runs = EXCLAMATION_RUN_RE.find_iter(text).count();
    let shouting_caps = SHOUTING_CAPS_RE.find_iter(text).count();

    // Postings with actual structure earn some benefit of the doubt.
    let seems_structured = ctx.responsibilities.len() >= 2 || ctx.requirements.len() >= 2;

    if medium_hits >= 2 {
        if exclamation_runs >= 3 || shouting_caps >= 4 {
            return Ok(RuleSignal::flag(
                0.8,
                "Highly exaggerated earning or instant hiring claims with aggressive tone",
            ));
        }
        return Ok(RuleSignal::flag(
            0.7,
            "Multiple exaggerated earning or instant selection claims detected",
        ));
    }

    if seems_structured {
        Ok(RuleSignal::flag(
            0.45,
            "Suspicious exaggerated promise found",
        ))
    } else {
        Ok(RuleSignal::flag(
            0.55,
            "Suspicious over-promising hiring or earning claim in unstructured job post",
        ))
    }
}
