//! Job-title credibility rule: vague or templated titles common in scam
//! postings.

use crate::parsing::schema::JdContext;
use crate::parsing::utils::ROLE_KEYWORDS;
use crate::rules::{RuleResult, RuleSignal};

const STRONG_GENERIC: &[&str] = &[
    "work from home job",
    "easy job",
    "simple job",
    "no skill job",
    "anyone can apply",
    "home based job",
    "online typing job",
    "form filling job",
    "sms sending job",
    "data entry job",
    "back office job",
    "online job",
    "domestic job",
    "part time earning",
];

const WEAK_GENERIC: &[&str] = &[
    "multiple openings",
    "hiring for various roles",
    "multiple positions available",
    "staff required",
    "hiring staff",
    "required urgently",
    "fantastic opportunity",
    "great opportunity",
];

pub fn generic_job_title_rule(ctx: &JdContext) -> RuleResult {
    let raw = ctx.raw_text.to_lowercase();
    let title = ctx
        .job
        .title
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    if title.is_empty() {
        return Ok(RuleSignal::flag(
            0.5,
            "Job post does not specify a clear job title",
        ));
    }

    if STRONG_GENERIC
        .iter()
        .any(|g| title.contains(g) || raw.contains(g))
    {
        return Ok(RuleSignal::flag(
            0.85,
            "Job title appears overly generic and commonly used in scam postings",
        ));
    }

    if WEAK_GENERIC
        .iter()
        .any(|g| title.contains(g) || raw.contains(g))
    {
        return Ok(RuleSignal::flag(
            0.55,
            "Job title is vague and not role-specific",
        ));
    }

    if !ROLE_KEYWORDS.iter().any(|k| title.contains(k)) {
        return Ok(RuleSignal::flag(
            0.45,
            "Job title lacks clear professional role or function",
        ));
    }

    Ok(RuleSignal::clean())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(title: Option<&str>, raw: &str) -> JdContext {
        let mut ctx = JdContext {
            raw_text: raw.to_string(),
            ..JdContext::default()
        };
        ctx.job.title = title.map(String::from);
        ctx
    }

    #[test]
    fn test_missing_title_flags() {
        let signal = generic_job_title_rule(&ctx(None, "some posting")).unwrap();
        assert_eq!(signal.score, 0.5);
    }

    #[test]
    fn test_scam_style_title_flags_high() {
        let signal =
            generic_job_title_rule(&ctx(Some("Online typing job"), "online typing job for all"))
                .unwrap();
        assert_eq!(signal.score, 0.85);
    }

    #[test]
    fn test_scam_phrase_in_body_flags_even_with_real_title() {
        let signal = generic_job_title_rule(&ctx(
            Some("Operations Executive"),
            "this is a data entry job really",
        ))
        .unwrap();
        assert_eq!(signal.score, 0.85);
    }

    #[test]
    fn test_weak_generic_title() {
        let signal = generic_job_title_rule(&ctx(
            Some("Staff required"),
            "staff required for our office",
        ))
        .unwrap();
        assert_eq!(signal.score, 0.55);
    }

    #[test]
    fn test_title_without_profession_keyword() {
        let signal = generic_job_title_rule(&ctx(Some("Rockstar Ninja"), "be a rockstar")).unwrap();
        assert_eq!(signal.score, 0.45);
    }

    #[test]
    fn test_professional_title_is_clean() {
        let signal = generic_job_title_rule(&ctx(
            Some("Senior Software Engineer"),
            "we need a senior software engineer",
        ))
        .unwrap();
        assert_eq!(signal, RuleSignal::clean());
    }
}
