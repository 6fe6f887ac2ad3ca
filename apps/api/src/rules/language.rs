//! Language-consistency rule: informal vernacular mixed into English with
//! aggressive formatting, a common texture of spam postings. Legitimate
//! bilingual posts with structure and a named company are tolerated.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const VERNACULAR_TERMS: &[&str] = &[
    "apply karein",
    "turant",
    "yahan",
    "naukri",
    "aap",
    "hum",
    "karega",
    "milegi",
    "paise",
    "sampark",
    "bharti",
    "rojgar",
    "avsar",
];

static ENGLISH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{3,}").expect("english pattern"));

static SHOUTING_CAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("caps pattern"));

static PUNCTUATION_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("punctuation pattern"));

pub fn language_inconsistency_rule(ctx: &JdContext) -> RuleResult {
    let text = &ctx.raw_text;
    if text.trim().is_empty() {
        return Ok(RuleSignal::clean());
    }
    let lower = text.to_lowercase();

    let vernacular_hits = VERNACULAR_TERMS.iter().filter(|t| lower.contains(*t)).count();
    let english_detected = ENGLISH_RE.is_match(&lower);
    let mixed_language = english_detected && vernacular_hits > 0;

    let seems_professional = ctx.company.name.is_some();
    let has_structure = ctx.responsibilities.len() >= 2 || ctx.requirements.len() >= 2;

    let excessive_caps = SHOUTING_CAPS_RE.find_iter(text).count();
    let punctuation_runs = PUNCTUATION_RUN_RE.find_iter(text).count();

    if mixed_language && (excessive_caps >= 4 || punctuation_runs >= 4) {
        return Ok(RuleSignal::flag(
            0.85,
            "Job uses mixed-language wording with aggressive formatting, common in scam posts",
        ));
    }

    if mixed_language && !seems_professional {
        let score = if has_structure { 0.45 } else { 0.6 };
        return Ok(RuleSignal::flag(
            score,
            "Job post uses informal mixed-language tone and lacks professionalism",
        ));
    }

    if excessive_caps >= 7 || punctuation_runs >= 6 {
        return Ok(RuleSignal::flag(
            0.6,
            "Job description shows excessive random capitalization or punctuation",
        ));
    }

    if excessive_caps >= 4 {
        return Ok(RuleSignal::flag(
            0.4,
            "Unusual capitalization pattern detected in job post",
        ));
    }

    Ok(RuleSignal::clean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::schema::CompanyInfo;

    fn ctx(text: &str) -> JdContext {
        JdContext {
            raw_text: text.to_string(),
            ..JdContext::default()
        }
    }

    #[test]
    fn test_mixed_language_with_aggressive_formatting() {
        let signal = language_inconsistency_rule(&ctx(
            "NAUKRI PAKKI!! apply karein yahan!! EARN DAILY!! JOIN FAST!! turant paise",
        ))
        .unwrap();
        assert_eq!(signal.score, 0.85);
    }

    #[test]
    fn test_mixed_language_unprofessional() {
        let signal =
            language_inconsistency_rule(&ctx("apply karein for this great post, turant joining"))
                .unwrap();
        assert_eq!(signal.score, 0.6);
    }

    #[test]
    fn test_mixed_language_with_structure_softened() {
        let mut c = ctx("apply karein for this developer post");
        c.requirements = vec!["python".into(), "sql".into()];
        let signal = language_inconsistency_rule(&c).unwrap();
        assert_eq!(signal.score, 0.45);
    }

    #[test]
    fn test_named_company_tolerates_bilingual_text() {
        let mut c = ctx("apply karein, we are hiring for our Pune office");
        c.company = CompanyInfo {
            name: Some("Acme Systems".into()),
            ..CompanyInfo::default()
        };
        let signal = language_inconsistency_rule(&c).unwrap();
        assert_eq!(signal, RuleSignal::clean());
    }

    #[test]
    fn test_pure_shouting_caps() {
        let signal = language_inconsistency_rule(&ctx(
            "URGENT REQUIREMENT APPLY TODAY JOIN FAST EARN MORE WORK DAILY GOOD SALARY",
        ))
        .unwrap();
        assert_eq!(signal.score, 0.6);
    }

    #[test]
    fn test_moderate_caps() {
        let signal = language_inconsistency_rule(&ctx(
            "HIRING NOW!  WORK FROM HOME STAFF needed for support role",
        ))
        .unwrap();
        assert_eq!(signal.score, 0.4);
    }

    #[test]
    fn test_plain_text_clean() {
        let signal =
            language_inconsistency_rule(&ctx("We are hiring a thoughtful backend engineer"))
                .unwrap();
        assert_eq!(signal, RuleSignal::clean());
    }
}
