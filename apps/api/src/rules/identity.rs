//! Company-identity rule: anonymous, undisclosed, or unidentifiable
//! employers.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const EXPLICIT_ANONYMOUS: &[&str] = &[
    "confidential company",
    "company name not disclosed",
    "client confidential",
    "confidential employer",
    "hidden company",
    "undisclosed company",
    "name withheld",
];

const THIRD_PARTY_MARKERS: &[&str] = &[
    "hiring for client",
    "recruiting for client",
    "recruiting on behalf of",
    "third party hiring",
    "staffing partner",
    "placement agency",
];

static CORPORATE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:pvt ltd|private limited|inc|llc|corp|corporation|ltd)\b")
        .expect("corporate suffix pattern")
});

static BRAND_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Za-z]{2,}\b").expect("brand token pattern"));

pub fn missing_company_identity_rule(ctx: &JdContext) -> RuleResult {
    let lower = ctx.raw_text.to_lowercase();

    let company_name = ctx
        .company
        .name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if company_name.len() >= 3 {
        return Ok(RuleSignal::clean());
    }

    if EXPLICIT_ANONYMOUS.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.9,
            "Company identity intentionally hidden or undisclosed",
        ));
    }

    if THIRD_PARTY_MARKERS.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.55,
            "Job appears to be posted by a third-party recruiter without disclosing the employer",
        ));
    }

    let has_corporate_suffix = CORPORATE_SUFFIX_RE.is_match(&lower);
    let brand_candidates = BRAND_TOKEN_RE.find_iter(&ctx.raw_text).count();

    if !has_corporate_suffix && brand_candidates < 2 {
        return Ok(RuleSignal::flag(
            0.7,
            "Job post does not reveal any identifiable company name",
        ));
    }

    Ok(RuleSignal::flag(
        0.4,
        "Company identity unclear or weakly indicated",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::schema::CompanyInfo;

    fn ctx(text: &str, company: Option<&str>) -> JdContext {
        JdContext {
            raw_text: text.to_string(),
            company: CompanyInfo {
                name: company.map(String::from),
                ..CompanyInfo::default()
            },
            ..JdContext::default()
        }
    }

    #[test]
    fn test_named_company_is_clean() {
        let signal =
            missing_company_identity_rule(&ctx("any text at all", Some("Acme Corp"))).unwrap();
        assert_eq!(signal, RuleSignal::clean());
    }

    #[test]
    fn test_explicit_anonymity_flags_high() {
        let signal = missing_company_identity_rule(&ctx(
            "Hiring for a confidential employer in the finance space",
            None,
        ))
        .unwrap();
        assert_eq!(signal.score, 0.9);
    }

    #[test]
    fn test_agency_without_employer_flags_medium() {
        let signal = missing_company_identity_rule(&ctx(
            "We are recruiting on behalf of a large bank",
            None,
        ))
        .unwrap();
        assert_eq!(signal.score, 0.55);
    }

    #[test]
    fn test_no_identifying_signal_flags() {
        let signal =
            missing_company_identity_rule(&ctx("need people for online work. good pay.", None))
                .unwrap();
        assert_eq!(signal.score, 0.7);
    }

    #[test]
    fn test_brand_tokens_soften_to_weak_identity() {
        let signal = missing_company_identity_rule(&ctx(
            "Work with Microsoft Azure and Google Cloud daily",
            None,
        ))
        .unwrap();
        assert_eq!(signal.score, 0.4);
    }

    #[test]
    fn test_inc_does_not_match_inside_words() {
        // "including" must not count as a corporate suffix
        let signal = missing_company_identity_rule(&ctx(
            "perks including snacks. nothing else here.",
            None,
        ))
        .unwrap();
        assert_eq!(signal.score, 0.7);
    }
}
