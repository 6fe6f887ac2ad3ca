//! Turns normalized posting text into the canonical `JdContext` by running
//! the detectors and a handful of lightweight structural heuristics. Never
//! fails outright: unusably short input yields a low-confidence context.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::detectors::{
    employment::detect_employment_type, experience::detect_experience,
    hiring_flow::detect_hiring_flow, location::detect_location, salary::detect_salary,
};
use crate::parsing::schema::{CompanyInfo, CompanySource, JdContext, JobRoleInfo, Seniority};
use crate::parsing::utils::{
    clamp_confidence, extract_bullets, find_section_blocks, split_lines, GENERIC_EMAIL_DOMAINS,
    ROLE_KEYWORDS,
};

/// Below this the text carries too little signal to run detectors on.
const MIN_PARSE_LEN: usize = 30;
const SHORT_INPUT_CONFIDENCE: f64 = 0.2;
/// Used when every detector came back empty; keeps sparse-but-legitimate
/// postings from being starved of downstream rule eligibility.
const BASELINE_CONFIDENCE: f64 = 0.5;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-]{8,13}\d").expect("phone pattern"));

/// Words that mark a line as a call-to-action rather than a company name or
/// job title.
const CTA_KEYWORDS: &[&str] = &["hiring", "urgent", "apply", "job"];

const RESPONSIBILITY_HEADINGS: &[&str] = &["responsibilit"];
const REQUIREMENT_HEADINGS: &[&str] = &[
    "requirement",
    "qualification",
    "skills required",
    "what you need",
];
const BENEFIT_HEADINGS: &[&str] = &["benefit", "perk", "what we offer"];

pub fn parse_jd(raw_text: &str) -> JdContext {
    let text = raw_text.trim();
    if text.chars().count() < MIN_PARSE_LEN {
        return JdContext::low_signal(text, SHORT_INPUT_CONFIDENCE);
    }

    let experience = detect_experience(text);
    let location = detect_location(text);
    let employment = detect_employment_type(text);
    let hiring_flow = detect_hiring_flow(text);
    let salary = detect_salary(text);

    let emails = extract_emails(text);
    let phone_numbers = extract_phone_numbers(text);

    let company = parse_company(text, &emails);
    let title = parse_title(text);
    let seniority = title.as_deref().and_then(infer_seniority);

    let responsibilities = section_bullets(text, RESPONSIBILITY_HEADINGS);
    let requirements = section_bullets(text, REQUIREMENT_HEADINGS);
    let benefits = section_bullets(text, BENEFIT_HEADINGS);

    // One number per detector; location counts whichever of its two signals
    // is stronger.
    let confidences = [
        experience.confidence,
        location.location_confidence.max(location.remote_confidence),
        employment.confidence,
        hiring_flow.confidence,
        salary.confidence,
    ];
    let nonzero: Vec<f64> = confidences.iter().copied().filter(|c| *c > 0.0).collect();
    let confidence_score = if nonzero.is_empty() {
        BASELINE_CONFIDENCE
    } else {
        clamp_confidence(nonzero.iter().sum::<f64>() / nonzero.len() as f64)
    };

    let job = JobRoleInfo {
        title,
        seniority,
        location: location.location,
        location_confidence: location.location_confidence,
        employment_type: employment.employment_type,
        employment_confidence: employment.confidence,
        years_experience: experience.years_min.or(experience.years_max),
        experience_confidence: experience.confidence,
        remote_mode: location.remote_mode,
        remote_confidence: location.remote_confidence,
    };

    JdContext {
        raw_text: text.to_string(),
        company,
        job,
        salary,
        responsibilities,
        requirements,
        benefits,
        emails,
        phone_numbers,
        hiring_flow,
        confidence_score,
    }
}

fn extract_emails(text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    unique.into_iter().collect()
}

fn extract_phone_numbers(text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        // " - " between digit runs is a range, not a phone number
        .filter(|m| !m.contains(" - "))
        .filter(|m| {
            let digits = m.chars().filter(char::is_ascii_digit).count();
            (10..=13).contains(&digits)
        })
        .collect();
    unique.into_iter().collect()
}

/// First-line heuristic: a short leading line that is not a call-to-action is
/// probably the company label. Falls back to a corporate contact-email domain.
fn parse_company(text: &str, emails: &[String]) -> CompanyInfo {
    if let Some(first) = split_lines(text)
        .into_iter()
        .find(|l| !l.starts_with('['))
    {
        let lowered = first.to_lowercase();
        let is_cta = CTA_KEYWORDS.iter().any(|k| lowered.contains(k));
        if !is_cta && first.split_whitespace().count() <= 6 {
            return CompanyInfo {
                name: Some(first.to_string()),
                inferred_from: Some(CompanySource::FirstLine),
                confidence: 0.6,
            };
        }
    }

    if let Some(name) = company_from_email_domain(emails) {
        return CompanyInfo {
            name: Some(name),
            inferred_from: Some(CompanySource::EmailDomain),
            confidence: 0.5,
        };
    }

    CompanyInfo::default()
}

fn company_from_email_domain(emails: &[String]) -> Option<String> {
    for email in emails {
        let Some(domain) = email.split('@').nth(1) else {
            continue;
        };
        if GENERIC_EMAIL_DOMAINS.contains(&domain) {
            continue;
        }
        if let Some(base) = domain.split('.').next() {
            if base.len() >= 3 {
                return Some(base.to_string());
            }
        }
    }
    None
}

/// Looks for a short leading clause naming a recognizable professional role.
/// Metadata lines from extraction (`[TITLE] …`) are preferred.
fn parse_title(text: &str) -> Option<String> {
    for line in split_lines(text) {
        if let Some(rest) = line.strip_prefix("[TITLE]") {
            // Page titles often append the site name after a separator.
            let candidate = rest.split('|').next().unwrap_or("").trim();
            if is_title_like(candidate) {
                return Some(candidate.to_string());
            }
        }
    }

    for line in split_lines(text)
        .into_iter()
        .filter(|l| !l.starts_with('['))
        .take(5)
    {
        for clause in line.split(['.', '!', '?', ',', ';']) {
            let clause = clause.trim();
            if is_title_like(clause) {
                return Some(clause.to_string());
            }
        }
    }

    None
}

fn is_title_like(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.split_whitespace().count() > 6 {
        return false;
    }
    let lower = candidate.to_lowercase();
    if CTA_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return false;
    }
    // Pronouns mean a sentence, not a title line.
    if lower
        .split_whitespace()
        .any(|w| matches!(w, "we" | "you" | "our" | "your" | "us" | "i"))
    {
        return false;
    }
    ROLE_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn infer_seniority(title: &str) -> Option<Seniority> {
    let lower = title.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    // Senior-level markers first: "Senior Engineer" is high, not mid.
    if has_any(&["senior", "lead", "principal", "architect", "manager", "head"]) {
        return Some(Seniority::High);
    }
    if has_any(&["intern", "trainee", "junior", "associate", "graduate"]) {
        return Some(Seniority::Low);
    }
    if has_any(&["engineer", "developer", "analyst"]) {
        return Some(Seniority::Mid);
    }
    None
}

fn section_bullets(text: &str, headings: &[&str]) -> Vec<String> {
    find_section_blocks(text, headings)
        .iter()
        .flat_map(|block| extract_bullets(block))
        .collect()
}
