//! Duplication / templating rule: copied postings, repeated sections, and
//! boilerplate self-promotion.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const STRONG_COPY_INDICATORS: &[&str] = &[
    "do not copy",
    "copyright",
    "all rights reserved",
    "this content is protected",
    "original posting",
    "plagiarized",
    "taken from",
    "source:",
];

const TEMPLATE_PHRASES: &[&str] = &[
    "we are one of the leading",
    "renowned organization",
    "prestigious company",
    "world class organization",
    "industry leading company",
    "among the top companies",
    "number one company",
];

/// Lines shorter than this are ordinary boilerplate; repetition only counts
/// for substantive lines.
const MIN_REPEATABLE_LINE_LEN: usize = 25;

static BRAND_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Za-z]{2,}\b").expect("brand token pattern"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

pub fn copy_paste_jd_rule(ctx: &JdContext) -> RuleResult {
    let text = ctx.raw_text.trim();
    if text.is_empty() {
        return Ok(RuleSignal::clean());
    }
    let lower = text.to_lowercase();

    if STRONG_COPY_INDICATORS.iter().any(|p| lower.contains(p)) {
        return Ok(RuleSignal::flag(
            0.9,
            "Job description explicitly indicates copied or redistributed content",
        ));
    }

    let mut line_counts: HashMap<String, usize> = HashMap::new();
    for line in text.lines().map(str::trim) {
        if line.chars().count() <= MIN_REPEATABLE_LINE_LEN {
            continue;
        }
        let norm = WHITESPACE_RE.replace_all(&line.to_lowercase(), " ").into_owned();
        *line_counts.entry(norm).or_insert(0) += 1;
    }
    let repeated_lines = line_counts.values().filter(|&&c| c >= 3).count();

    if repeated_lines >= 3 {
        return Ok(RuleSignal::flag(
            0.8,
            "Job description repeats large sections, suggesting reused content",
        ));
    }
    if repeated_lines == 2 {
        return Ok(RuleSignal::flag(
            0.6,
            "Job description contains duplicated sections indicating possible copy-paste",
        ));
    }

    let company_lower = ctx
        .company
        .name
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let unique_brand_tokens: HashSet<String> = BRAND_TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.to_lowercase() != company_lower)
        .collect();

    if unique_brand_tokens.len() >= 5 && ctx.company.name.is_none() {
        return Ok(RuleSignal::flag(
            0.55,
            "Multiple unrelated company or brand names suggest a reused job description",
        ));
    }

    let boilerplate_hits = TEMPLATE_PHRASES.iter().filter(|p| lower.contains(*p)).count();
    if boilerplate_hits >= 3 {
        return Ok(RuleSignal::flag(
            0.45,
            "Job description appears heavily templated with generic promotional language",
        ));
    }

    Ok(RuleSignal::clean())
}
