//! Text normalization between extraction and parsing. `normalize_text` is
//! pure and idempotent; `normalize_job_description` additionally enforces the
//! minimum usable length for the markup path.

use std::sync::LazyLock;

use regex::Regex;

use crate::ingestion::IngestError;

/// Anything shorter than this after cleanup is not a usable job description.
pub const MIN_USABLE_LEN: usize = 200;

/// Named entities that survive naive extraction, mapped to plain ASCII.
const ENTITY_MAP: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&ndash;", "-"),
    ("&mdash;", "-"),
    ("&bull;", "-"),
];

static BULLET_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•·▪◦‣]+\s+").expect("bullet prefix pattern"));

static MULTI_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline run pattern"));

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space run pattern"));

/// Conservative boilerplate markers. Only short lines are dropped so
/// substantive content mentioning these words survives.
const BOILERPLATE_MARKERS: &[&str] = &[
    "cookie",
    "privacy policy",
    "terms of service",
    "terms and conditions",
    "advertisement",
    "subscribe to",
    "newsletter",
    "sign in",
    "log in",
    "login",
];

const BOILERPLATE_MAX_LINE_LEN: usize = 80;

fn map_code_points(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{a0}' => ' ',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            '•' | '·' | '▪' | '◦' | '‣' => '-',
            '\t' => ' ',
            c => c,
        })
        .collect()
}

fn is_boilerplate_line(line: &str) -> bool {
    if line.chars().count() > BOILERPLATE_MAX_LINE_LEN {
        return false;
    }
    let lower = line.to_lowercase();
    BOILERPLATE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Cleans unicode, canonicalizes bullets, collapses whitespace, and drops
/// boilerplate lines. Applying it twice returns the same text.
pub fn normalize_text(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n").replace('\r', "\n");
    for (entity, replacement) in ENTITY_MAP {
        text = text.replace(entity, replacement);
    }
    let text = map_code_points(&text);

    let text = MULTI_NEWLINE_RE.replace_all(&text, "\n\n");
    let text = SPACE_RUN_RE.replace_all(&text, " ");

    let lines: Vec<String> = text
        .lines()
        .map(|l| BULLET_PREFIX_RE.replace(l, "- ").trim_end().to_string())
        .filter(|l| !l.is_empty())
        .filter(|l| !is_boilerplate_line(l))
        .collect();

    lines.join("\n")
}

/// Normalization for extracted markup. Fails below [`MIN_USABLE_LEN`].
pub fn normalize_job_description(text: &str) -> Result<String, IngestError> {
    let cleaned = normalize_text(text);
    if cleaned.chars().count() < MIN_USABLE_LEN {
        return Err(IngestError::TooShort);
    }
    Ok(cleaned)
}
