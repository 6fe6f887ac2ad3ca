//! Shared parsing helpers used by the detectors and the context parser.
//! Deterministic string work only; nothing here touches the network or state.

use std::sync::LazyLock;

use regex::Regex;

/// Words that indicate a recognizable professional function in a job title.
pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "designer",
    "analyst",
    "manager",
    "consultant",
    "specialist",
    "scientist",
    "architect",
    "administrator",
    "executive",
    "sales",
    "marketing",
    "support",
    "technician",
];

/// Free email providers. Addresses on these domains never identify a company.
pub const GENERIC_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "yahoo.co.in",
    "outlook.com",
    "hotmail.com",
    "rediffmail.com",
    "protonmail.com",
    "aol.com",
    "icloud.com",
    "mail.com",
];

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s]{3,}$").expect("heading pattern"));

/// "Benefits" or "Benefits:" on its own line reads as a section heading.
fn looks_like_heading(line: &str) -> bool {
    HEADING_RE.is_match(line.strip_suffix(':').unwrap_or(line))
}

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s+(.*)$").expect("bullet pattern"));

/// Non-empty trimmed lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Extracts logical content blocks following section headings such as
/// "Responsibilities" / "Requirements" / "Benefits". A block ends at the next
/// standalone heading-looking line.
pub fn find_section_blocks(text: &str, keywords: &[&str]) -> Vec<String> {
    let mut results = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut capture = false;

    for line in split_lines(text) {
        let lower = line.to_lowercase();

        if keywords.iter().any(|k| lower.contains(k)) {
            if !buffer.is_empty() {
                results.push(buffer.join("\n"));
            }
            buffer = Vec::new();
            capture = true;
            continue;
        }

        if capture {
            if looks_like_heading(line) {
                capture = false;
                if !buffer.is_empty() {
                    results.push(buffer.join("\n"));
                }
                buffer = Vec::new();
                continue;
            }
            buffer.push(line);
        }
    }

    if !buffer.is_empty() {
        results.push(buffer.join("\n"));
    }

    results
}

/// Pulls bullet-style lines (`- x`, `* x`, `• x`) out of a block.
pub fn extract_bullets(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|l| {
            BULLET_RE
                .captures(l.trim())
                .map(|c| c[1].trim().to_string())
        })
        .filter(|b| !b.is_empty())
        .collect()
}

/// Clamps a confidence into [0, 1] and rounds to two decimals.
pub fn clamp_confidence(value: f64) -> f64 {
    round2(value.clamp(0.0, 1.0))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
