//! Location / work-mode detector. Prefers returning low confidence over
//! guessing wrong structured data.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::RemoteMode;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSignal {
    pub location: Option<String>,
    pub location_confidence: f64,
    pub remote_mode: Option<RemoteMode>,
    pub remote_confidence: f64,
}

const REMOTE_PATTERNS: &[&str] = &[
    r"\bremote\b",
    r"\bwork from home\b",
    r"\bwork-from-home\b",
    r"\bwork from anywhere\b",
    r"\banywhere\b",
];

const HYBRID_PATTERNS: &[&str] = &[
    r"\bhybrid\b",
    r"\bpartial remote\b",
    r"\b2-3 days office\b",
    r"\bsplit work model\b",
];

const ONSITE_PATTERNS: &[&str] = &[
    r"\bonsite\b",
    r"\bon-site\b",
    r"\boffice based\b",
    r"\bwork from office\b",
];

static REMOTE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(REMOTE_PATTERNS));
static HYBRID_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(HYBRID_PATTERNS));
static ONSITE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(ONSITE_PATTERNS));

static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+(?:\s[A-Z][a-zA-Z]+)*(?:,\s*[A-Z][a-zA-Z]+)?\b")
        .expect("place pattern")
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("work-mode pattern"))
        .collect()
}

fn detect_remote_mode(lower: &str) -> (Option<RemoteMode>, f64) {
    if REMOTE_RES.iter().any(|re| re.is_match(lower)) {
        return (Some(RemoteMode::Remote), 0.9);
    }
    if HYBRID_RES.iter().any(|re| re.is_match(lower)) {
        return (Some(RemoteMode::Hybrid), 0.85);
    }
    if ONSITE_RES.iter().any(|re| re.is_match(lower)) {
        return (Some(RemoteMode::Onsite), 0.8);
    }
    (None, 0.0)
}

/// Lightweight place-name guess from capitalized token runs. No city list;
/// generic section-header words and long runs are rejected instead.
fn detect_location_name(text: &str) -> (Option<String>, f64) {
    for m in PLACE_RE.find_iter(text) {
        let candidate = m.as_str().trim();
        if candidate.is_empty() || candidate.split_whitespace().count() > 5 {
            continue;
        }
        let lower = candidate.to_lowercase();
        if ["responsibilities", "requirements", "benefits"].contains(&lower.as_str()) {
            continue;
        }
        return (Some(candidate.to_string()), 0.75);
    }
    (None, 0.0)
}

pub fn detect_location(text: &str) -> LocationSignal {
    if text.is_empty() {
        return LocationSignal::default();
    }

    let lower = text.to_lowercase();
    let (remote_mode, remote_confidence) = detect_remote_mode(&lower);
    let (location, mut location_confidence) = detect_location_name(text);

    // A city mentioned in a remote posting rarely means much.
    if remote_mode == Some(RemoteMode::Remote) && location.is_some() {
        location_confidence = location_confidence.min(0.4);
    }

    LocationSignal {
        location,
        location_confidence,
        remote_mode,
        remote_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_beats_hybrid_and_onsite() {
        let signal = detect_location("remote or hybrid or onsite, you choose");
        assert_eq!(signal.remote_mode, Some(RemoteMode::Remote));
        assert_eq!(signal.remote_confidence, 0.9);
    }

    #[test]
    fn test_hybrid() {
        let signal = detect_location("this is a hybrid role");
        assert_eq!(signal.remote_mode, Some(RemoteMode::Hybrid));
        assert_eq!(signal.remote_confidence, 0.85);
    }

    #[test]
    fn test_onsite() {
        let signal = detect_location("work from office only");
        assert_eq!(signal.remote_mode, Some(RemoteMode::Onsite));
        assert_eq!(signal.remote_confidence, 0.8);
    }

    #[test]
    fn test_place_name_extracted() {
        let signal = detect_location("based in Bangalore, India with a great team");
        assert_eq!(signal.location.as_deref(), Some("Bangalore, India"));
        assert_eq!(signal.location_confidence, 0.75);
    }

    #[test]
    fn test_section_header_not_a_place() {
        let signal = detect_location("Responsibilities include shipping code");
        assert_ne!(signal.location.as_deref(), Some("Responsibilities"));
    }

    #[test]
    fn test_remote_caps_place_confidence() {
        let signal = detect_location("Remote role, office in Mumbai if you want it");
        assert_eq!(signal.remote_mode, Some(RemoteMode::Remote));
        assert!(signal.location.is_some());
        assert!(signal.location_confidence <= 0.4);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(detect_location(""), LocationSignal::default());
    }
}
