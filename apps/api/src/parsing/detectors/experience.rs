//! Experience detector: "2+ years", "0-2 years", "minimum 5 years",
//! "freshers", "no experience required".

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceSignal {
    pub years_min: Option<u32>,
    pub years_max: Option<u32>,
    pub confidence: f64,
}

const FRESHER_PATTERNS: &[&str] = &[
    r"\bfreshers?\b",
    r"\bno experience required\b",
    r"\bno prior experience\b",
    r"\bentry level\b",
];

static FRESHER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FRESHER_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("fresher pattern"))
        .collect()
});

// Range before the bare form: "2-4 years" must not be consumed as "4 years".
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+)\s*-\s*(\d+)\s*(?:years|year|yrs|yr)\b").expect("range pattern")
});

static MINIMUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:minimum|at\s+least)\s+(\d+)\s*(?:years|year|yrs|yr)\b")
        .expect("minimum pattern")
});

static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\+?\s*(?:years|year|yrs|yr)\b").expect("bare pattern"));

pub fn detect_experience(text: &str) -> ExperienceSignal {
    if text.is_empty() {
        return ExperienceSignal::default();
    }

    let lower = text.to_lowercase();

    if FRESHER_RES.iter().any(|re| re.is_match(&lower)) {
        return ExperienceSignal {
            years_min: Some(0),
            years_max: Some(1),
            confidence: 0.9,
        };
    }

    if let Some(caps) = RANGE_RE.captures(&lower) {
        if let (Ok(min), Ok(max)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            return ExperienceSignal {
                years_min: Some(min),
                years_max: Some(max),
                confidence: if min >= 2 { 0.9 } else { 0.75 },
            };
        }
    }

    for re in [&*MINIMUM_RE, &*BARE_RE] {
        if let Some(caps) = re.captures(&lower) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return ExperienceSignal {
                    years_min: Some(years),
                    years_max: Some(years + 1),
                    confidence: if years >= 2 { 0.85 } else { 0.7 },
                };
            }
        }
    }

    ExperienceSignal::default()
}
