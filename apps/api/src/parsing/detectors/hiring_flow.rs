//! Hiring-flow detector: which recruitment steps a posting mentions, plus
//! suspicious "no interview / instant offer" claims. Extraction only.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::{HiringFlowInfo, HiringStep};
use crate::parsing::utils::clamp_confidence;

const HIRING_KEYWORDS: &[(HiringStep, &[&str])] = &[
    (
        HiringStep::Interview,
        &[
            r"\binterview\b",
            r"\btechnical interview\b",
            r"\bhr interview\b",
            r"\btelephonic interview\b",
            r"\bvirtual interview\b",
            r"\bvideo interview\b",
        ],
    ),
    (
        HiringStep::Screening,
        &[
            r"\bscreening\b",
            r"\bshortlist(?:ed|ing)?\b",
            r"\bprofile review\b",
        ],
    ),
    (
        HiringStep::Assessment,
        &[
            r"\bassignment\b",
            r"\bassessment\b",
            r"\btest\b",
            r"\bcoding test\b",
            r"\baptitude test\b",
        ],
    ),
    (
        HiringStep::BackgroundCheck,
        &[
            r"\bbackground\b",
            r"\bverification\b",
            r"\bdocument verification\b",
        ],
    ),
    (
        HiringStep::OfferStage,
        &[
            r"\boffer letter\b",
            r"\bselection letter\b",
            r"\bjoining letter\b",
        ],
    ),
];

const SUSPICIOUS_NO_PROCESS_PATTERNS: &[&str] = &[
    r"\bno interview\b",
    r"\bno interview required\b",
    r"\bno selection process\b",
    r"\bguaranteed selection\b",
    r"\binstant offer\b",
    r"\binstant joining\b",
];

static HIRING_RES: LazyLock<Vec<(HiringStep, Vec<Regex>)>> = LazyLock::new(|| {
    HIRING_KEYWORDS
        .iter()
        .map(|(step, patterns)| {
            let res = patterns
                .iter()
                .map(|p| Regex::new(p).expect("hiring pattern"))
                .collect();
            (*step, res)
        })
        .collect()
});

static SUSPICIOUS_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUSPICIOUS_NO_PROCESS_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("fast-track pattern"))
        .collect()
});

pub fn detect_hiring_flow(text: &str) -> HiringFlowInfo {
    if text.is_empty() {
        return HiringFlowInfo::default();
    }

    let lower = text.to_lowercase();

    let mut steps: Vec<HiringStep> = Vec::new();
    for (step, res) in HIRING_RES.iter() {
        if res.iter().any(|re| re.is_match(&lower)) && !steps.contains(step) {
            steps.push(*step);
        }
    }

    let mentions_interview = steps.contains(&HiringStep::Interview);
    let suspicious_fast_track = SUSPICIOUS_RES.iter().any(|re| re.is_match(&lower));

    let mut confidence = 0.0;
    if !steps.is_empty() {
        confidence += 0.6;
    }
    if mentions_interview {
        confidence += 0.2;
    }
    if suspicious_fast_track {
        confidence += 0.2;
    }

    HiringFlowInfo {
        steps,
        mentions_interview,
        suspicious_fast_track,
        confidence: clamp_confidence(confidence),
    }
}
