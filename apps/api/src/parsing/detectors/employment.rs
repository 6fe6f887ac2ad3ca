//! Employment-type detector: full-time / part-time / contract / internship /
//! temporary.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::EmploymentType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmploymentSignal {
    pub employment_type: Option<EmploymentType>,
    pub confidence: f64,
}

const EMPLOYMENT_PATTERNS: &[(EmploymentType, &[&str])] = &[
    (
        EmploymentType::FullTime,
        &[
            r"\bfull[\s\-]?time\b",
            r"\bpermanent\b",
            r"\bregular employment\b",
        ],
    ),
    (EmploymentType::PartTime, &[r"\bpart[\s\-]?time\b"]),
    (
        EmploymentType::Contract,
        &[
            r"\bcontract\b",
            r"\bcontractual\b",
            r"\bfixed term\b",
            r"\b6 month contract\b",
            r"\b12 month contract\b",
        ],
    ),
    (
        EmploymentType::Internship,
        &[r"\bintern(?:ship)?\b", r"\btrainee\b"],
    ),
    (
        EmploymentType::Temporary,
        &[r"\btemporary\b", r"\bfreelance\b", r"\bgig work\b"],
    ),
];

static EMPLOYMENT_RES: LazyLock<Vec<(EmploymentType, Vec<Regex>)>> = LazyLock::new(|| {
    EMPLOYMENT_PATTERNS
        .iter()
        .map(|(kind, patterns)| {
            let res = patterns
                .iter()
                .map(|p| Regex::new(p).expect("employment pattern"))
                .collect();
            (*kind, res)
        })
        .collect()
});

fn type_confidence(kind: EmploymentType) -> f64 {
    // Explicit full-time / contract wording is a stronger commitment than the
    // softer categories.
    match kind {
        EmploymentType::FullTime | EmploymentType::Contract => 0.9,
        _ => 0.75,
    }
}

pub fn detect_employment_type(text: &str) -> EmploymentSignal {
    if text.is_empty() {
        return EmploymentSignal::default();
    }

    let lower = text.to_lowercase();

    let mut best: Option<EmploymentType> = None;
    let mut best_confidence = 0.0;

    for (kind, res) in EMPLOYMENT_RES.iter() {
        if res.iter().any(|re| re.is_match(&lower)) {
            let confidence = type_confidence(*kind);
            if confidence > best_confidence {
                best = Some(*kind);
                best_confidence = confidence;
            }
        }
    }

    EmploymentSignal {
        employment_type: best,
        confidence: best_confidence,
    }
}
