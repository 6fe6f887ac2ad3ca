//! Salary detector: currency, amount range, payout frequency. Extraction
//! only; whether an amount is suspicious is the rules layer's call.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::{Currency, SalaryFrequency, SalaryInfo};
use crate::parsing::utils::clamp_confidence;

const CURRENCY_SYMBOLS: &[(&str, Currency)] = &[
    ("₹", Currency::Inr),
    ("$", Currency::Usd),
    ("€", Currency::Eur),
    ("£", Currency::Gbp),
];

// Word forms matched on word boundaries; "years" must not read as "rs".
static CURRENCY_WORD_RES: LazyLock<Vec<(Regex, Currency)>> = LazyLock::new(|| {
    [
        (r"\busd\b|\bdollars?\b", Currency::Usd),
        (r"\binr\b|\brs\.?\b|\brupees\b", Currency::Inr),
        (r"\beur\b|\beuros?\b", Currency::Eur),
        (r"\bgbp\b|\bpounds?\b", Currency::Gbp),
    ]
    .into_iter()
    .map(|(p, c)| (Regex::new(p).expect("currency pattern"), c))
    .collect()
});

const FREQUENCY_PATTERNS: &[(SalaryFrequency, &[&str])] = &[
    (
        SalaryFrequency::Month,
        &[r"\bper\s*month\b", r"\bmonthly\b", r"/\s*month"],
    ),
    (
        SalaryFrequency::Year,
        &[
            r"\bper\s*year\b",
            r"\bper\s*annum\b",
            r"\bannually\b",
            r"\byearly\b",
            r"/\s*year",
        ],
    ),
    (
        SalaryFrequency::Week,
        &[r"\bper\s*week\b", r"\bweekly\b", r"/\s*week"],
    ),
    (
        SalaryFrequency::Day,
        &[r"\bper\s*day\b", r"\bdaily\b", r"/\s*day"],
    ),
    (
        SalaryFrequency::Hour,
        &[r"\bper\s*hour\b", r"\bhourly\b", r"/\s*hour"],
    ),
];

static FREQUENCY_RES: LazyLock<Vec<(SalaryFrequency, Vec<Regex>)>> = LazyLock::new(|| {
    FREQUENCY_PATTERNS
        .iter()
        .map(|(freq, patterns)| {
            let res = patterns
                .iter()
                .map(|p| Regex::new(p).expect("frequency pattern"))
                .collect();
            (*freq, res)
        })
        .collect()
});

// Amounts need at least three digit/comma characters so stray small integers
// ("2+ years") never register as salaries.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(₹|\$|€|£)?\s*(\d[\d,]{2,})(?:\s*-\s*(₹|\$|€|£)?\s*(\d[\d,]{2,}))?")
        .expect("amount pattern")
});

fn detect_frequency(lower: &str) -> Option<SalaryFrequency> {
    for (freq, res) in FREQUENCY_RES.iter() {
        if res.iter().any(|re| re.is_match(lower)) {
            return Some(*freq);
        }
    }
    None
}

fn detect_currency(symbol: Option<&str>, lower: &str) -> Option<Currency> {
    if let Some(sym) = symbol {
        if let Some((_, currency)) = CURRENCY_SYMBOLS.iter().find(|(s, _)| *s == sym) {
            return Some(*currency);
        }
    }
    CURRENCY_WORD_RES
        .iter()
        .find(|(re, _)| re.is_match(lower))
        .map(|(_, c)| *c)
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

pub fn detect_salary(text: &str) -> SalaryInfo {
    if text.is_empty() {
        return SalaryInfo::default();
    }

    let Some(caps) = AMOUNT_RE.captures(text) else {
        return SalaryInfo::default();
    };

    let lower = text.to_lowercase();

    let symbol = caps.get(1).or(caps.get(3)).map(|m| m.as_str());
    let currency = detect_currency(symbol, &lower);

    let mut amount_min = caps.get(2).and_then(|m| parse_amount(m.as_str()));
    let mut amount_max = caps
        .get(4)
        .and_then(|m| parse_amount(m.as_str()))
        .or(amount_min);
    if let (Some(min), Some(max)) = (amount_min, amount_max) {
        if min > max {
            (amount_min, amount_max) = (Some(max), Some(min));
        }
    }

    let frequency = detect_frequency(&lower);

    let mut confidence = 0.0;
    if currency.is_some() {
        confidence += 0.3;
    }
    if amount_min.is_some() {
        confidence += 0.4;
    }
    if frequency.is_some() {
        confidence += 0.3;
    }

    SalaryInfo {
        raw_text: Some(caps.get(0).map(|m| m.as_str().trim().to_string()).unwrap_or_default()),
        currency,
        amount_min,
        amount_max,
        frequency,
        confidence: clamp_confidence(confidence),
    }
}
