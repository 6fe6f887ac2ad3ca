//! Compensation-integrity rules: salaries that don't add up against the
//! advertised experience or seniority.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::schema::{Currency, JdContext, SalaryFrequency, SalaryInfo, Seniority};
use crate::rules::{RuleResult, RuleSignal};

// Heuristic monthly thresholds per currency. Hardcoded calibration constants;
// there is no principled model behind them.
const INR_HIGH_MONTHLY: f64 = 70_000.0;
const INR_MEDIUM_MONTHLY: f64 = 40_000.0;
const USD_HIGH_MONTHLY: f64 = 8_000.0;
const USD_MEDIUM_MONTHLY: f64 = 5_000.0;
const EUR_HIGH_MONTHLY: f64 = 7_000.0;
const EUR_MEDIUM_MONTHLY: f64 = 4_500.0;
const GBP_HIGH_MONTHLY: f64 = 6_500.0;
const GBP_MEDIUM_MONTHLY: f64 = 4_000.0;

/// (high, medium) monthly thresholds. Unknown currency falls back to the INR
/// bands.
fn thresholds(currency: Option<Currency>) -> (f64, f64) {
    match currency {
        Some(Currency::Usd) => (USD_HIGH_MONTHLY, USD_MEDIUM_MONTHLY),
        Some(Currency::Eur) => (EUR_HIGH_MONTHLY, EUR_MEDIUM_MONTHLY),
        Some(Currency::Gbp) => (GBP_HIGH_MONTHLY, GBP_MEDIUM_MONTHLY),
        Some(Currency::Inr) | None => (INR_HIGH_MONTHLY, INR_MEDIUM_MONTHLY),
    }
}

/// Normalizes a detected amount to a monthly figure before thresholding.
pub(crate) fn monthly_amount(salary: &SalaryInfo) -> Option<f64> {
    let amount = salary.amount_max.or(salary.amount_min)?;
    let factor = match salary.frequency {
        Some(SalaryFrequency::Year) => 1.0 / 12.0,
        Some(SalaryFrequency::Hour) => 160.0,
        Some(SalaryFrequency::Week) => 4.0,
        Some(SalaryFrequency::Day) => 22.0,
        Some(SalaryFrequency::Month) | None => 1.0,
    };
    Some(amount * factor)
}

static POSITIVE_EXPERIENCE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d+\+?\s*(?:years|yrs)\b",
        r"\bminimum\s+\d+\s*(?:years|yrs)\b",
        r"\brequires?\s+\d+\s*(?:years|yrs)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern"))
    .collect()
});

static NEGATIVE_EXPERIENCE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bno experience\b",
        r"\bfreshers?\b",
        r"\banyone can apply\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern"))
    .collect()
});

/// High pay with no credible experience requirement.
pub fn unrealistic_salary_rule(ctx: &JdContext) -> RuleResult {
    let Some(monthly) = monthly_amount(&ctx.salary) else {
        return Ok(RuleSignal::clean());
    };
    let (high, _) = thresholds(ctx.salary.currency);
    if monthly < high {
        return Ok(RuleSignal::clean());
    }

    let lower = ctx.raw_text.to_lowercase();
    let has_negative = NEGATIVE_EXPERIENCE_RES.iter().any(|re| re.is_match(&lower));
    let has_positive = POSITIVE_EXPERIENCE_RES.iter().any(|re| re.is_match(&lower));

    if has_negative {
        return Ok(RuleSignal::flag(
            0.7,
            "High salary offered while explicitly requiring no experience",
        ));
    }
    if !has_positive {
        return Ok(RuleSignal::flag(
            0.6,
            "High salary with no credible experience requirement",
        ));
    }

    Ok(RuleSignal::clean())
}

/// Seniority inferred from the title against the advertised pay band.
pub fn role_salary_mismatch_rule(ctx: &JdContext) -> RuleResult {
    let Some(seniority) = ctx.job.seniority else {
        return Ok(RuleSignal::clean());
    };
    let Some(monthly) = monthly_amount(&ctx.salary) else {
        return Ok(RuleSignal::clean());
    };

    let (high, medium) = thresholds(ctx.salary.currency);
    let is_high = monthly >= high;
    let is_medium = monthly >= medium;

    match seniority {
        Seniority::Low if is_high => Ok(RuleSignal::flag(
            0.85,
            "Entry-level role claims unusually high salary",
        )),
        Seniority::Low if is_medium => Ok(RuleSignal::flag(
            0.6,
            "Entry-level role salary appears suspiciously inflated",
        )),
        Seniority::Mid if is_high && ctx.raw_text.to_lowercase().contains("no experience") => {
            Ok(RuleSignal::flag(
                0.75,
                "High salary offered despite no strong seniority requirement",
            ))
        }
        _ => Ok(RuleSignal::clean()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parser::parse_jd;

    fn salary(amount: f64, currency: Currency, frequency: SalaryFrequency) -> SalaryInfo {
        SalaryInfo {
            raw_text: None,
            currency: Some(currency),
            amount_min: Some(amount),
            amount_max: Some(amount),
            frequency: Some(frequency),
            confidence: 1.0,
        }
    }

    #[test]
    fn test_monthly_normalization_yearly() {
        let s = salary(1_200_000.0, Currency::Inr, SalaryFrequency::Year);
        assert_eq!(monthly_amount(&s), Some(100_000.0));
    }

    #[test]
    fn test_monthly_normalization_hourly() {
        let s = salary(500.0, Currency::Inr, SalaryFrequency::Hour);
        assert_eq!(monthly_amount(&s), Some(80_000.0));
    }

    #[test]
    fn test_monthly_normalization_weekly_and_daily() {
        let weekly = salary(1_000.0, Currency::Usd, SalaryFrequency::Week);
        assert_eq!(monthly_amount(&weekly), Some(4_000.0));
        let daily = salary(100.0, Currency::Usd, SalaryFrequency::Day);
        assert_eq!(monthly_amount(&daily), Some(2_200.0));
    }

    #[test]
    fn test_high_salary_no_experience_flags() {
        let ctx = parse_jd(
            "Earn ₹80,000 per month from day one. No experience required, anyone can apply today!",
        );
        let signal = unrealistic_salary_rule(&ctx).unwrap();
        assert_eq!(signal.score, 0.7);
    }

    #[test]
    fn test_high_salary_with_real_experience_requirement_clean() {
        let ctx = parse_jd(
            "Senior engineer position. ₹120,000 per month. Requires 7+ years of systems work.",
        );
        assert_eq!(unrealistic_salary_rule(&ctx).unwrap(), RuleSignal::clean());
    }

    #[test]
    fn test_modest_salary_clean() {
        let ctx = parse_jd("Pay is ₹30,000 per month. Freshers welcome to apply for this role.");
        assert_eq!(unrealistic_salary_rule(&ctx).unwrap(), RuleSignal::clean());
    }

    #[test]
    fn test_intern_with_high_salary_flags() {
        let mut ctx = parse_jd(
            "Intern developer wanted, great learning environment and serious growth here.",
        );
        ctx.job.seniority = Some(Seniority::Low);
        ctx.salary = salary(90_000.0, Currency::Inr, SalaryFrequency::Month);
        let signal = role_salary_mismatch_rule(&ctx).unwrap();
        assert_eq!(signal.score, 0.85);
    }

    #[test]
    fn test_intern_with_medium_salary_flags_lower() {
        let mut ctx = JdContext::default();
        ctx.job.seniority = Some(Seniority::Low);
        ctx.salary = salary(50_000.0, Currency::Inr, SalaryFrequency::Month);
        let signal = role_salary_mismatch_rule(&ctx).unwrap();
        assert_eq!(signal.score, 0.6);
    }

    #[test]
    fn test_mid_high_salary_needs_no_experience_claim() {
        let mut ctx = JdContext {
            raw_text: "Developer role, no experience needed".to_string(),
            ..JdContext::default()
        };
        ctx.job.seniority = Some(Seniority::Mid);
        ctx.salary = salary(100_000.0, Currency::Inr, SalaryFrequency::Month);
        let signal = role_salary_mismatch_rule(&ctx).unwrap();
        assert_eq!(signal.score, 0.75);
    }

    #[test]
    fn test_senior_high_salary_clean() {
        let mut ctx = JdContext::default();
        ctx.job.seniority = Some(Seniority::High);
        ctx.salary = salary(200_000.0, Currency::Inr, SalaryFrequency::Month);
        assert_eq!(role_salary_mismatch_rule(&ctx).unwrap(), RuleSignal::clean());
    }

    #[test]
    fn test_usd_thresholds() {
        let mut ctx = JdContext::default();
        ctx.job.seniority = Some(Seniority::Low);
        ctx.salary = salary(9_000.0, Currency::Usd, SalaryFrequency::Month);
        assert_eq!(role_salary_mismatch_rule(&ctx).unwrap().score, 0.85);
    }
}
