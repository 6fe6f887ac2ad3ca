//! Structured representation of a job posting. Built once per request by the
//! parser and consumed read-only by the rule and insight layers.

use serde::{Deserialize, Serialize};

/// Working model advertised by the posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteMode {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryFrequency {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
}

/// Recognized hiring-process steps, in the order the detector scans for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringStep {
    Interview,
    Screening,
    Assessment,
    BackgroundCheck,
    OfferStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Low,
    Mid,
    High,
}

/// Where a company name was inferred from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySource {
    FirstLine,
    EmailDomain,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryInfo {
    pub raw_text: Option<String>,
    pub currency: Option<Currency>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub frequency: Option<SalaryFrequency>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub inferred_from: Option<CompanySource>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRoleInfo {
    pub title: Option<String>,
    pub seniority: Option<Seniority>,

    pub location: Option<String>,
    pub location_confidence: f64,

    pub employment_type: Option<EmploymentType>,
    pub employment_confidence: f64,

    pub years_experience: Option<u32>,
    pub experience_confidence: f64,

    pub remote_mode: Option<RemoteMode>,
    pub remote_confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HiringFlowInfo {
    pub steps: Vec<HiringStep>,
    pub mentions_interview: bool,
    pub suspicious_fast_track: bool,
    pub confidence: f64,
}

/// Root aggregate handed to every rule. Rules receive `&JdContext` and can
/// never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JdContext {
    /// Normalized posting text. Always present; empty is a valid
    /// low-information value.
    pub raw_text: String,

    pub company: CompanyInfo,
    pub job: JobRoleInfo,
    pub salary: SalaryInfo,

    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,

    /// Deduplicated, sorted.
    pub emails: Vec<String>,
    /// Deduplicated, sorted.
    pub phone_numbers: Vec<String>,

    pub hiring_flow: HiringFlowInfo,

    pub confidence_score: f64,
}

impl JdContext {
    /// Context for input too short to parse. Carries only the raw text and a
    /// fixed low confidence so downstream rules still get something to chew on.
    pub fn low_signal(raw_text: impl Into<String>, confidence: f64) -> Self {
        JdContext {
            raw_text: raw_text.into(),
            confidence_score: confidence,
            ..JdContext::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_serializes_kebab_case() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, r#""full-time""#);
    }

    #[test]
    fn test_hiring_step_serializes_snake_case() {
        let json = serde_json::to_string(&HiringStep::BackgroundCheck).unwrap();
        assert_eq!(json, r#""background_check""#);
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        let json = serde_json::to_string(&Currency::Inr).unwrap();
        assert_eq!(json, r#""INR""#);
    }

    #[test]
    fn test_low_signal_context_defaults() {
        let ctx = JdContext::low_signal("too short", 0.2);
        assert_eq!(ctx.raw_text, "too short");
        assert_eq!(ctx.confidence_score, 0.2);
        assert!(ctx.emails.is_empty());
        assert!(ctx.company.name.is_none());
    }
}
