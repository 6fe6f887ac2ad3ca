//! Core entry points tying ingestion, parsing, and rule evaluation together.
//! Pasted text and page markup arrive here interchangeably; markup goes
//! through extraction and the strict normalizer first.

use crate::analysis::engine::{run_all_rules, AnalysisReport};
use crate::ingestion::extractor::extract_job_description;
use crate::ingestion::normalizer::{normalize_job_description, normalize_text};
use crate::ingestion::IngestError;
use crate::parsing::parser::parse_jd;

#[derive(Debug, Clone)]
pub enum AnalysisInput {
    /// Raw pasted posting text. Gets the pure cleanup only; the parser's own
    /// short-input guard handles tiny pastes.
    Text(String),
    /// Page markup; must clear extraction and the minimum-length floor.
    Markup(String),
}

pub fn analyze(input: &AnalysisInput) -> Result<AnalysisReport, IngestError> {
    let text = match input {
        AnalysisInput::Text(text) => normalize_text(text),
        AnalysisInput::Markup(html) => {
            let extracted = extract_job_description(html)?;
            normalize_job_description(&extracted)?
        }
    };

    let ctx = parse_jd(&text);
    tracing::debug!(
        confidence = ctx.confidence_score,
        emails = ctx.emails.len(),
        "built analysis context"
    );
    Ok(run_all_rules(&ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_path_scores_scam() {
        let input = AnalysisInput::Text(
            "Urgent hiring! Join immediately. Earn ₹80,000 per month. No experience required. \
             Contact us at randomcompany@gmail.com"
                .to_string(),
        );
        let report = analyze(&input).unwrap();
        assert_eq!(report.rule_score, 1.0);
        assert!(report.reasons.len() >= 3);
    }

    #[test]
    fn test_markup_path_end_to_end() {
        let body = "Urgent hiring! Join immediately and earn ₹80,000 per month with us. \
                    No experience required for this opening, anyone can apply today. \
                    Contact us at randomcompany@gmail.com right now. Limited slots only, \
                    act fast because positions close very soon for this amazing opening.";
        let html = format!(
            "<html><head><title>Work From Home Jobs</title></head>\
             <body><nav>menu</nav><div><p>{body}</p></div></body></html>"
        );
        let report = analyze(&AnalysisInput::Markup(html)).unwrap();
        assert!(report.rule_score > 0.5);
        assert!(!report.reasons.is_empty());
    }

    #[test]
    fn test_markup_path_fails_on_empty_page() {
        let err = analyze(&AnalysisInput::Markup("<html><body></body></html>".into())).unwrap_err();
        assert_eq!(err, IngestError::ExtractionFailed);
    }

    #[test]
    fn test_text_path_never_fails_on_short_input() {
        let report = analyze(&AnalysisInput::Text("tiny".into())).unwrap();
        assert!((0.0..=1.0).contains(&report.rule_score));
    }
}
