//! HTTP handler for the analysis endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::analysis::engine::AnalysisReport;
use crate::analysis::pipeline::{analyze, AnalysisInput};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_text: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
}

/// POST /api/v1/analyze: scores a posting given pasted text or a URL.
/// Missing input is a scored-zero distinguished response, not an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let job_text = request.job_text.as_deref().map(str::trim).unwrap_or("");
    let job_url = request.job_url.as_deref().map(str::trim).unwrap_or("");

    if !job_text.is_empty() {
        info!(chars = job_text.chars().count(), "analyzing pasted job text");
        let report = analyze(&AnalysisInput::Text(job_text.to_string()))
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
        return Ok(Json(report));
    }

    if !job_url.is_empty() {
        info!(url = job_url, "analyzing job posting by URL");
        let outcome = state.fetcher.fetch(job_url).await;
        if !outcome.success {
            let reason = outcome
                .reason
                .unwrap_or_else(|| "fetch failed".to_string());
            return Err(AppError::UpstreamFetch(reason));
        }
        let html = outcome.html.unwrap_or_default();
        let report = analyze(&AnalysisInput::Markup(html))
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
        return Ok(Json(report));
    }

    Ok(Json(AnalysisReport::invalid_input()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::ingestion::fetcher::{FetchOutcome, PageFetcher};

    struct StubFetcher {
        outcome: FetchOutcome,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> FetchOutcome {
            self.outcome.clone()
        }
    }

    fn state_with(outcome: FetchOutcome) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                fetch_timeout_secs: 1,
            },
            fetcher: Arc::new(StubFetcher { outcome }),
        }
    }

    fn ok_outcome(html: &str) -> FetchOutcome {
        FetchOutcome {
            success: true,
            status_code: Some(200),
            html: Some(html.to_string()),
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_empty_request_gets_distinguished_response() {
        let state = state_with(ok_outcome(""));
        let request = AnalyzeRequest {
            job_text: Some("   ".to_string()),
            job_url: None,
        };
        let Json(report) = handle_analyze(State(state), Json(request)).await.unwrap();
        assert_eq!(report.rule_score, 0.0);
        assert_eq!(report.reasons.len(), 1);
        assert!(report.reasons[0].contains("Invalid analysis input"));
    }

    #[tokio::test]
    async fn test_text_takes_priority_and_scores() {
        let state = state_with(ok_outcome(""));
        let request = AnalyzeRequest {
            job_text: Some(
                "Urgent hiring! Join immediately. Earn ₹80,000 per month. No experience \
                 required. Contact us at randomcompany@gmail.com"
                    .to_string(),
            ),
            job_url: Some("https://example.com/job".to_string()),
        };
        let Json(report) = handle_analyze(State(state), Json(request)).await.unwrap();
        assert_eq!(report.rule_score, 1.0);
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_reason() {
        let state = state_with(FetchOutcome {
            success: false,
            status_code: Some(503),
            html: None,
            reason: Some("http_error_503".to_string()),
        });
        let request = AnalyzeRequest {
            job_text: None,
            job_url: Some("https://example.com/job".to_string()),
        };
        let err = handle_analyze(State(state), Json(request)).await.unwrap_err();
        match err {
            AppError::UpstreamFetch(reason) => assert_eq!(reason, "http_error_503"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unextractable_page_is_unprocessable() {
        let state = state_with(ok_outcome("<html><body><p>nothing here</p></body></html>"));
        let request = AnalyzeRequest {
            job_text: None,
            job_url: Some("https://example.com/job".to_string()),
        };
        let err = handle_analyze(State(state), Json(request)).await.unwrap_err();
        match err {
            AppError::UnprocessableEntity(msg) => {
                assert!(msg.contains("extraction failed"), "got: {msg}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
