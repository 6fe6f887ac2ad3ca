//! URL fetch collaborator. Retrieves raw HTML from job-posting URLs with
//! retries, timeouts, and validation, and reports failures as data instead of
//! errors so the handler can relay a useful reason.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(800);
const RETRYABLE_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Pages under this are placeholders or block screens, not job postings.
const MIN_HTML_LEN: usize = 200;
/// Larger bodies are truncated to protect memory.
const MAX_HTML_BYTES: usize = 2_000_000;

const CAPTCHA_KEYWORDS: &[&str] = &[
    "captcha",
    "robot check",
    "verify you are human",
    "cloudflare",
    "are you a robot",
];

/// Outcome of a fetch. `reason` is a short machine-readable tag on failure.
#[derive(Debug, Clone, Serialize)]
pub struct FetchOutcome {
    pub success: bool,
    pub status_code: Option<u16>,
    pub html: Option<String>,
    pub reason: Option<String>,
}

impl FetchOutcome {
    fn failure(status_code: Option<u16>, reason: impl Into<String>) -> Self {
        FetchOutcome {
            success: false,
            status_code,
            html: None,
            reason: Some(reason.into()),
        }
    }
}

/// Page retrieval boundary. Carried in `AppState` as `Arc<dyn PageFetcher>`
/// so tests can inject a stub instead of hitting the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(read_timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(read_timeout_secs))
            .build()?;
        Ok(HttpPageFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let parsed = match reqwest::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return FetchOutcome::failure(None, "invalid_url"),
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return FetchOutcome::failure(None, "only http/https URLs are allowed");
        }
        if parsed.host_str().is_none() {
            return FetchOutcome::failure(None, "invalid_url");
        }

        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            let result = self
                .client
                .get(parsed.clone())
                .header("Accept-Language", "en-US,en;q=0.9")
                .header(
                    "Accept",
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                )
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if RETRYABLE_STATUSES.contains(&status) && attempt < MAX_ATTEMPTS {
                        tracing::debug!(url, status, attempt, "retrying fetch");
                        tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                        continue;
                    }
                    break response;
                }
                Err(err) if err.is_timeout() => {
                    return FetchOutcome::failure(None, "network_timeout");
                }
                Err(err) => {
                    return FetchOutcome::failure(None, format!("network_error: {err}"));
                }
            }
        };

        let status = response.status().as_u16();
        if status >= 400 {
            return FetchOutcome::failure(Some(status), format!("http_error_{status}"));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return FetchOutcome::failure(Some(status), "non_html_content");
        }

        let mut html = match response.text().await {
            Ok(body) => body,
            Err(err) => return FetchOutcome::failure(Some(status), format!("body_error: {err}")),
        };

        if html.trim().chars().count() < MIN_HTML_LEN {
            return FetchOutcome::failure(Some(status), "empty_or_too_small");
        }

        if looks_like_captcha(&html) {
            return FetchOutcome::failure(Some(status), "blocked_by_site_captcha");
        }

        if html.len() > MAX_HTML_BYTES {
            let mut cut = MAX_HTML_BYTES;
            while !html.is_char_boundary(cut) {
                cut -= 1;
            }
            html.truncate(cut);
        }

        FetchOutcome {
            success: true,
            status_code: Some(status),
            html: Some(html),
            reason: None,
        }
    }
}

fn looks_like_captcha(html: &str) -> bool {
    let lower = html.to_lowercase();
    CAPTCHA_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let fetcher = HttpPageFetcher::new(10).unwrap();
        let outcome = fetcher.fetch("file:///etc/passwd").await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.reason.as_deref(),
            Some("only http/https URLs are allowed")
        );
    }

    #[tokio::test]
    async fn test_rejects_garbage_url() {
        let fetcher = HttpPageFetcher::new(10).unwrap();
        let outcome = fetcher.fetch("not a url at all").await;
        assert!(!outcome.success);
        assert_eq!(outcome.reason.as_deref(), Some("invalid_url"));
    }

    #[test]
    fn test_captcha_detection() {
        assert!(looks_like_captcha("<html>Please verify you are human</html>"));
        assert!(!looks_like_captcha("<html>Backend Engineer wanted</html>"));
    }

    #[test]
    fn test_failure_outcome_shape() {
        let outcome = FetchOutcome::failure(Some(503), "http_error_503");
        assert!(!outcome.success);
        assert_eq!(outcome.status_code, Some(503));
        assert!(outcome.html.is_none());
    }
}
