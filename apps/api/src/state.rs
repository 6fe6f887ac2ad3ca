use std::sync::Arc;

use crate::config::Config;
use crate::ingestion::fetcher::PageFetcher;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept on state for handlers that need runtime settings later.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable page retrieval. Default: `HttpPageFetcher`; tests inject
    /// stubs.
    pub fetcher: Arc<dyn PageFetcher>,
}
