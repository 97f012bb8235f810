use thiserror::Error;

/// Errors from the npm and GitHub data sources.
///
/// The aggregation boundary treats every variant as one opaque
/// "source resolution failed" state; the variants exist for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
