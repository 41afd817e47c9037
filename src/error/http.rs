use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to join URL '{base}' with '{path}': {source}")]
    JoinUrlFailed {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    /// True when a request gave up because its timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            HttpError::Request { source, .. } => source.is_timeout(),
            HttpError::BuildClientFailed { .. }
            | HttpError::JoinUrlFailed { .. }
            | HttpError::BuildRequestFailed { .. } => false,
        }
    }
}
