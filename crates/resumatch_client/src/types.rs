use std::fmt;

use serde::Deserialize;

/// One job match as returned by the analysis service.
///
/// The wire format is a JSON array of these objects, strongest match first.
/// Order is preserved all the way to the rendered cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobMatch {
    pub job: String,
    pub percentage: f64,
    pub level: String,
}

/// Classified reason an upload produced no matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeFailure {
    /// The request never reached the service or the reply never arrived.
    Network,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The service answered with a non-success status code.
    HttpStatus(u16),
    /// The response body was not a JSON array of matches.
    InvalidResponse,
}

impl fmt::Display for AnalyzeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeFailure::Network => write!(f, "network error"),
            AnalyzeFailure::Timeout => write!(f, "timeout"),
            AnalyzeFailure::HttpStatus(code) => write!(f, "http status {code}"),
            AnalyzeFailure::InvalidResponse => write!(f, "invalid response"),
        }
    }
}

/// Error produced by an [`crate::Analyzer`]: the failure class plus the raw
/// detail (status line, serde error) for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: AnalyzeFailure,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: AnalyzeFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
