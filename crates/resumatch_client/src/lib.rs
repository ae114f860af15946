//! Resumatch client: resume upload and response classification for the
//! analysis service.
mod analyze;
mod types;

pub use analyze::{AnalyzeSettings, Analyzer, HttpAnalyzer, DEFAULT_ENDPOINT};
pub use types::{AnalyzeError, AnalyzeFailure, JobMatch};
