use crate::progress::ProgressSnapshot;
use crate::MatchTier;

/// Shown in the results panel when the service returns zero matches.
pub const EMPTY_RESULTS_MESSAGE: &str =
    "No job matches found. Please try with a different resume.";

/// Troubleshooting hints rendered under every failure message.
pub const ERROR_HINTS: [&str; 5] = [
    "Password protected: remove the PDF password and upload again.",
    "Scanned image: export a text-based PDF instead of a scan.",
    "Length: keep the resume to one or two pages.",
    "File size: stay under the 10MB limit.",
    "Connection: make sure the analysis server is running.",
];

/// Everything the renderer needs, projected from `AppState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub drag_active: bool,
    pub selected_file: Option<FileCardView>,
    pub submit_enabled: bool,
    pub submitting: bool,
    pub progress: Option<ProgressSnapshot>,
    pub results: Option<ResultsView>,
    pub dirty: bool,
}

/// The selected-file summary shown inside the drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCardView {
    pub name: String,
    pub size_bytes: u64,
}

/// Content of the results section once a submission has finished.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Matches(Vec<MatchCardView>),
    Empty,
    Error(ErrorPanelView),
}

/// One rendered match card.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCardView {
    pub job: String,
    pub percentage: f64,
    pub level: String,
    pub tier: MatchTier,
}

/// The failure panel: a user-facing message plus fixed hints. Raw error
/// detail never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanelView {
    pub message: &'static str,
    pub hints: &'static [&'static str],
}
