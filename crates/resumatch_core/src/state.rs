use crate::progress::{sample, ProgressSnapshot};
use crate::view_model::{
    AppViewModel, ErrorPanelView, FileCardView, MatchCardView, ResultsView, ERROR_HINTS,
};
use crate::{MatchRow, MatchTier};

/// Milliseconds, as reported by the shell's monotonic clock. The state
/// machine never reads a clock itself; every timestamp arrives in a message.
pub type Millis = u64;

/// Smallest upload the service accepts. Anything below this is unlikely to
/// be a complete resume.
pub const MIN_FILE_BYTES: u64 = 10 * 1024;

/// Largest upload the service accepts.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// The only media type the intake accepts.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Metadata of the file the user picked. The raw file handle stays in the
/// shell; the state machine only ever sees these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Classified reason a submission failed, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    /// The service could not be reached at all.
    CannotConnect,
    /// The request was sent but no response arrived in time.
    Timeout,
    /// The service rejected the upload (4xx).
    BadRequest(u16),
    /// The service fell over while analyzing (5xx).
    ServerError(u16),
    /// The response arrived but could not be understood.
    MalformedResponse,
    /// The shell could not read the picked file's bytes.
    FileUnreadable,
}

impl SubmitErrorKind {
    /// The message shown to the user for this failure class. Raw details
    /// (status lines, serde errors) go to the log, never to the page.
    pub fn user_message(self) -> &'static str {
        match self {
            SubmitErrorKind::CannotConnect => {
                "Cannot connect to server. Please ensure the backend is running."
            }
            SubmitErrorKind::Timeout => {
                "The analysis service took too long to respond. Please try again."
            }
            SubmitErrorKind::BadRequest(_) => {
                "Invalid file or file format issue. Please check your PDF."
            }
            SubmitErrorKind::ServerError(_) => {
                "Server error occurred. Please try again or contact support."
            }
            SubmitErrorKind::MalformedResponse => "Error analyzing resume. Please try again.",
            SubmitErrorKind::FileUnreadable => {
                "Could not read the selected file. Please select it again."
            }
        }
    }
}

/// A submission failure: the classified kind plus raw detail for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: SubmitErrorKind,
    pub detail: String,
}

/// What a finished upload produced.
pub type SubmitOutcome = Result<Vec<MatchRow>, SubmitError>;

/// Where the controller is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Submitting {
        started_at: Millis,
    },
    Succeeded,
    Failed,
}

/// The whole application state. All mutation goes through the named
/// transitions below so `update` stays a readable list of rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    phase: Phase,
    selected: Option<SelectedFile>,
    drag_active: bool,
    progress: Option<ProgressSnapshot>,
    held_outcome: Option<SubmitOutcome>,
    matches: Vec<MatchRow>,
    last_error: Option<SubmitError>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Accepts a validated candidate, replacing any previous selection and
    /// discarding earlier results.
    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        self.phase = Phase::FileSelected;
        self.selected = Some(file);
        self.matches.clear();
        self.last_error = None;
        self.held_outcome = None;
        self.progress = None;
        self.mark_dirty();
    }

    /// Full reset back to the idle form.
    pub(crate) fn clear_selection(&mut self) {
        self.phase = Phase::Idle;
        self.selected = None;
        self.matches.clear();
        self.last_error = None;
        self.held_outcome = None;
        self.progress = None;
        self.mark_dirty();
    }

    pub(crate) fn set_drag_active(&mut self, active: bool) {
        if self.drag_active != active {
            self.drag_active = active;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_submission(&mut self, now_ms: Millis) {
        self.phase = Phase::Submitting { started_at: now_ms };
        self.progress = Some(sample(0));
        self.held_outcome = None;
        self.matches.clear();
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn advance_progress(&mut self, elapsed_ms: Millis) {
        self.progress = Some(sample(elapsed_ms));
        self.mark_dirty();
    }

    /// Parks an outcome that arrived before the reveal floor opened. Nothing
    /// visible changes, so this does not dirty the view.
    pub(crate) fn hold_outcome(&mut self, outcome: SubmitOutcome) {
        self.held_outcome = Some(outcome);
    }

    pub(crate) fn take_held_outcome(&mut self) -> Option<SubmitOutcome> {
        self.held_outcome.take()
    }

    /// Leaves `Submitting` for `Succeeded` or `Failed`. The selection is
    /// kept either way so the user can resubmit the same file.
    pub(crate) fn reveal_outcome(&mut self, outcome: SubmitOutcome) {
        self.progress = None;
        self.held_outcome = None;
        match outcome {
            Ok(matches) => {
                self.matches = matches;
                self.last_error = None;
                self.phase = Phase::Succeeded;
            }
            Err(error) => {
                self.matches.clear();
                self.last_error = Some(error);
                self.phase = Phase::Failed;
            }
        }
        self.mark_dirty();
    }

    /// Projects the state into what the renderer needs. Pure and cheap
    /// enough to call on every dispatch.
    pub fn view(&self) -> AppViewModel {
        let submitting = matches!(self.phase, Phase::Submitting { .. });
        AppViewModel {
            drag_active: self.drag_active,
            selected_file: self.selected.as_ref().map(|file| FileCardView {
                name: file.name.clone(),
                size_bytes: file.size_bytes,
            }),
            submit_enabled: self.selected.is_some() && !submitting,
            submitting,
            progress: self.progress.clone(),
            results: self.results_view(),
            dirty: self.dirty,
        }
    }

    fn results_view(&self) -> Option<ResultsView> {
        match self.phase {
            Phase::Succeeded => {
                if self.matches.is_empty() {
                    return Some(ResultsView::Empty);
                }
                let cards = self
                    .matches
                    .iter()
                    .map(|row| MatchCardView {
                        job: row.job.clone(),
                        percentage: row.percentage,
                        level: row.level.clone(),
                        tier: MatchTier::for_percentage(row.percentage),
                    })
                    .collect();
                Some(ResultsView::Matches(cards))
            }
            Phase::Failed => self.last_error.as_ref().map(|error| {
                ResultsView::Error(ErrorPanelView {
                    message: error.kind.user_message(),
                    hints: &ERROR_HINTS,
                })
            }),
            _ => None,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
