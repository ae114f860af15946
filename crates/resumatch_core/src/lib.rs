//! Resumatch core: pure state machine and view-model helpers.
mod effect;
mod escape;
mod matches;
mod msg;
mod progress;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ScrollTarget, Severity};
pub use escape::escape_html;
pub use matches::{MatchRow, MatchTier};
pub use msg::Msg;
pub use progress::{
    ease_out_cubic, interpolate, sample, ProgressSnapshot, ProgressStep, StepState,
    PROGRESS_FLOOR_MS, PROGRESS_STEPS,
};
pub use state::{
    AppState, Millis, Phase, SelectedFile, SubmitError, SubmitErrorKind, SubmitOutcome,
    MAX_FILE_BYTES, MIN_FILE_BYTES, PDF_MIME_TYPE,
};
pub use update::{
    update, NO_FILE_MESSAGE, SUCCESS_MESSAGE, TOO_LARGE_MESSAGE, TOO_SMALL_MESSAGE,
    WRONG_TYPE_MESSAGE,
};
pub use view_model::{
    AppViewModel, ErrorPanelView, FileCardView, MatchCardView, ResultsView, EMPTY_RESULTS_MESSAGE,
    ERROR_HINTS,
};
