use crate::{
    AppState, Effect, Msg, Phase, ScrollTarget, SelectedFile, Severity, SubmitOutcome,
    MAX_FILE_BYTES, MIN_FILE_BYTES, PDF_MIME_TYPE, PROGRESS_FLOOR_MS,
};

/// Shown when the analyze button is clicked with nothing selected.
pub const NO_FILE_MESSAGE: &str = "Please select a resume PDF";

/// Shown when the picked file is not a PDF.
pub const WRONG_TYPE_MESSAGE: &str = "Please select a PDF file only.";

/// Shown when the picked file exceeds [`MAX_FILE_BYTES`].
pub const TOO_LARGE_MESSAGE: &str = "File size should be less than 10MB.";

/// Shown when the picked file is under [`MIN_FILE_BYTES`].
pub const TOO_SMALL_MESSAGE: &str = "File seems too small. Please upload a complete resume.";

/// Shown once a submission succeeds.
pub const SUCCESS_MESSAGE: &str = "Resume analysis completed successfully!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilePicked {
            name,
            size_bytes,
            mime_type,
        } => {
            // A new candidate never interrupts an in-flight submission.
            if matches!(state.phase(), Phase::Submitting { .. }) {
                return (state, Vec::new());
            }
            match validate_candidate(size_bytes, &mime_type) {
                Ok(()) => {
                    state.select_file(SelectedFile {
                        name,
                        size_bytes,
                        mime_type,
                    });
                    Vec::new()
                }
                // Rejection leaves the previous selection, if any, in place.
                Err(message) => vec![notify_error(message)],
            }
        }
        Msg::FileRemoved => {
            if state.selected_file().is_none() {
                return (state, Vec::new());
            }
            // An in-flight request is left to finish; AnalysisDone drops the
            // outcome of a submission that is no longer current.
            state.clear_selection();
            Vec::new()
        }
        Msg::DragStateChanged(active) => {
            state.set_drag_active(active);
            Vec::new()
        }
        Msg::SubmitClicked { now_ms } => match *state.phase() {
            Phase::Submitting { .. } => Vec::new(),
            _ if state.selected_file().is_some() => {
                state.begin_submission(now_ms);
                vec![
                    Effect::SubmitResume { submitted_at: now_ms },
                    Effect::ScrollTo {
                        target: ScrollTarget::Loading,
                    },
                ]
            }
            _ => vec![notify_error(NO_FILE_MESSAGE)],
        },
        Msg::FrameTick { now_ms } => {
            let Phase::Submitting { started_at } = *state.phase() else {
                return (state, Vec::new());
            };
            let elapsed = now_ms.saturating_sub(started_at);
            state.advance_progress(elapsed);
            if elapsed >= PROGRESS_FLOOR_MS {
                match state.take_held_outcome() {
                    Some(outcome) => reveal(&mut state, outcome),
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            }
        }
        Msg::AnalysisDone {
            submitted_at,
            outcome,
            now_ms,
        } => {
            let Phase::Submitting { started_at } = *state.phase() else {
                // Stale arrival: the form was reset while the request was in
                // flight.
                return (state, Vec::new());
            };
            // A response from an earlier submission can still land after a
            // remove and resubmit; only the current submission counts.
            if submitted_at != started_at {
                return (state, Vec::new());
            }
            if now_ms.saturating_sub(started_at) >= PROGRESS_FLOOR_MS {
                reveal(&mut state, outcome)
            } else {
                state.hold_outcome(outcome);
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn reveal(state: &mut AppState, outcome: SubmitOutcome) -> Vec<Effect> {
    let notification = match &outcome {
        Ok(_) => Effect::Notify {
            severity: Severity::Success,
            message: SUCCESS_MESSAGE.to_owned(),
        },
        Err(error) => notify_error(error.kind.user_message()),
    };
    state.reveal_outcome(outcome);
    vec![
        notification,
        Effect::ScrollTo {
            target: ScrollTarget::Results,
        },
    ]
}

fn notify_error(message: &str) -> Effect {
    Effect::Notify {
        severity: Severity::Error,
        message: message.to_owned(),
    }
}

fn validate_candidate(size_bytes: u64, mime_type: &str) -> Result<(), &'static str> {
    if mime_type != PDF_MIME_TYPE {
        return Err(WRONG_TYPE_MESSAGE);
    }
    if size_bytes > MAX_FILE_BYTES {
        return Err(TOO_LARGE_MESSAGE);
    }
    if size_bytes < MIN_FILE_BYTES {
        return Err(TOO_SMALL_MESSAGE);
    }
    Ok(())
}
