#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A candidate file arrived from the picker or a drop.
    FilePicked {
        name: String,
        size_bytes: u64,
        mime_type: String,
    },
    /// User clicked the remove control on the selected file.
    FileRemoved,
    /// A file drag entered (true) or left (false) the drop zone.
    DragStateChanged(bool),
    /// User clicked the analyze button.
    SubmitClicked { now_ms: crate::Millis },
    /// Animation frame while a submission is in flight.
    FrameTick { now_ms: crate::Millis },
    /// The upload finished with a classified outcome. `submitted_at` names
    /// the submission the outcome belongs to.
    AnalysisDone {
        submitted_at: crate::Millis,
        outcome: crate::SubmitOutcome,
        now_ms: crate::Millis,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
