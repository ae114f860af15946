#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitResume { submitted_at: crate::Millis },
    Notify { severity: Severity, message: String },
    ScrollTo { target: ScrollTarget },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Loading,
    Results,
}
