/// Terminal result of an application attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Success,
    AlreadyApplied,
    Error,
}

impl ApplyOutcome {
    /// Maps the HTTP status of `POST /jobs/{id}/apply`. 409 means a duplicate application.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => ApplyOutcome::Success,
            409 => ApplyOutcome::AlreadyApplied,
            _ => ApplyOutcome::Error,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ApplyOutcome::Success => "Applied",
            ApplyOutcome::AlreadyApplied => "Already applied",
            ApplyOutcome::Error => "Apply (failed, retry)",
        }
    }
}

/// Per-job application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStatus {
    Pending,
    Done(ApplyOutcome),
}

impl ApplyStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplyStatus::Pending => "Applying...",
            ApplyStatus::Done(outcome) => outcome.button_label(),
        }
    }

    /// Whether another click should send a new request.
    pub fn accepts_click(self) -> bool {
        matches!(self, ApplyStatus::Done(ApplyOutcome::Error))
    }
}
