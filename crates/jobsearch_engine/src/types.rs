use std::fmt;

use jobsearch_core::{
    ApplyOutcome, FeaturedListing, JobAlert, JobAlertRequest, JobDetail, JobId, JobPage,
    JobPosting, JobSummary, Notification, RequestId, SearchHistoryEntry, SearchQuery, Session,
    UserId,
};
use serde::Serialize;

/// Work accepted by the engine thread.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    /// Replaces the identity attached to subsequent requests.
    SessionChanged(Option<Session>),
    Search {
        request_id: RequestId,
        query: SearchQuery,
    },
    LoadJob {
        job_id: JobId,
    },
    LoadRelated {
        request_id: RequestId,
        job_id: JobId,
        skip: u32,
        limit: u32,
    },
    Apply {
        job_id: JobId,
        user_id: UserId,
    },
    LoadFeatured,
    LoadSearchHistory {
        user_id: UserId,
    },
    LoadNotifications {
        user_id: UserId,
    },
    LoadAlerts {
        user_id: UserId,
    },
    CreateAlert(JobAlertRequest),
    Login {
        email: String,
        password: String,
    },
    Register(Registration),
    /// Creates a posting, or updates `job_id` when given.
    PublishJob {
        job_id: Option<JobId>,
        posting: JobPosting,
    },
}

/// Completions reported back by the engine thread.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<JobPage, FetchError>,
    },
    JobLoaded {
        job_id: JobId,
        result: Result<JobDetail, FetchError>,
    },
    RelatedLoaded {
        request_id: RequestId,
        result: Result<Vec<JobSummary>, FetchError>,
    },
    ApplyCompleted {
        job_id: JobId,
        outcome: ApplyOutcome,
    },
    FeaturedLoaded(FeaturedListing),
    SearchHistoryLoaded(Result<Vec<SearchHistoryEntry>, FetchError>),
    NotificationsLoaded(Result<Vec<Notification>, FetchError>),
    AlertsLoaded(Result<Vec<JobAlert>, FetchError>),
    AlertCreated(Result<(), FetchError>),
    LoggedIn(Result<Session, FetchError>),
    Registered(Result<(), FetchError>),
    JobPublished(Result<(), FetchError>),
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_company: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// HTTP status for server-side failures; `None` when no response arrived.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    NotConfigured,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "unexpected response body"),
            FailureKind::NotConfigured => write!(f, "not configured"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
