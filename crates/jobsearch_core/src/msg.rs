use crate::{
    AlertDraft, ApplyOutcome, FeaturedListing, FilterField, FilterKey, FilterSet, JobAlert,
    JobDetail, JobId, JobPage, JobSummary, Notification, RequestId, SearchHistoryEntry, Session,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Home page shown; loads featured listings and per-user panels.
    HomeOpened,
    /// Results page shown with criteria carried over from navigation.
    ResultsOpened { initial: Option<FilterSet> },
    /// Back to the results page; the committed search and its listing stay.
    ResultsShown,
    /// Job detail page shown.
    JobOpened(JobId),
    /// Identity replaced by the shell after login or logout.
    SessionChanged(Option<Session>),
    /// User edited one search control.
    PendingChanged(FilterField),
    /// User submitted the search bar.
    SearchSubmitted,
    /// User clicked "Apply" under the sidebar filters.
    ApplyFiltersClicked,
    /// User removed one active filter tag.
    FilterRemoved(FilterKey),
    /// User clicked "Clear filters".
    ClearFiltersClicked,
    /// User picked a results page.
    PageSelected(u32),
    /// Listing fetch finished.
    JobsLoaded {
        request_id: RequestId,
        result: Result<JobPage, String>,
    },
    /// Detail fetch finished.
    JobLoaded {
        job_id: JobId,
        result: Result<JobDetail, String>,
    },
    /// User picked a related-jobs page on the detail page.
    RelatedPageSelected(u32),
    /// Related jobs fetch finished.
    RelatedLoaded {
        request_id: RequestId,
        result: Result<Vec<JobSummary>, String>,
    },
    /// User clicked "Apply" on a job.
    ApplyClicked(JobId),
    /// Application request finished.
    ApplyFinished { job_id: JobId, outcome: ApplyOutcome },
    FeaturedLoaded(FeaturedListing),
    SearchHistoryLoaded(Result<Vec<SearchHistoryEntry>, String>),
    NotificationsLoaded(Result<Vec<Notification>, String>),
    AlertsLoaded(Result<Vec<JobAlert>, String>),
    /// User saved the job alert form.
    AlertSubmitted(AlertDraft),
    AlertSaved(Result<(), String>),
    NoOp,
}
