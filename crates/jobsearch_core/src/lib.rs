//! Job search core: pure filter/fetch state machine and view-model helpers.
mod apply;
mod catalog;
mod effect;
mod featured;
mod filters;
mod job;
mod msg;
mod pagination;
mod query;
mod session;
mod state;
mod store;
mod suggest;
mod update;
mod view_model;

pub use apply::{ApplyOutcome, ApplyStatus};
pub use catalog::LocationCatalog;
pub use effect::Effect;
pub use featured::{
    merge_featured, needs_general_listing, FeaturedListing, FeaturedNotice, FEATURED_LIMIT,
};
pub use filters::{DateFilter, FilterField, FilterKey, FilterSet, WorkMode, WorkPreferences};
pub use job::{
    JobAlert, JobAlertRequest, JobDetail, JobId, JobPage, JobPosting, JobSummary, Notification,
    SearchHistoryEntry,
};
pub use msg::Msg;
pub use pagination::{Pagination, PAGE_SIZE};
pub use query::SearchQuery;
pub use session::{Session, User, UserId};
pub use state::{AlertDraft, AppState, RequestId, Route, RELATED_PAGE_SIZE};
pub use store::FilterStore;
pub use suggest::{suggest_cities, suggest_positions, SUGGESTION_LIMIT};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, HomeView, JobRowView};
