use crate::{
    ApplyStatus, FilterKey, FilterSet, JobAlert, JobDetail, JobId, Notification, Route,
    SearchHistoryEntry,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub route: Route,
    pub user_name: Option<String>,
    pub pending: FilterSet,
    pub active: FilterSet,
    pub active_tags: Vec<FilterKey>,
    pub district_options: Vec<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub jobs: Vec<JobRowView>,
    pub detail: Option<DetailView>,
    pub home: HomeView,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub logo: Option<String>,
    pub badge: char,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub apply: Option<ApplyStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub job_id: JobId,
    pub job: Option<JobDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub apply: Option<ApplyStatus>,
    pub related: Vec<JobRowView>,
    pub related_page: u32,
    pub related_total: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeView {
    pub featured: Vec<JobRowView>,
    pub featured_loading: bool,
    pub featured_notice: Option<&'static str>,
    pub detected_city: Option<String>,
    pub recent_searches: Vec<SearchHistoryEntry>,
    pub notifications: Vec<Notification>,
    pub alerts: Vec<JobAlert>,
    pub position_suggestions: Vec<String>,
    pub city_suggestions: Vec<String>,
}
