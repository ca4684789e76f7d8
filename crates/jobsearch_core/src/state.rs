use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, DetailView, HomeView, JobRowView};
use crate::{
    suggest_cities, suggest_positions, ApplyOutcome, ApplyStatus, Effect, FeaturedListing,
    FeaturedNotice, FilterStore, JobAlert, JobDetail, JobId, JobPage, JobSummary,
    LocationCatalog, Notification, Pagination, SearchHistoryEntry, SearchQuery, Session,
};

pub type RequestId = u64;

/// Page size of the related-jobs strip on the detail page.
pub const RELATED_PAGE_SIZE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Results,
    Job(JobId),
    Auth,
}

/// Job alert form contents before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertDraft {
    pub keywords: String,
    pub country: String,
    pub city: String,
    pub district: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub frequency: Option<String>,
}

impl AlertDraft {
    pub fn location(&self) -> String {
        if self.district.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.district)
        }
    }
}

pub(crate) enum SearchCompletion {
    Applied,
    Superseded,
    Refetch(Effect),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Listing {
    pub(crate) items: Vec<JobSummary>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DetailState {
    pub(crate) job_id: JobId,
    pub(crate) job: Option<JobDetail>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) related: Vec<JobSummary>,
    pub(crate) related_page: u32,
    pub(crate) related_total: u32,
    pub(crate) latest_related: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct HomeState {
    pub(crate) featured: Vec<JobSummary>,
    pub(crate) featured_loading: bool,
    pub(crate) featured_notice: Option<FeaturedNotice>,
    pub(crate) detected_city: Option<String>,
    pub(crate) recent_searches: Vec<SearchHistoryEntry>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) alerts: Vec<JobAlert>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    route: Route,
    session: Option<Session>,
    filters: FilterStore,
    pagination: Pagination,
    results: Listing,
    latest_search: Option<RequestId>,
    last_request_id: RequestId,
    applications: BTreeMap<JobId, ApplyStatus>,
    detail: Option<DetailState>,
    home: HomeState,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn with_catalog(catalog: LocationCatalog) -> Self {
        Self {
            filters: FilterStore::new(catalog),
            ..Self::default()
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn apply_status(&self, job_id: JobId) -> Option<ApplyStatus> {
        self.applications.get(&job_id).copied()
    }

    pub fn view(&self) -> AppViewModel {
        let catalog = self.filters.catalog();
        let pending = self.filters.pending();
        let rows = self
            .results
            .items
            .iter()
            .map(|job| self.row_view(job))
            .collect();
        let detail = self.detail.as_ref().map(|detail| DetailView {
            job_id: detail.job_id,
            job: detail.job.clone(),
            loading: detail.loading,
            error: detail.error.clone(),
            apply: self.apply_status(detail.job_id),
            related: detail.related.iter().map(|job| self.row_view(job)).collect(),
            related_page: detail.related_page,
            related_total: detail.related_total,
        });
        let home = HomeView {
            featured: self.home.featured.iter().map(|job| self.row_view(job)).collect(),
            featured_loading: self.home.featured_loading,
            featured_notice: self.home.featured_notice.map(FeaturedNotice::message),
            detected_city: self.home.detected_city.clone(),
            recent_searches: self.home.recent_searches.clone(),
            notifications: self.home.notifications.clone(),
            alerts: self.home.alerts.clone(),
            position_suggestions: suggest_positions(catalog, &pending.query),
            city_suggestions: suggest_cities(self.home.detected_city.as_deref(), &pending.city),
        };

        AppViewModel {
            route: self.route,
            user_name: self.session.as_ref().map(|s| s.user.display_name()),
            pending: pending.clone(),
            active: self.filters.active().clone(),
            active_tags: self.filters.active().tags(),
            district_options: catalog.districts(&pending.city).to_vec(),
            current_page: self.filters.page(),
            total_pages: self.pagination.total_pages,
            total_results: self.pagination.total_results,
            loading: self.results.loading,
            error: self.results.error.clone(),
            jobs: rows,
            detail,
            home,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterStore {
        &mut self.filters
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        self.route = route;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_session(&mut self, session: Option<Session>) {
        if session.is_none() {
            self.home.recent_searches.clear();
            self.home.notifications.clear();
            self.home.alerts.clear();
        }
        self.session = session;
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.mark_dirty();
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    fn row_view(&self, job: &JobSummary) -> JobRowView {
        JobRowView {
            job_id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            logo: job.logo.clone(),
            badge: job.company_initial(),
            work_mode: job.work_mode().map(ToOwned::to_owned),
            job_type: job.job_type().map(ToOwned::to_owned),
            apply: self.apply_status(job.id),
        }
    }

    // --- results listing ---

    /// Issues a fetch for the active filters and current page. Any earlier
    /// in-flight fetch is superseded.
    pub(crate) fn issue_search(&mut self) -> Effect {
        let request_id = self.next_request_id();
        self.latest_search = Some(request_id);
        self.results.loading = true;
        self.results.error = None;
        self.mark_dirty();
        let user_id = self.session.as_ref().map(Session::user_id);
        Effect::SearchJobs {
            request_id,
            query: SearchQuery::build(self.filters.active(), self.filters.page(), user_id),
        }
    }

    /// Seeded without criteria: nothing to fetch, nothing loading.
    pub(crate) fn settle_unfiltered(&mut self) {
        self.latest_search = None;
        self.results = Listing::default();
        self.pagination = Pagination::default();
        self.mark_dirty();
    }

    /// Returns the clamped target page, or `None` if it equals the current page.
    pub(crate) fn select_page(&mut self, page: u32) -> Option<u32> {
        let target = self.pagination.clamp(page);
        if target == self.filters.page() {
            return None;
        }
        self.filters.set_page(target);
        Some(target)
    }

    /// Applies a listing completion. On a stale page cursor the page is
    /// clamped and a refetch is issued instead of showing an empty page.
    pub(crate) fn apply_search_result(
        &mut self,
        request_id: RequestId,
        result: Result<JobPage, String>,
    ) -> SearchCompletion {
        if self.latest_search != Some(request_id) {
            return SearchCompletion::Superseded;
        }
        self.latest_search = None;
        self.results.loading = false;
        self.mark_dirty();
        match result {
            Ok(page) => {
                if let Some(clamped) = self.pagination.apply_totals(
                    self.filters.page(),
                    page.total_pages,
                    page.total_results,
                ) {
                    self.filters.set_page(clamped);
                    return SearchCompletion::Refetch(self.issue_search());
                }
                self.results.items = page.items;
                self.results.error = None;
            }
            Err(message) => {
                self.results.items.clear();
                self.results.error = Some(format!("Failed to fetch jobs: {message}"));
            }
        }
        SearchCompletion::Applied
    }

    // --- applications ---

    /// Marks `job_id` pending and returns the request, or `None` when a
    /// request is in flight or a terminal success was already recorded.
    pub(crate) fn begin_apply(&mut self, job_id: JobId) -> Option<Effect> {
        let user_id = self.session.as_ref()?.user_id();
        if let Some(status) = self.applications.get(&job_id) {
            if !status.accepts_click() {
                return None;
            }
        }
        self.applications.insert(job_id, ApplyStatus::Pending);
        self.mark_dirty();
        Some(Effect::SubmitApplication { job_id, user_id })
    }

    pub(crate) fn finish_apply(&mut self, job_id: JobId, outcome: ApplyOutcome) {
        self.applications.insert(job_id, ApplyStatus::Done(outcome));
        self.mark_dirty();
    }

    // --- job detail ---

    pub(crate) fn open_job(&mut self, job_id: JobId) -> Vec<Effect> {
        self.detail = Some(DetailState {
            job_id,
            job: None,
            loading: true,
            error: None,
            related: Vec::new(),
            related_page: 1,
            related_total: 0,
            latest_related: None,
        });
        let mut effects = vec![Effect::LoadJob { job_id }];
        effects.extend(self.issue_related(1));
        effects
    }

    pub(crate) fn issue_related(&mut self, page: u32) -> Option<Effect> {
        let page = page.max(1);
        let request_id = self.next_request_id();
        let detail = self.detail.as_mut()?;
        detail.related_page = page;
        detail.latest_related = Some(request_id);
        let job_id = detail.job_id;
        self.mark_dirty();
        Some(Effect::LoadRelated {
            request_id,
            job_id,
            skip: (page - 1).saturating_mul(RELATED_PAGE_SIZE),
            limit: RELATED_PAGE_SIZE,
        })
    }

    pub(crate) fn apply_job_detail(&mut self, job_id: JobId, result: Result<JobDetail, String>) -> bool {
        let Some(detail) = self.detail.as_mut().filter(|d| d.job_id == job_id) else {
            return false;
        };
        detail.loading = false;
        match result {
            Ok(job) => {
                detail.job = Some(job);
                detail.error = None;
            }
            Err(message) => {
                detail.job = None;
                detail.error = Some(format!("Failed to fetch job: {message}"));
            }
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_related(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<JobSummary>, String>,
    ) -> bool {
        let Some(detail) = self
            .detail
            .as_mut()
            .filter(|d| d.latest_related == Some(request_id))
        else {
            return false;
        };
        detail.latest_related = None;
        let jobs = result.unwrap_or_default();
        let page = detail.related_page;
        let count = jobs.len() as u32;
        detail.related_total = if count < RELATED_PAGE_SIZE {
            (page - 1)
                .saturating_mul(RELATED_PAGE_SIZE)
                .saturating_add(count)
        } else {
            page.saturating_mul(RELATED_PAGE_SIZE).saturating_add(1)
        };
        detail.related = jobs;
        self.mark_dirty();
        true
    }

    // --- home ---

    pub(crate) fn open_home(&mut self) -> Vec<Effect> {
        self.home.featured_loading = true;
        self.home.featured_notice = None;
        let mut effects = vec![Effect::LoadFeatured];
        if let Some(user_id) = self.session.as_ref().map(Session::user_id) {
            effects.push(Effect::LoadSearchHistory { user_id });
            effects.push(Effect::LoadNotifications { user_id });
            effects.push(Effect::LoadAlerts { user_id });
        }
        effects
    }

    pub(crate) fn apply_featured(&mut self, listing: FeaturedListing) {
        self.home.featured_loading = false;
        self.home.detected_city = listing.city;
        self.home.featured = listing.jobs;
        self.home.featured_notice = listing.notice;
        self.mark_dirty();
    }

    pub(crate) fn set_recent_searches(&mut self, entries: Vec<SearchHistoryEntry>) {
        self.home.recent_searches = entries;
        self.mark_dirty();
    }

    pub(crate) fn set_notifications(&mut self, notifications: Vec<Notification>) {
        self.home.notifications = notifications;
        self.mark_dirty();
    }

    pub(crate) fn set_alerts(&mut self, alerts: Vec<JobAlert>) {
        self.home.alerts = alerts;
        self.mark_dirty();
    }
}
