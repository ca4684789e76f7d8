use std::sync::Mutex;
use std::time::Duration;

use jobsearch_core::{
    FeaturedNotice, JobAlert, JobAlertRequest, JobDetail, JobId, JobPage, JobSummary,
    Notification, SearchHistoryEntry, SearchQuery, UserId,
};
use jobsearch_engine::{load_featured, FailureKind, FetchError, JobBoard, LocateError, Locator};

struct FixedCity(Result<String, LocateError>);

#[async_trait::async_trait]
impl Locator for FixedCity {
    async fn locate_city(&self) -> Result<String, LocateError> {
        self.0.clone()
    }
}

struct StalledLocator;

#[async_trait::async_trait]
impl Locator for StalledLocator {
    async fn locate_city(&self) -> Result<String, LocateError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("never".into())
    }
}

/// Serves listings keyed by the `city` parameter and records each query.
struct ListingBoard {
    local: Vec<JobSummary>,
    general: Result<Vec<JobSummary>, FetchError>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl ListingBoard {
    fn new(local: Vec<JobSummary>, general: Vec<JobSummary>) -> Self {
        Self {
            local,
            general: Ok(general),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn cities_requested(&self) -> Vec<Option<String>> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.get("city").map(str::to_string))
            .collect()
    }
}

#[async_trait::async_trait]
impl JobBoard for ListingBoard {
    async fn search_jobs(&self, query: &SearchQuery) -> Result<JobPage, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        let items = match query.get("city") {
            Some(_) => self.local.clone(),
            None => self.general.clone()?,
        };
        Ok(JobPage {
            total_pages: 1,
            total_results: items.len() as u64,
            items,
        })
    }

    async fn job(&self, _job_id: JobId) -> Result<JobDetail, FetchError> {
        unimplemented!()
    }

    async fn related_jobs(
        &self,
        _job_id: JobId,
        _skip: u32,
        _limit: u32,
    ) -> Result<Vec<JobSummary>, FetchError> {
        unimplemented!()
    }

    async fn apply(&self, _job_id: JobId, _user_id: UserId) -> Result<(), FetchError> {
        unimplemented!()
    }

    async fn search_history(
        &self,
        _user_id: UserId,
    ) -> Result<Vec<SearchHistoryEntry>, FetchError> {
        unimplemented!()
    }

    async fn notifications(&self, _user_id: UserId) -> Result<Vec<Notification>, FetchError> {
        unimplemented!()
    }

    async fn alerts(&self, _user_id: UserId) -> Result<Vec<JobAlert>, FetchError> {
        unimplemented!()
    }

    async fn create_alert(&self, _alert: &JobAlertRequest) -> Result<(), FetchError> {
        unimplemented!()
    }
}

fn jobs(ids: &[u64]) -> Vec<JobSummary> {
    ids.iter()
        .map(|id| JobSummary {
            id: *id,
            ..JobSummary::default()
        })
        .collect()
}

fn ids(listing: &[JobSummary]) -> Vec<u64> {
    listing.iter().map(|job| job.id).collect()
}

#[tokio::test]
async fn local_jobs_are_topped_up_without_duplicates() {
    let board = ListingBoard::new(jobs(&[1, 2]), jobs(&[2, 3, 4, 5, 6, 7]));
    let listing = load_featured(
        &board,
        &FixedCity(Ok("Bursa".into())),
        Duration::from_secs(1),
    )
    .await;

    assert_eq!(listing.city.as_deref(), Some("Bursa"));
    assert_eq!(ids(&listing.jobs), vec![1, 2, 3, 4, 5]);
    assert_eq!(listing.notice, None);
    assert_eq!(
        board.cities_requested(),
        vec![Some("Bursa".to_string()), None]
    );
}

#[tokio::test]
async fn full_local_listing_skips_general_request() {
    let board = ListingBoard::new(jobs(&[1, 2, 3, 4, 5]), jobs(&[9]));
    let listing = load_featured(
        &board,
        &FixedCity(Ok("Ankara".into())),
        Duration::from_secs(1),
    )
    .await;

    assert_eq!(ids(&listing.jobs), vec![1, 2, 3, 4, 5]);
    assert_eq!(board.cities_requested().len(), 1);
}

#[tokio::test]
async fn unknown_location_falls_back_to_general_listing() {
    let board = ListingBoard::new(jobs(&[1]), jobs(&[7, 8]));
    let listing = load_featured(
        &board,
        &FixedCity(Err(LocateError::Unavailable)),
        Duration::from_secs(1),
    )
    .await;

    assert_eq!(listing.city, None);
    assert_eq!(ids(&listing.jobs), vec![7, 8]);
    assert_eq!(listing.notice, Some(FeaturedNotice::LocationUnavailable));
    assert_eq!(board.cities_requested(), vec![None]);
}

#[tokio::test(start_paused = true)]
async fn stalled_geolocation_is_bounded() {
    let board = ListingBoard::new(Vec::new(), jobs(&[3]));
    let listing = load_featured(&board, &StalledLocator, Duration::from_secs(10)).await;

    assert_eq!(listing.city, None);
    assert_eq!(ids(&listing.jobs), vec![3]);
    assert_eq!(listing.notice, Some(FeaturedNotice::LocationUnavailable));
}

#[tokio::test]
async fn failed_listing_is_empty_with_notice() {
    let mut board = ListingBoard::new(jobs(&[1]), Vec::new());
    board.general = Err(FetchError {
        kind: FailureKind::HttpStatus(502),
        message: "bad gateway".into(),
    });
    let listing = load_featured(
        &board,
        &FixedCity(Ok("İzmir".into())),
        Duration::from_secs(1),
    )
    .await;

    assert!(listing.jobs.is_empty());
    assert_eq!(listing.notice, Some(FeaturedNotice::LoadFailed));
    assert_eq!(listing.city.as_deref(), Some("İzmir"));
}
