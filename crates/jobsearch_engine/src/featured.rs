use std::time::Duration;

use jobsearch_core::{
    merge_featured, needs_general_listing, FeaturedListing, FeaturedNotice, JobSummary,
    SearchQuery, FEATURED_LIMIT,
};
use search_logging::{search_info, search_warn};

use crate::{FetchError, JobBoard, Locator};

/// Loads the home-page listing, localised when the city can be found within `wait`.
pub async fn load_featured(
    board: &dyn JobBoard,
    locator: &dyn Locator,
    wait: Duration,
) -> FeaturedListing {
    let city = match tokio::time::timeout(wait, locator.locate_city()).await {
        Ok(Ok(city)) => {
            search_info!("Detected city {}", city);
            Some(city)
        }
        Ok(Err(err)) => {
            search_warn!("Location unavailable: {}", err);
            None
        }
        Err(_) => {
            search_warn!("Location lookup timed out after {:?}", wait);
            None
        }
    };

    let mut notice = city
        .is_none()
        .then_some(FeaturedNotice::LocationUnavailable);
    let jobs = match featured_jobs(board, city.as_deref()).await {
        Ok(jobs) => jobs,
        Err(err) => {
            search_warn!("Featured listings failed: {}", err);
            notice = Some(FeaturedNotice::LoadFailed);
            Vec::new()
        }
    };

    FeaturedListing { city, jobs, notice }
}

async fn featured_jobs(
    board: &dyn JobBoard,
    city: Option<&str>,
) -> Result<Vec<JobSummary>, FetchError> {
    let limit = FEATURED_LIMIT as u32;
    let mut local = match city {
        Some(city) => board.search_jobs(&SearchQuery::featured(Some(city), limit)).await?.items,
        None => Vec::new(),
    };
    if !needs_general_listing(&local) {
        local.truncate(FEATURED_LIMIT);
        return Ok(local);
    }
    let general = board.search_jobs(&SearchQuery::featured(None, limit)).await?.items;
    Ok(merge_featured(local, general))
}
