use std::collections::HashSet;

use crate::JobSummary;

pub const FEATURED_LIMIT: usize = 5;

/// Why the featured list fell back or came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedNotice {
    LocationUnavailable,
    LoadFailed,
}

impl FeaturedNotice {
    pub fn message(self) -> &'static str {
        match self {
            FeaturedNotice::LocationUnavailable => {
                "Location unavailable, showing general listings."
            }
            FeaturedNotice::LoadFailed => "Listings could not be loaded.",
        }
    }
}

/// Home-page listing, optionally localised to the detected city.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeaturedListing {
    pub city: Option<String>,
    pub jobs: Vec<JobSummary>,
    pub notice: Option<FeaturedNotice>,
}

/// Tops up city-local jobs with general ones, skipping duplicate ids.
pub fn merge_featured(local: Vec<JobSummary>, general: Vec<JobSummary>) -> Vec<JobSummary> {
    let mut seen: HashSet<_> = local.iter().map(|job| job.id).collect();
    let mut merged = local;
    for job in general {
        if seen.insert(job.id) {
            merged.push(job);
        }
    }
    merged.truncate(FEATURED_LIMIT);
    merged
}

/// Whether the local list needs topping up from the general listing.
pub fn needs_general_listing(local: &[JobSummary]) -> bool {
    local.len() < FEATURED_LIMIT
}
