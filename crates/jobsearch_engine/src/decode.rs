use jobsearch_core::{JobPage, JobSummary};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// `GET /jobs/` answers either with an envelope or with a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobListResponse {
    Envelope {
        jobs: Vec<JobSummary>,
        #[serde(default)]
        total_pages: Option<u32>,
        #[serde(default)]
        total_results: Option<u64>,
    },
    Bare(Vec<JobSummary>),
}

impl JobListResponse {
    /// Missing or zero totals fall back to one page and the item count.
    pub fn into_page(self) -> JobPage {
        match self {
            JobListResponse::Envelope {
                jobs,
                total_pages,
                total_results,
            } => {
                let total_results = total_results
                    .filter(|total| *total > 0)
                    .unwrap_or(jobs.len() as u64);
                JobPage {
                    total_pages: total_pages.unwrap_or(1).max(1),
                    total_results,
                    items: jobs,
                }
            }
            JobListResponse::Bare(jobs) => JobPage {
                total_pages: 1,
                total_results: jobs.len() as u64,
                items: jobs,
            },
        }
    }
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(bytes).map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

pub fn decode_job_page(bytes: &[u8]) -> Result<JobPage, FetchError> {
    decode_json::<JobListResponse>(bytes).map(JobListResponse::into_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keeps_reported_totals() {
        let page = decode_job_page(
            br#"{"jobs":[{"id":1,"title":"A"}],"total_pages":4,"total_results":37}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_results, 37);
    }

    #[test]
    fn envelope_without_totals_uses_defaults() {
        let page = decode_job_page(br#"{"jobs":[{"id":1},{"id":2}]}"#).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 2);
    }

    #[test]
    fn bare_array_is_a_single_page() {
        let page = decode_job_page(br#"[{"id":5},{"id":6},{"id":7}]"#).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 3);
        assert_eq!(page.items[2].id, 7);
    }

    #[test]
    fn unrecognised_shape_is_a_decode_failure() {
        let err = decode_job_page(br#"{"detail":"nope"}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }
}
