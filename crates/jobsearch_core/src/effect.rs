use crate::{JobAlertRequest, JobId, RequestId, SearchQuery, UserId};

/// Side effects requested by [`crate::update`]; executed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SearchJobs {
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
    SubmitApplication {
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
}
