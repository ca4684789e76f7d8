use jobsearch_core::{update, AppState, Effect, JobDetail, JobSummary, Msg, Route};

fn related_request(effects: &[Effect]) -> (u64, u32, u32) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::LoadRelated {
                request_id,
                skip,
                limit,
                ..
            } => Some((*request_id, *skip, *limit)),
            _ => None,
        })
        .expect("related effect")
}

fn jobs(count: u64) -> Vec<JobSummary> {
    (100..100 + count)
        .map(|id| JobSummary {
            id,
            ..JobSummary::default()
        })
        .collect()
}

fn detail(id: u64, title: &str) -> JobDetail {
    JobDetail {
        summary: JobSummary {
            id,
            title: title.to_string(),
            ..JobSummary::default()
        },
        description: Some("Long enough description".into()),
        ..JobDetail::default()
    }
}

#[test]
fn opening_a_job_loads_detail_and_first_related_page() {
    let (state, effects) = update(AppState::new(), Msg::JobOpened(12));

    assert_eq!(state.route(), Route::Job(12));
    assert_eq!(effects[0], Effect::LoadJob { job_id: 12 });
    let (_, skip, limit) = related_request(&effects);
    assert_eq!((skip, limit), (0, 3));
    assert!(state.view().detail.expect("detail view").loading);
}

#[test]
fn detail_for_another_job_is_discarded() {
    let (state, _) = update(AppState::new(), Msg::JobOpened(12));
    let (state, _) = update(state, Msg::JobOpened(13));
    let (state, _) = update(
        state,
        Msg::JobLoaded {
            job_id: 12,
            result: Ok(detail(12, "Stale")),
        },
    );
    let view = state.view().detail.expect("detail view");
    assert_eq!(view.job_id, 13);
    assert!(view.job.is_none());
    assert!(view.loading);

    let (state, _) = update(
        state,
        Msg::JobLoaded {
            job_id: 13,
            result: Ok(detail(13, "Fresh")),
        },
    );
    let view = state.view().detail.expect("detail view");
    assert_eq!(view.job.expect("job").summary.title, "Fresh");
    assert!(!view.loading);
}

#[test]
fn failed_detail_sets_message() {
    let (state, _) = update(AppState::new(), Msg::JobOpened(4));
    let (state, _) = update(
        state,
        Msg::JobLoaded {
            job_id: 4,
            result: Err("http status 404: not found".into()),
        },
    );
    let view = state.view().detail.expect("detail view");
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch job: http status 404: not found")
    );
}

#[test]
fn related_total_is_estimated_from_page_fill() {
    let (state, effects) = update(AppState::new(), Msg::JobOpened(1));
    let (first, _, _) = related_request(&effects);
    let (state, _) = update(
        state,
        Msg::RelatedLoaded {
            request_id: first,
            result: Ok(jobs(3)),
        },
    );
    assert_eq!(state.view().detail.unwrap().related_total, 4);

    let (state, effects) = update(state, Msg::RelatedPageSelected(2));
    let (second, skip, _) = related_request(&effects);
    assert_eq!(skip, 3);
    let (state, _) = update(
        state,
        Msg::RelatedLoaded {
            request_id: second,
            result: Ok(jobs(1)),
        },
    );
    let view = state.view().detail.unwrap();
    assert_eq!(view.related_page, 2);
    assert_eq!(view.related_total, 4);
    assert_eq!(view.related.len(), 1);
}

#[test]
fn stale_related_page_is_discarded() {
    let (state, effects) = update(AppState::new(), Msg::JobOpened(1));
    let (first, _, _) = related_request(&effects);
    let (state, _) = update(state, Msg::RelatedPageSelected(2));
    let (state, _) = update(
        state,
        Msg::RelatedLoaded {
            request_id: first,
            result: Ok(jobs(3)),
        },
    );
    assert!(state.view().detail.unwrap().related.is_empty());
}

#[test]
fn huge_related_page_saturates_instead_of_overflowing() {
    let (state, _) = update(AppState::new(), Msg::JobOpened(1));
    let (state, effects) = update(state, Msg::RelatedPageSelected(2_000_000_000));
    let (request_id, skip, limit) = related_request(&effects);
    assert_eq!((skip, limit), (u32::MAX, 3));

    let (state, _) = update(
        state,
        Msg::RelatedLoaded {
            request_id,
            result: Ok(jobs(3)),
        },
    );
    let view = state.view().detail.unwrap();
    assert_eq!(view.related_page, 2_000_000_000);
    assert_eq!(view.related_total, u32::MAX);
}
