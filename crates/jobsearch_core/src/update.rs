use crate::state::SearchCompletion;
use crate::{AlertDraft, AppState, Effect, FilterSet, JobAlertRequest, Msg, Route};

const DEFAULT_ALERT_FREQUENCY: &str = "daily";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::HomeOpened => {
            state.navigate(Route::Home);
            state.open_home()
        }
        Msg::ResultsOpened { initial } => open_results(&mut state, initial),
        Msg::ResultsShown => {
            state.navigate(Route::Results);
            Vec::new()
        }
        Msg::JobOpened(job_id) => {
            state.navigate(Route::Job(job_id));
            state.open_job(job_id)
        }
        Msg::SessionChanged(session) => {
            state.set_session(session);
            Vec::new()
        }
        Msg::PendingChanged(field) => {
            state.filters_mut().set_pending(field);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted | Msg::ApplyFiltersClicked => {
            // Searching from the home page navigates with the draft as the seed.
            if state.route() == Route::Home {
                let draft = state.filters().pending().clone();
                open_results(&mut state, Some(draft))
            } else {
                if state.route() != Route::Results {
                    state.navigate(Route::Results);
                }
                state.filters_mut().commit();
                vec![state.issue_search()]
            }
        }
        Msg::FilterRemoved(key) => {
            state.filters_mut().remove_filter(key);
            vec![state.issue_search()]
        }
        Msg::ClearFiltersClicked => {
            state.filters_mut().clear_all();
            vec![state.issue_search()]
        }
        Msg::PageSelected(page) => match state.select_page(page) {
            Some(_) => vec![state.issue_search()],
            None => Vec::new(),
        },
        Msg::JobsLoaded { request_id, result } => {
            match state.apply_search_result(request_id, result) {
                SearchCompletion::Refetch(effect) => vec![effect],
                SearchCompletion::Applied | SearchCompletion::Superseded => Vec::new(),
            }
        }
        Msg::JobLoaded { job_id, result } => {
            state.apply_job_detail(job_id, result);
            Vec::new()
        }
        Msg::RelatedPageSelected(page) => state.issue_related(page).into_iter().collect(),
        Msg::RelatedLoaded { request_id, result } => {
            state.apply_related(request_id, result);
            Vec::new()
        }
        Msg::ApplyClicked(job_id) => {
            if state.session().is_none() {
                state.navigate(Route::Auth);
                Vec::new()
            } else {
                state.begin_apply(job_id).into_iter().collect()
            }
        }
        Msg::ApplyFinished { job_id, outcome } => {
            state.finish_apply(job_id, outcome);
            Vec::new()
        }
        Msg::FeaturedLoaded(listing) => {
            state.apply_featured(listing);
            Vec::new()
        }
        Msg::SearchHistoryLoaded(result) => {
            state.set_recent_searches(result.unwrap_or_default());
            Vec::new()
        }
        Msg::NotificationsLoaded(result) => {
            state.set_notifications(result.unwrap_or_default());
            Vec::new()
        }
        Msg::AlertsLoaded(result) => {
            state.set_alerts(result.unwrap_or_default());
            Vec::new()
        }
        Msg::AlertSubmitted(draft) => submit_alert(&mut state, draft),
        Msg::AlertSaved(result) => {
            match result {
                Ok(()) => state.set_notice("Job alert saved."),
                Err(_) => state.set_notice("Job alert could not be saved."),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn open_results(state: &mut AppState, initial: Option<FilterSet>) -> Vec<Effect> {
    state.navigate(Route::Results);
    if state.filters_mut().seed(initial) {
        vec![state.issue_search()]
    } else {
        state.settle_unfiltered();
        Vec::new()
    }
}

fn submit_alert(state: &mut AppState, draft: AlertDraft) -> Vec<Effect> {
    let Some(user_id) = state.session().map(|session| session.user_id()) else {
        state.navigate(Route::Auth);
        return Vec::new();
    };
    let keywords = draft.keywords.trim();
    if keywords.is_empty() || draft.city.trim().is_empty() {
        state.set_notice("Keywords and city are required.");
        return Vec::new();
    }
    let frequency = draft
        .frequency
        .clone()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ALERT_FREQUENCY.to_string());
    vec![Effect::CreateAlert(JobAlertRequest {
        user_id,
        keywords: vec![keywords.to_string()],
        location: draft.location(),
        salary_min: draft.salary_min,
        salary_max: draft.salary_max,
        frequency,
    })]
}
