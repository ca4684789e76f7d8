use jobsearch_core::{
    update, AlertDraft, AppState, Effect, FeaturedListing, FeaturedNotice, FilterField,
    JobAlertRequest, JobSummary, LocationCatalog, Msg, Route, SearchHistoryEntry, Session, User,
};

fn session(id: u64) -> Session {
    Session {
        user: User {
            id,
            ..User::default()
        },
        access_token: None,
    }
}

#[test]
fn anonymous_home_loads_featured_only() {
    let (state, effects) = update(AppState::new(), Msg::HomeOpened);
    assert_eq!(effects, vec![Effect::LoadFeatured]);
    assert!(state.view().home.featured_loading);
}

#[test]
fn signed_in_home_loads_user_panels() {
    let state = AppState::with_session(Some(session(3)));
    let (_, effects) = update(state, Msg::HomeOpened);
    assert_eq!(
        effects,
        vec![
            Effect::LoadFeatured,
            Effect::LoadSearchHistory { user_id: 3 },
            Effect::LoadNotifications { user_id: 3 },
            Effect::LoadAlerts { user_id: 3 },
        ]
    );
}

#[test]
fn featured_listing_sets_city_and_notice() {
    let (state, _) = update(AppState::new(), Msg::HomeOpened);
    let (state, _) = update(
        state,
        Msg::FeaturedLoaded(FeaturedListing {
            city: None,
            jobs: vec![JobSummary {
                id: 1,
                company: "Zeta".into(),
                ..JobSummary::default()
            }],
            notice: Some(FeaturedNotice::LocationUnavailable),
        }),
    );

    let home = state.view().home;
    assert!(!home.featured_loading);
    assert_eq!(home.featured.len(), 1);
    assert_eq!(home.featured[0].badge, 'Z');
    assert_eq!(
        home.featured_notice,
        Some("Location unavailable, showing general listings.")
    );
}

#[test]
fn suggestions_follow_pending_inputs() {
    let (state, _) = update(AppState::with_catalog(LocationCatalog::turkey()), Msg::HomeOpened);
    let (state, _) = update(
        state,
        Msg::FeaturedLoaded(FeaturedListing {
            city: Some("İzmir".into()),
            jobs: Vec::new(),
            notice: None,
        }),
    );
    let (state, _) = update(state, Msg::PendingChanged(FilterField::Query("analist".into())));

    let home = state.view().home;
    assert_eq!(
        home.position_suggestions,
        vec!["Veri Analisti".to_string(), "İş Analisti".to_string()]
    );
    assert_eq!(home.city_suggestions, vec!["İzmir".to_string()]);

    let (state, _) = update(state, Msg::PendingChanged(FilterField::City("Bur".into())));
    assert!(state.view().home.city_suggestions.is_empty());
}

#[test]
fn failed_history_leaves_list_empty() {
    let state = AppState::with_session(Some(session(3)));
    let (state, _) = update(
        state,
        Msg::SearchHistoryLoaded(Ok(vec![SearchHistoryEntry {
            query: "Developer".into(),
            ..SearchHistoryEntry::default()
        }])),
    );
    assert_eq!(state.view().home.recent_searches.len(), 1);

    let (state, _) = update(state, Msg::SearchHistoryLoaded(Err("boom".into())));
    assert!(state.view().home.recent_searches.is_empty());
}

#[test]
fn alert_requires_keywords_and_city() {
    let state = AppState::with_session(Some(session(3)));
    let (state, effects) = update(
        state,
        Msg::AlertSubmitted(AlertDraft {
            keywords: "Developer".into(),
            ..AlertDraft::default()
        }),
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Keywords and city are required.")
    );
}

#[test]
fn alert_request_joins_location_and_defaults_frequency() {
    let state = AppState::with_session(Some(session(3)));
    let (state, effects) = update(
        state,
        Msg::AlertSubmitted(AlertDraft {
            keywords: " Web Tasarım Uzmanı ".into(),
            country: "Türkiye".into(),
            city: "İstanbul".into(),
            district: "Kadıköy".into(),
            salary_min: Some(30000.0),
            salary_max: None,
            frequency: None,
        }),
    );
    assert_eq!(
        effects,
        vec![Effect::CreateAlert(JobAlertRequest {
            user_id: 3,
            keywords: vec!["Web Tasarım Uzmanı".into()],
            location: "İstanbul, Kadıköy".into(),
            salary_min: Some(30000.0),
            salary_max: None,
            frequency: "daily".into(),
        })]
    );

    let (state, _) = update(state, Msg::AlertSaved(Ok(())));
    assert_eq!(state.view().notice.as_deref(), Some("Job alert saved."));
}

#[test]
fn anonymous_alert_routes_to_auth() {
    let (state, effects) = update(
        AppState::new(),
        Msg::AlertSubmitted(AlertDraft {
            keywords: "Developer".into(),
            city: "Ankara".into(),
            ..AlertDraft::default()
        }),
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Auth);
}
