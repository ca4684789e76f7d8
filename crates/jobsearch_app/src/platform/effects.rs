use jobsearch_core::{Effect, Msg, Session};
use jobsearch_engine::{EngineCommand, EngineEvent, EngineHandle, FetchError};
use search_logging::{search_debug, search_warn};

/// Forwards core effects to the engine.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            search_debug!("Effect {:?}", effect);
            self.engine.submit(effect_command(effect));
        }
    }
}

pub fn effect_command(effect: Effect) -> EngineCommand {
    match effect {
        Effect::SearchJobs { request_id, query } => EngineCommand::Search { request_id, query },
        Effect::LoadJob { job_id } => EngineCommand::LoadJob { job_id },
        Effect::LoadRelated {
            request_id,
            job_id,
            skip,
            limit,
        } => EngineCommand::LoadRelated {
            request_id,
            job_id,
            skip,
            limit,
        },
        Effect::SubmitApplication { job_id, user_id } => EngineCommand::Apply { job_id, user_id },
        Effect::LoadFeatured => EngineCommand::LoadFeatured,
        Effect::LoadSearchHistory { user_id } => EngineCommand::LoadSearchHistory { user_id },
        Effect::LoadNotifications { user_id } => EngineCommand::LoadNotifications { user_id },
        Effect::LoadAlerts { user_id } => EngineCommand::LoadAlerts { user_id },
        Effect::CreateAlert(alert) => EngineCommand::CreateAlert(alert),
    }
}

/// An engine event as seen by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
    Core(Msg),
    LoggedIn(Result<Session, FetchError>),
    Registered(Result<(), FetchError>),
    Published(Result<(), FetchError>),
}

pub fn translate_event(event: EngineEvent) -> Incoming {
    let msg = match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::JobsLoaded {
            request_id,
            result: display_error(result),
        },
        EngineEvent::JobLoaded { job_id, result } => Msg::JobLoaded {
            job_id,
            result: display_error(result),
        },
        EngineEvent::RelatedLoaded { request_id, result } => Msg::RelatedLoaded {
            request_id,
            result: display_error(result),
        },
        EngineEvent::ApplyCompleted { job_id, outcome } => Msg::ApplyFinished { job_id, outcome },
        EngineEvent::FeaturedLoaded(listing) => Msg::FeaturedLoaded(listing),
        EngineEvent::SearchHistoryLoaded(result) => {
            Msg::SearchHistoryLoaded(logged("search history", result))
        }
        EngineEvent::NotificationsLoaded(result) => {
            Msg::NotificationsLoaded(logged("notifications", result))
        }
        EngineEvent::AlertsLoaded(result) => Msg::AlertsLoaded(logged("job alerts", result)),
        EngineEvent::AlertCreated(result) => Msg::AlertSaved(logged("job alert", result)),
        EngineEvent::LoggedIn(result) => return Incoming::LoggedIn(result),
        EngineEvent::Registered(result) => return Incoming::Registered(result),
        EngineEvent::JobPublished(result) => return Incoming::Published(result),
    };
    Incoming::Core(msg)
}

fn display_error<T>(result: Result<T, FetchError>) -> Result<T, String> {
    result.map_err(|err| err.to_string())
}

fn logged<T>(what: &str, result: Result<T, FetchError>) -> Result<T, String> {
    if let Err(err) = &result {
        search_warn!("Loading {} failed: {}", what, err);
    }
    display_error(result)
}
