use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobsearch_core::ApplyOutcome;
use search_logging::{search_debug, search_info, search_warn};
use thiserror::Error;

use crate::featured::load_featured;
use crate::{
    ApiClient, ClientSettings, EngineCommand, EngineEvent, FetchError, GeoSettings, JobBoard,
    LocateError, Locator, NominatimLocator,
};

#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub client: ClientSettings,
    pub geo: GeoSettings,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
    #[error("failed to build geolocation client: {0}")]
    Locator(#[from] LocateError),
}

/// Owns the IO thread. Commands run concurrently; events arrive in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let api = ApiClient::new(settings.client)?;
        let wait = settings.geo.timeout;
        let locator = NominatimLocator::new(settings.geo)?;
        Self::with_parts(api, Arc::new(locator), wait)
    }

    /// Starts the engine around an existing client and locator.
    pub fn with_parts(
        api: ApiClient,
        locator: Arc<dyn Locator>,
        geolocation_wait: Duration,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let mut api = Arc::new(api);
            while let Ok(command) = cmd_rx.recv() {
                if let EngineCommand::SessionChanged(session) = &command {
                    search_info!(
                        "Identity changed to {}",
                        session
                            .as_ref()
                            .map(|s| s.user.id.to_string())
                            .unwrap_or_else(|| "anonymous".to_string())
                    );
                    api = Arc::new(api.with_session(session.as_ref()));
                    continue;
                }
                let api = api.clone();
                let locator = locator.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event =
                        handle_command(api.as_ref(), locator.as_ref(), geolocation_wait, command)
                            .await;
                    if let Some(event) = event {
                        let _ = event_tx.send(event);
                    }
                });
            }
            search_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            search_warn!("Engine thread is gone; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &ApiClient,
    locator: &dyn Locator,
    geolocation_wait: Duration,
    command: EngineCommand,
) -> Option<EngineEvent> {
    let event = match command {
        EngineCommand::SessionChanged(_) => return None,
        EngineCommand::Search { request_id, query } => EngineEvent::SearchCompleted {
            request_id,
            result: api.search_jobs(&query).await,
        },
        EngineCommand::LoadJob { job_id } => EngineEvent::JobLoaded {
            job_id,
            result: api.job(job_id).await,
        },
        EngineCommand::LoadRelated {
            request_id,
            job_id,
            skip,
            limit,
        } => EngineEvent::RelatedLoaded {
            request_id,
            result: api.related_jobs(job_id, skip, limit).await,
        },
        EngineCommand::Apply { job_id, user_id } => {
            let result = api.apply(job_id, user_id).await;
            if let Err(err) = &result {
                search_warn!("Application to job {} failed: {}", job_id, err);
            }
            EngineEvent::ApplyCompleted {
                job_id,
                outcome: apply_outcome(&result),
            }
        }
        EngineCommand::LoadFeatured => {
            EngineEvent::FeaturedLoaded(load_featured(api, locator, geolocation_wait).await)
        }
        EngineCommand::LoadSearchHistory { user_id } => {
            EngineEvent::SearchHistoryLoaded(api.search_history(user_id).await)
        }
        EngineCommand::LoadNotifications { user_id } => {
            EngineEvent::NotificationsLoaded(api.notifications(user_id).await)
        }
        EngineCommand::LoadAlerts { user_id } => {
            EngineEvent::AlertsLoaded(api.alerts(user_id).await)
        }
        EngineCommand::CreateAlert(alert) => {
            EngineEvent::AlertCreated(api.create_alert(&alert).await)
        }
        EngineCommand::Login { email, password } => {
            EngineEvent::LoggedIn(api.login(&email, &password).await)
        }
        EngineCommand::Register(registration) => {
            EngineEvent::Registered(api.register(&registration).await)
        }
        EngineCommand::PublishJob { job_id, posting } => {
            let result = match job_id {
                Some(job_id) => api.update_job(job_id, &posting).await,
                None => api.create_job(&posting).await,
            };
            EngineEvent::JobPublished(result)
        }
    };
    Some(event)
}

/// Transport failures without a status count as generic errors.
pub fn apply_outcome(result: &Result<(), FetchError>) -> ApplyOutcome {
    match result {
        Ok(()) => ApplyOutcome::Success,
        Err(err) => err
            .status()
            .map(ApplyOutcome::from_http_status)
            .unwrap_or(ApplyOutcome::Error),
    }
}
