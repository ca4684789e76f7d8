use std::time::Duration;

use futures_util::StreamExt;
use jobsearch_core::{
    JobAlert, JobAlertRequest, JobDetail, JobId, JobPage, JobPosting, JobSummary, Notification,
    SearchHistoryEntry, SearchQuery, Session, User, UserId,
};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use search_logging::{search_debug, search_warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::decode::{decode_job_page, decode_json};
use crate::{FailureKind, FetchError, Registration};

/// Identity header the backend reads instead of a bearer token.
pub const USER_INFO_HEADER: &str = "x-user-info";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base of every API path, e.g. `http://localhost:8000/api/v1`.
    pub api_origin: String,
    /// Service that lists a user's job alerts. Listing is unavailable when unset.
    pub alerts_origin: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:8000/api/v1".to_string(),
            alerts_origin: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Read side of the job board used by searches and the home page.
#[async_trait::async_trait]
pub trait JobBoard: Send + Sync {
    async fn search_jobs(&self, query: &SearchQuery) -> Result<JobPage, FetchError>;

    async fn job(&self, job_id: JobId) -> Result<JobDetail, FetchError>;

    async fn related_jobs(
        &self,
        job_id: JobId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<JobSummary>, FetchError>;

    /// Non-2xx answers surface as [`FailureKind::HttpStatus`].
    async fn apply(&self, job_id: JobId, user_id: UserId) -> Result<(), FetchError>;

    async fn search_history(&self, user_id: UserId)
        -> Result<Vec<SearchHistoryEntry>, FetchError>;

    async fn notifications(&self, user_id: UserId) -> Result<Vec<Notification>, FetchError>;

    async fn alerts(&self, user_id: UserId) -> Result<Vec<JobAlert>, FetchError>;

    async fn create_alert(&self, alert: &JobAlertRequest) -> Result<(), FetchError>;
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    user: User,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ApplyRequest {
    user_id: UserId,
}

/// HTTP client for the job board API.
///
/// Cloning is cheap; clones share the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    settings: ClientSettings,
    client: reqwest::Client,
    identity: Option<HeaderValue>,
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .cookie_store(true)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            client,
            identity: None,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Returns a client that attaches `session`'s user to every request.
    pub fn with_session(&self, session: Option<&Session>) -> Self {
        let identity = session.and_then(|session| {
            let encoded = serde_json::to_vec(&session.user)
                .map_err(|err| err.to_string())
                .and_then(|bytes| {
                    HeaderValue::from_bytes(&bytes).map_err(|err| err.to_string())
                });
            match encoded {
                Ok(value) => Some(value),
                Err(err) => {
                    search_warn!(
                        "User {} cannot be sent as identity header: {}",
                        session.user.id,
                        err
                    );
                    None
                }
            }
        });
        Self {
            settings: self.settings.clone(),
            client: self.client.clone(),
            identity,
        }
    }

    pub fn has_identity(&self) -> bool {
        self.identity.is_some()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, FetchError> {
        let url = self.api_url("/auth/login", &[])?;
        let body = encode_body(&Credentials { email, password })?;
        let bytes = self.send(Method::POST, url, Some(body)).await?;
        let response: LoginResponse = decode_json(&bytes)?;
        Ok(Session {
            user: response.user,
            access_token: response.access_token,
        })
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), FetchError> {
        let url = self.api_url("/auth/register", &[])?;
        let body = encode_body(registration)?;
        self.send(Method::POST, url, Some(body)).await.map(drop)
    }

    pub async fn create_job(&self, posting: &JobPosting) -> Result<(), FetchError> {
        let url = self.api_url("/jobs/", &[])?;
        let body = encode_body(posting)?;
        self.send(Method::POST, url, Some(body)).await.map(drop)
    }

    pub async fn update_job(&self, job_id: JobId, posting: &JobPosting) -> Result<(), FetchError> {
        let url = self.api_url(&format!("/jobs/{job_id}"), &[])?;
        let body = encode_body(posting)?;
        self.send(Method::PUT, url, Some(body)).await.map(drop)
    }

    fn api_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
        build_url(&self.settings.api_origin, path, query)
    }

    fn alerts_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
        let origin = self.settings.alerts_origin.as_deref().ok_or_else(|| {
            FetchError::new(FailureKind::NotConfigured, "alerts service origin is not set")
        })?;
        build_url(origin, path, query)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let bytes = self.send(Method::GET, url, None).await?;
        decode_json(&bytes)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, FetchError> {
        search_debug!("{} {}", method, url);
        let mut request = self.client.request(method, url);
        // Sent on reads too, not only on POST/PUT, so per-user listings see the caller.
        if let Some(identity) = &self.identity {
            request = request.header(HeaderName::from_static(USER_INFO_HEADER), identity.clone());
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            let message = if text.trim().is_empty() {
                status.to_string()
            } else {
                text
            };
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl JobBoard for ApiClient {
    async fn search_jobs(&self, query: &SearchQuery) -> Result<JobPage, FetchError> {
        let url = self.api_url("/jobs/", query.pairs())?;
        let bytes = self.send(Method::GET, url, None).await?;
        decode_job_page(&bytes)
    }

    async fn job(&self, job_id: JobId) -> Result<JobDetail, FetchError> {
        self.get_json(self.api_url(&format!("/jobs/{job_id}"), &[])?)
            .await
    }

    async fn related_jobs(
        &self,
        job_id: JobId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<JobSummary>, FetchError> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.get_json(self.api_url(&format!("/jobs/{job_id}/related"), &query)?)
            .await
    }

    async fn apply(&self, job_id: JobId, user_id: UserId) -> Result<(), FetchError> {
        let url = self.api_url(&format!("/jobs/{job_id}/apply"), &[])?;
        let body = encode_body(&ApplyRequest { user_id })?;
        self.send(Method::POST, url, Some(body)).await.map(drop)
    }

    async fn search_history(
        &self,
        user_id: UserId,
    ) -> Result<Vec<SearchHistoryEntry>, FetchError> {
        let query = [("user_id", user_id.to_string())];
        self.get_json(self.api_url("/jobs/search/history", &query)?)
            .await
    }

    async fn notifications(&self, user_id: UserId) -> Result<Vec<Notification>, FetchError> {
        let query = [("user_id", user_id.to_string())];
        self.get_json(self.api_url("/notifications/", &query)?)
            .await
    }

    async fn alerts(&self, user_id: UserId) -> Result<Vec<JobAlert>, FetchError> {
        let query = [("user_id", user_id.to_string())];
        self.get_json(self.alerts_url("/alerts", &query)?).await
    }

    async fn create_alert(&self, alert: &JobAlertRequest) -> Result<(), FetchError> {
        let url = self.api_url("/notifications/alerts", &[])?;
        let body = encode_body(alert)?;
        self.send(Method::POST, url, Some(body)).await.map(drop)
    }
}

fn build_url(origin: &str, path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
    let joined = format!("{}{}", origin.trim_end_matches('/'), path);
    let mut url = Url::parse(&joined)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }
    Ok(url)
}

fn encode_body<T: Serialize + ?Sized>(body: &T) -> Result<Vec<u8>, FetchError> {
    serde_json::to_vec(body).map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
