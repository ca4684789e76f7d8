//! Job search engine: HTTP client, geolocation and effect execution.
mod client;
mod decode;
mod engine;
mod featured;
mod geo;
mod session_store;
mod types;

pub use client::{ApiClient, ClientSettings, JobBoard, USER_INFO_HEADER};
pub use decode::{decode_job_page, decode_json, JobListResponse};
pub use engine::{apply_outcome, EngineError, EngineHandle, EngineSettings};
pub use featured::load_featured;
pub use geo::{Coordinates, GeoSettings, LocateError, Locator, NominatimLocator};
pub use session_store::{SessionStore, SessionStoreError};
pub use types::{EngineCommand, EngineEvent, FailureKind, FetchError, Registration};
