use std::time::Duration;

use search_logging::search_debug;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct GeoSettings {
    /// Nominatim base URL.
    pub endpoint: String,
    /// Device position; geolocation is unavailable without one.
    pub coordinates: Option<Coordinates>,
    /// Upper bound on the whole lookup.
    pub timeout: Duration,
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org".to_string(),
            coordinates: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("no position available")]
    Unavailable,
    #[error("reverse geocoding failed: {0}")]
    Lookup(String),
    #[error("reverse geocoding returned no place name")]
    NoPlace,
}

/// Resolves the user's current city.
#[async_trait::async_trait]
pub trait Locator: Send + Sync {
    async fn locate_city(&self) -> Result<String, LocateError>;
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
}

impl Address {
    fn place(self) -> Option<String> {
        [self.city, self.town, self.village, self.state]
            .into_iter()
            .flatten()
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty())
    }
}

/// Reverse-geocodes configured coordinates through Nominatim.
#[derive(Debug, Clone)]
pub struct NominatimLocator {
    settings: GeoSettings,
    client: reqwest::Client,
}

impl NominatimLocator {
    pub fn new(settings: GeoSettings) -> Result<Self, LocateError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("jobsearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| LocateError::Lookup(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn reverse_url(&self, coordinates: Coordinates) -> Result<Url, LocateError> {
        let mut url = Url::parse(&format!(
            "{}/reverse",
            self.settings.endpoint.trim_end_matches('/')
        ))
        .map_err(|err| LocateError::Lookup(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("lat", &coordinates.latitude.to_string())
            .append_pair("lon", &coordinates.longitude.to_string())
            .append_pair("format", "json");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Locator for NominatimLocator {
    async fn locate_city(&self) -> Result<String, LocateError> {
        let coordinates = self.settings.coordinates.ok_or(LocateError::Unavailable)?;
        let url = self.reverse_url(coordinates)?;
        search_debug!("Reverse geocoding {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| LocateError::Lookup(err.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| LocateError::Lookup(err.to_string()))?;
        let body: ReverseResponse =
            serde_json::from_slice(&bytes).map_err(|err| LocateError::Lookup(err.to_string()))?;
        body.address.place().ok_or(LocateError::NoPlace)
    }
}
