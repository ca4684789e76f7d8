//! Layered configuration: built-in defaults, then `jobsearch.toml`, then
//! `JOBSEARCH_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use jobsearch_engine::{ClientSettings, Coordinates, EngineSettings, GeoSettings};
use log::LevelFilter;
use search_logging::LogDestination;
use serde::Deserialize;

const CONFIG_FILE: &str = "jobsearch";
const ENV_PREFIX: &str = "JOBSEARCH";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_origin: String,
    pub alerts_origin: Option<String>,
    pub session_file: PathBuf,
    pub log_destination: String,
    pub log_file: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub geolocation_timeout_secs: u64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let builder = defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn log_destination(&self) -> Result<LogDestination> {
        self.log_destination.parse().map_err(|err: String| anyhow!(err))
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        self.log_level
            .trim()
            .parse()
            .map_err(|_| anyhow!("unknown log level `{}`", self.log_level))
    }

    pub fn engine_settings(&self) -> EngineSettings {
        let client = ClientSettings {
            api_origin: self.api_origin.clone(),
            alerts_origin: self
                .alerts_origin
                .clone()
                .filter(|origin| !origin.trim().is_empty()),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ClientSettings::default()
        };
        let coordinates = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };
        let geo = GeoSettings {
            coordinates,
            timeout: Duration::from_secs(self.geolocation_timeout_secs),
            ..GeoSettings::default()
        };
        EngineSettings { client, geo }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let client = ClientSettings::default();
    let geo = GeoSettings::default();
    Ok(Config::builder()
        .set_default("api_origin", client.api_origin)?
        .set_default("session_file", ".jobsearch_session.ron")?
        .set_default("log_destination", "file")?
        .set_default("log_file", "jobsearch.log")?
        .set_default("log_level", "info")?
        .set_default("request_timeout_secs", client.request_timeout.as_secs())?
        .set_default("connect_timeout_secs", client.connect_timeout.as_secs())?
        .set_default("geolocation_timeout_secs", geo.timeout.as_secs())?)
}
