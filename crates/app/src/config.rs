use serde;
use serde_json;
use thiserror;
use tokio;
use url;

use crate::rows::RowRules;

pub const CONFIG_FILENAME: &str = "app_config.json";

#[derive(Debug, thiserror::Error)]
pub enum AppInitError {
    #[error("failed to load config from file: {}", .0)]
    IOConfigLoad(std::io::Error),
    #[error("json decode on config: {}", .0)]
    JsonDecodeConfig(serde_json::Error),
    #[error("invalid shows url '{}': {}", .0, .1)]
    InvalidShowsUrl(String, url::ParseError),
    #[error("failed to create tokio runtime: {}", .0)]
    Runtime(std::io::Error),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub shows_url: String,
    pub batch_limit: usize,
    pub row_limit: usize,
    pub top_rated_threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            shows_url: tvmaze::api::SHOWS_URL.to_string(),
            batch_limit: 80,
            row_limit: 20,
            top_rated_threshold: 8.0,
        }
    }
}

impl DashboardConfig {
    pub fn row_rules(&self) -> RowRules {
        RowRules {
            row_limit: self.row_limit,
            top_rated_threshold: self.top_rated_threshold,
        }
    }

    pub fn from_json(data: &str) -> Result<Self, AppInitError> {
        let config: DashboardConfig = serde_json::from_str(data).map_err(AppInitError::JsonDecodeConfig)?;
        url::Url::parse(config.shows_url.as_str())
            .map_err(|err| AppInitError::InvalidShowsUrl(config.shows_url.clone(), err))?;
        Ok(config)
    }
}

/// Reads `<config_path>/app_config.json`. A missing file yields the defaults.
pub async fn load_config(config_path: &str) -> Result<DashboardConfig, AppInitError> {
    let filename = format!("{}/{}", config_path, CONFIG_FILENAME);
    let data = match tokio::fs::read_to_string(filename.as_str()).await {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(filename = %filename, "no config file found, using defaults");
            return Ok(DashboardConfig::default());
        },
        Err(err) => return Err(AppInitError::IOConfigLoad(err)),
    };

    let config = DashboardConfig::from_json(data.as_str())?;
    tracing::info!(filename = %filename, ?config, "loaded config");
    Ok(config)
}
