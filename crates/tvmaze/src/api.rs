use reqwest;
use serde;
use serde_json;
use thiserror;

use crate::models::Show;

pub const SHOWS_URL: &str = "https://api.tvmaze.com/shows";

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failure: {}", .0)]
    RequestFailure(reqwest::Error),
    #[error("unexpected response: code={} body={}", .0, .1)]
    UnexpectedResponse(reqwest::StatusCode, String),
    #[error("json decode error: {}", .0)]
    JsonDecode(serde_json::Error),
}

/// Fetches the show index once and keeps the first `limit` entries in catalog order.
pub async fn get_shows(client: &reqwest::Client, url: &str, limit: usize) -> Result<Vec<Show>, ApiError> {
    tracing::debug!(url, "requesting show index");
    let res = client
        .get(url)
        .send()
        .await
        .map_err(ApiError::RequestFailure)?;

    let status = res.status();
    let body = res.text().await.map_err(ApiError::RequestFailure)?;
    decode_shows(status, body.as_str(), limit)
}

pub fn decode_shows(status: reqwest::StatusCode, body: &str, limit: usize) -> Result<Vec<Show>, ApiError> {
    if !status.is_success() {
        let message: Result<ErrorBody, serde_json::Error> = serde_json::from_str(body);
        let error = match message {
            Ok(value) => value.message,
            Err(_) => body.to_string(),
        };
        return Err(ApiError::UnexpectedResponse(status, error));
    };

    let mut shows: Vec<Show> = serde_json::from_str(body).map_err(ApiError::JsonDecode)?;
    shows.truncate(limit);
    Ok(shows)
}
