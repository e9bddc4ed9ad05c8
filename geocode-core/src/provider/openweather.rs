use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error as StdError;
use tracing::debug;

use crate::{
    config::DEFAULT_BASE_URL,
    model::{CityState, Coordinates, Location, LookupError, ZipCode},
};

use super::GeocodingProvider;

const COUNTRY_CODE: &str = "US";

/// OpenWeather Geocoding API (`/direct` and `/zip`).
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// GET `{base}/{endpoint}` and return the body of a 2xx response.
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, LookupError> {
        let url = format!("{}/{endpoint}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        debug!(%url, %status, "OpenWeather geocoding response");

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        res.text().await.map_err(transport_error)
    }
}

#[derive(Debug, Deserialize)]
struct OwDirectCandidate {
    name: String,
    state: Option<String>,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwZipResponse {
    name: String,
    lat: f64,
    lon: f64,
}

#[async_trait]
impl GeocodingProvider for OpenWeatherProvider {
    async fn direct(&self, query: &CityState) -> Result<Option<Location>, LookupError> {
        let q = format!("{},{},{COUNTRY_CODE}", query.city, query.state);
        let body = self.get("direct", &[("q", q.as_str()), ("limit", "1")]).await?;

        let candidates: Vec<OwDirectCandidate> =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(candidates.into_iter().next().map(|c| Location {
            name: c.name,
            state: c.state,
            coordinates: Coordinates {
                lat: c.lat,
                lon: c.lon,
            },
        }))
    }

    async fn zip(&self, zip: &ZipCode) -> Result<Option<Location>, LookupError> {
        let q = format!("{zip},{COUNTRY_CODE}");
        let body = self.get("zip", &[("zip", q.as_str())]).await?;

        let value: Value =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;
        if is_blank(&value) {
            return Ok(None);
        }

        let parsed: OwZipResponse =
            serde_json::from_value(value).map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(Some(Location {
            name: parsed.name,
            state: None,
            coordinates: Coordinates {
                lat: parsed.lat,
                lon: parsed.lon,
            },
        }))
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Flatten a reqwest error and its causes, leaving out the URL (it carries the API key).
fn transport_error(err: reqwest::Error) -> LookupError {
    let err = err.without_url();
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    LookupError::Transport(msg)
}
