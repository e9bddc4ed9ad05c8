use crate::{
    Config,
    model::{CityState, Location, LookupError, ZipCode},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A remote geocoding service.
///
/// `Ok(None)` means the service answered successfully but had no candidate.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn direct(&self, query: &CityState) -> Result<Option<Location>, LookupError>;

    async fn zip(&self, zip: &ZipCode) -> Result<Option<Location>, LookupError>;
}

/// Construct the geocoding provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn GeocodingProvider>> {
    let api_key = config.require_api_key()?;

    let boxed: Box<dyn GeocodingProvider> = Box::new(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        config.base_url.clone(),
    ));

    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            ..Config::default()
        };
        assert!(provider_from_config(&cfg).is_ok());
    }
}
