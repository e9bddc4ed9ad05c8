use tracing::warn;

use crate::{
    model::{CityState, Location, LookupError, Resolution, ZipCode},
    provider::GeocodingProvider,
};

/// Turns extracted tokens into per-item [`Resolution`]s.
///
/// Lookup failures never escape as errors; every call yields a result.
#[derive(Debug)]
pub struct Resolver {
    provider: Box<dyn GeocodingProvider>,
}

impl Resolver {
    pub fn new<P: GeocodingProvider + 'static>(provider: P) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve_city_state(&self, city_state: &CityState) -> Resolution {
        let outcome = self.provider.direct(city_state).await;
        into_resolution(city_state.to_string(), outcome)
    }

    pub async fn resolve_zip(&self, zip: &ZipCode) -> Resolution {
        let outcome = self.provider.zip(zip).await;
        into_resolution(zip.to_string(), outcome)
    }
}

fn into_resolution(location: String, outcome: Result<Option<Location>, LookupError>) -> Resolution {
    match outcome {
        Ok(Some(found)) => Resolution::Found(found),
        Ok(None) => {
            warn!(%location, "no geocoding candidates");
            Resolution::failed(location, LookupError::NoData)
        }
        Err(error) => {
            warn!(%location, %error, "geocoding lookup failed");
            Resolution::failed(location, error)
        }
    }
}
