use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::extract;

/// A "City, ST" token. The state code is only checked for shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityState {
    pub city: String,
    pub state: String,
}

impl CityState {
    /// Split an already shape-checked token at its comma.
    pub(crate) fn from_token(token: &str) -> Self {
        let (city, state) = token.split_once(',').unwrap_or((token, ""));
        Self {
            city: city.trim().to_string(),
            state: state.trim().to_string(),
        }
    }
}

impl fmt::Display for CityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

impl FromStr for CityState {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if extract::is_city_state(trimmed) {
            Ok(Self::from_token(trimmed))
        } else {
            Err(LookupError::InvalidFormat)
        }
    }
}

/// A 5-digit US zip code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZipCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(LookupError::InvalidFormat)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// First candidate returned by a geocoding lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Only present for name lookups; zip lookups carry no state.
    pub state: Option<String>,
    pub coordinates: Coordinates,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},", self.name)?;
        if let Some(state) = &self.state {
            write!(f, " {state}")?;
        }
        // Debug keeps the trailing ".0" on whole degrees.
        write!(
            f,
            " lat:{:?}, lon:{:?}",
            self.coordinates.lat, self.coordinates.lon
        )
    }
}

/// Why a single location could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LookupError {
    #[error("Invalid location format or Invalid Characters.")]
    InvalidFormat,

    #[error("API request failed with status code: {0}")]
    Status(u16),

    #[error("No data found for the location.")]
    NoData,

    #[error("API request failed: {0}")]
    Transport(String),

    #[error("API response could not be decoded: {0}")]
    Decode(String),
}

/// Outcome of resolving one extracted token (or one unclassifiable input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found(Location),
    Failed { location: String, error: LookupError },
}

impl Resolution {
    pub fn failed(location: impl Into<String>, error: LookupError) -> Self {
        Self::Failed {
            location: location.into(),
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Found(loc) => Some(loc),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Found(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(loc) => loc.fmt(f),
            Self::Failed { location, error } => write!(f, "location: {location}, error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seattle() -> Location {
        Location {
            name: "Seattle".into(),
            state: Some("Washington".into()),
            coordinates: Coordinates {
                lat: 47.6062,
                lon: -122.3321,
            },
        }
    }

    #[test]
    fn city_location_display() {
        assert_eq!(
            seattle().to_string(),
            "Seattle, Washington lat:47.6062, lon:-122.3321"
        );
    }

    #[test]
    fn zip_location_display_drops_state_and_trailing_zeros() {
        let loc = Location {
            name: "New York".into(),
            state: None,
            coordinates: Coordinates {
                lat: 40.7128,
                lon: -74.0060,
            },
        };
        assert_eq!(loc.to_string(), "New York, lat:40.7128, lon:-74.006");
    }

    #[test]
    fn whole_degrees_keep_decimal_point() {
        let loc = Location {
            name: "Nowhere".into(),
            state: None,
            coordinates: Coordinates { lat: 40.0, lon: -90.0 },
        };
        assert_eq!(loc.to_string(), "Nowhere, lat:40.0, lon:-90.0");
    }

    #[test]
    fn failed_resolution_display() {
        let res = Resolution::failed("Invalid, XX", LookupError::Status(404));
        assert!(res.is_error());
        assert_eq!(
            res.to_string(),
            "location: Invalid, XX, error: API request failed with status code: 404"
        );
    }

    #[test]
    fn city_state_parse_trims_both_halves() {
        let cs: CityState = "  Madison, WI \n".parse().expect("valid shape");
        assert_eq!(cs.city, "Madison");
        assert_eq!(cs.state, "WI");

        let cs: CityState = "New York, ny".parse().expect("valid shape");
        assert_eq!(cs.to_string(), "New York, ny");
    }

    #[test]
    fn city_state_parse_rejects_bad_shapes() {
        assert_eq!("Seattle".parse::<CityState>(), Err(LookupError::InvalidFormat));
        assert_eq!("Seattle, WAS".parse::<CityState>(), Err(LookupError::InvalidFormat));
        assert_eq!("S3attle, WA".parse::<CityState>(), Err(LookupError::InvalidFormat));
    }

    #[test]
    fn zip_parse() {
        assert_eq!("53703".parse::<ZipCode>().unwrap().as_str(), "53703");
        assert!("5370".parse::<ZipCode>().is_err());
        assert!("53703-1234".parse::<ZipCode>().is_err());
        assert!("abcde".parse::<ZipCode>().is_err());
    }

    #[test]
    fn resolution_serializes_with_status_tag() {
        let json = serde_json::to_value(Resolution::Found(seattle())).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["name"], "Seattle");

        let json =
            serde_json::to_value(Resolution::failed("00000", LookupError::Status(404))).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["location"], "00000");
        assert_eq!(json["error"]["kind"], "status");
        assert_eq!(json["error"]["detail"], 404);
    }
}
