//! Pattern-based classification of free-form location input.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{CityState, ZipCode};

const CITY_STATE_PATTERN: &str = r"(?i)[a-z\s]+,\s[a-z]{2}";
const ZIP_PATTERN: &str = r"\b\d{5}\b";

static CITY_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CITY_STATE_PATTERN).expect("city/state pattern is valid"));

static CITY_STATE_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{CITY_STATE_PATTERN})$")).expect("city/state pattern is valid")
});

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_PATTERN).expect("zip pattern is valid"));

/// Tokens found in one raw input string, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub city_states: Vec<CityState>,
    pub zip_codes: Vec<ZipCode>,
}

impl Extracted {
    /// No recognizable location in the input.
    pub fn is_empty(&self) -> bool {
        self.city_states.is_empty() && self.zip_codes.is_empty()
    }
}

/// Find every non-overlapping "City, ST" and standalone 5-digit token.
///
/// Both pattern families run independently over the whole input. State codes
/// are not checked against real US states.
pub fn extract(input: &str) -> Extracted {
    let city_states = CITY_STATE_RE
        .find_iter(input)
        .map(|m| CityState::from_token(m.as_str().trim()))
        .collect();

    let zip_codes = ZIP_RE
        .find_iter(input)
        .map(|m| ZipCode::from_token(m.as_str()))
        .collect();

    Extracted {
        city_states,
        zip_codes,
    }
}

pub(crate) fn is_city_state(token: &str) -> bool {
    CITY_STATE_EXACT_RE.is_match(token)
}
