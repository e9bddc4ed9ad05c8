//! Sequential resolution of a list of raw location inputs.

use tracing::{debug, info};

use crate::{
    extract::extract,
    model::{LookupError, Resolution},
    resolver::Resolver,
};

/// Resolve every input in order.
///
/// Each input yields one result per city/state token, or one per zip token when
/// it has no city/state token, or a single `InvalidFormat` failure when it has
/// neither. Zip tokens next to a city/state token are ignored.
pub async fn process<S: AsRef<str>>(resolver: &Resolver, inputs: &[S]) -> Vec<Resolution> {
    let mut results = Vec::with_capacity(inputs.len());

    for raw in inputs {
        let raw = raw.as_ref();
        let extracted = extract(raw);
        debug!(
            input = raw,
            city_states = extracted.city_states.len(),
            zip_codes = extracted.zip_codes.len(),
            "classified input"
        );

        if !extracted.city_states.is_empty() {
            for city_state in &extracted.city_states {
                results.push(resolver.resolve_city_state(city_state).await);
            }
        } else if !extracted.zip_codes.is_empty() {
            for zip in &extracted.zip_codes {
                results.push(resolver.resolve_zip(zip).await);
            }
        } else {
            results.push(Resolution::failed(raw, LookupError::InvalidFormat));
        }
    }

    let summary = Summary::of(&results);
    info!(found = summary.found, failed = summary.failed, "batch resolved");

    results
}

/// Counts of successes and failures in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(results: &[Resolution]) -> Self {
        let failed = results.iter().filter(|r| r.is_error()).count();
        Self {
            found: results.len() - failed,
            failed,
        }
    }
}
