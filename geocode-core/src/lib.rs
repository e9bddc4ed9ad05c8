//! Core library for the `geocode` CLI.
//!
//! This crate defines:
//! - Extraction of "City, ST" and zip tokens from free-form input
//! - Abstraction over geocoding providers (OpenWeather)
//! - Per-item resolution and batch processing
//! - Configuration & credentials handling
//!
//! It is used by `geocode-cli`, but can also be reused by other binaries or services.

pub mod batch;
pub mod config;
pub mod extract;
pub mod model;
pub mod provider;
pub mod resolver;

pub use batch::{Summary, process};
pub use config::Config;
pub use extract::{Extracted, extract};
pub use model::{CityState, Coordinates, Location, LookupError, Resolution, ZipCode};
pub use provider::{GeocodingProvider, provider_from_config};
pub use resolver::Resolver;
