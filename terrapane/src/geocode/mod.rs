//! Geocoding: free-text place names to coordinates.
//!
//! - [`Geocoder`] - client trait (mockable in tests)
//! - [`MapboxGeocoder`] - HTTP implementation over the places API
//! - [`PlaceKind`] - city/country search selector
//! - [`GeocodeFeature`] - one result: center point plus optional bounds

mod client;
mod config;
mod error;
mod types;

pub use client::{Geocoder, MapboxGeocoder};
pub use config::{GeocoderConfig, DEFAULT_GEOCODE_TIMEOUT_SECS, DEFAULT_GEOCODING_ENDPOINT};
pub use error::GeocodeError;
pub use types::{GeocodeFeature, PlaceKind};
