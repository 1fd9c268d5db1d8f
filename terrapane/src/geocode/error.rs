//! Error types for the geocoding client.

use thiserror::Error;

use super::types::PlaceKind;
use crate::coord::CoordError;

/// Errors that can occur when resolving a place name.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON deserialization failed.
    #[error("Failed to parse response: {0}")]
    Json(String),

    /// The response carried coordinates outside valid range.
    #[error("Response contained invalid coordinates: {0}")]
    Coordinates(#[from] CoordError),

    /// No access token configured.
    #[error("No access token configured; set geocoding.access_token or TERRAPANE_ACCESS_TOKEN")]
    MissingToken,

    /// The query matched nothing of the requested kind.
    #[error("{0} not found")]
    NoResults(PlaceKind),
}

impl GeocodeError {
    /// True when the error means "nothing matched" rather than a failure.
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults(_))
    }
}
