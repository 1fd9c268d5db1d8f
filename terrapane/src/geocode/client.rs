//! Geocoder trait and HTTP implementation.
//!
//! The [`Geocoder`] trait abstracts over place-name resolution so the search
//! orchestrator can be tested against a mock. The [`MapboxGeocoder`]
//! implementation issues one GET per lookup against the forward-geocoding
//! endpoint via `reqwest` and consumes only the first feature of the
//! response.

use std::future::Future;

use super::config::GeocoderConfig;
use super::error::GeocodeError;
use super::types::{GeocodeFeature, GeocodeResponse, PlaceKind};

/// Trait for resolving a free-text place name to a geocoding result.
pub trait Geocoder: Send + Sync {
    /// Resolve `query` restricted to the given kind's feature type.
    ///
    /// Returns the top result, or [`GeocodeError::NoResults`] when the
    /// response carries no features.
    fn geocode(
        &self,
        query: &str,
        kind: PlaceKind,
    ) -> impl Future<Output = Result<GeocodeFeature, GeocodeError>> + Send;
}

/// Geocoding client for the Mapbox-style places API.
pub struct MapboxGeocoder {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl MapboxGeocoder {
    /// Creates a client from config.
    ///
    /// Fails with [`GeocodeError::MissingToken`] when no access token is
    /// configured; the credential is injected here and never defaulted.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let access_token = config
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(GeocodeError::MissingToken)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeocodeError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    fn request_url(&self, query: &str, kind: PlaceKind) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&types={}",
            self.endpoint,
            query,
            self.access_token,
            kind.feature_type()
        )
    }
}

impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, query: &str, kind: PlaceKind) -> Result<GeocodeFeature, GeocodeError> {
        let url = self.request_url(query.trim(), kind);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodeError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Http(format!(
                "HTTP {} from geocoding endpoint",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeocodeError::Http(format!("Failed to read response: {}", e)))?;

        let data: GeocodeResponse =
            serde_json::from_slice(&bytes).map_err(|e| GeocodeError::Json(e.to_string()))?;

        tracing::debug!(
            query = query,
            kind = %kind,
            features = data.features.len(),
            "geocoding response received"
        );

        data.features
            .into_iter()
            .next()
            .ok_or(GeocodeError::NoResults(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MapboxGeocoder {
        MapboxGeocoder::new(GeocoderConfig::with_token("pk.test")).unwrap()
    }

    #[test]
    fn test_missing_token_rejected() {
        let err = MapboxGeocoder::new(GeocoderConfig::default()).err().unwrap();
        assert!(matches!(err, GeocodeError::MissingToken));

        let blank = GeocoderConfig {
            access_token: Some("   ".to_string()),
            ..GeocoderConfig::default()
        };
        assert!(matches!(
            MapboxGeocoder::new(blank),
            Err(GeocodeError::MissingToken)
        ));
    }

    #[test]
    fn test_request_url_city() {
        let url = client().request_url("Paris", PlaceKind::City);
        assert_eq!(
            url,
            "https://api.mapbox.com/geocoding/v5/mapbox.places/Paris.json?access_token=pk.test&types=place"
        );
    }

    #[test]
    fn test_request_url_country() {
        let url = client().request_url("France", PlaceKind::Country);
        assert!(url.ends_with("France.json?access_token=pk.test&types=country"));
    }

    #[test]
    fn test_endpoint_trailing_slash_normalized() {
        let geocoder = MapboxGeocoder::new(GeocoderConfig {
            endpoint: "https://api.example.com/".to_string(),
            ..GeocoderConfig::with_token("pk.test")
        })
        .unwrap();

        let url = geocoder.request_url("Lima", PlaceKind::City);
        assert!(url.starts_with("https://api.example.com/geocoding/"));
    }

    #[test]
    fn test_response_first_feature_only() {
        let json = r#"{
            "features": [
                { "center": [2.35, 48.86] },
                { "center": [-95.5, 33.66] }
            ]
        }"#;

        let data: GeocodeResponse = serde_json::from_str(json).unwrap();
        let first = data.features.into_iter().next().unwrap();
        assert!((first.center().unwrap().lon - 2.35).abs() < 1e-9);
    }

    #[test]
    fn test_empty_features_is_no_results() {
        let json = r#"{ "features": [] }"#;
        let data: GeocodeResponse = serde_json::from_str(json).unwrap();

        let result = data
            .features
            .into_iter()
            .next()
            .ok_or(GeocodeError::NoResults(PlaceKind::Country));
        assert_eq!(result.err().unwrap().to_string(), "Country not found");
    }
}
