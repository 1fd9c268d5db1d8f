//! Geocoding domain types, decoupled from the wire format.

use std::fmt;

use serde::Deserialize;

use crate::coord::{BoundingBox, CoordError, LonLat};

/// What kind of place a search is looking for.
///
/// The kind selects the geocoding feature type and the fallback zoom used
/// when a result has no usable bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceKind {
    /// City-level search.
    #[default]
    City,
    /// Country-level search.
    Country,
}

impl PlaceKind {
    /// Feature type restriction passed to the geocoding endpoint.
    pub fn feature_type(&self) -> &'static str {
        match self {
            Self::City => "place",
            Self::Country => "country",
        }
    }

    /// Fallback zoom for a fly-to when the result has no usable bounds.
    pub fn default_zoom(&self) -> f64 {
        match self {
            Self::City => 10.0,
            Self::Country => 4.0,
        }
    }

    /// The other kind; used by the UI kind toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Self::City => Self::Country,
            Self::Country => Self::City,
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "City"),
            Self::Country => write!(f, "Country"),
        }
    }
}

/// One geocoding result.
///
/// Mirrors the `{ "center": [lon, lat], "bbox": [w, s, e, n] }` shape of the
/// endpoint's feature objects; all other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    center: [f64; 2],
    #[serde(default)]
    bbox: Option<[f64; 4]>,
}

impl GeocodeFeature {
    /// The result's center point, validated.
    pub fn center(&self) -> Result<LonLat, CoordError> {
        LonLat::new(self.center[0], self.center[1])
    }

    /// The result's bounding box, if present and usable.
    ///
    /// A bbox with inverted edges or out-of-range values is treated as
    /// absent rather than failing the whole result.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let [west, south, east, north] = self.bbox?;
        BoundingBox::new(west, south, east, north).ok()
    }
}

/// Top-level geocoding response. Only the features array is consumed.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub(crate) features: Vec<GeocodeFeature>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_feature_types() {
        assert_eq!(PlaceKind::City.feature_type(), "place");
        assert_eq!(PlaceKind::Country.feature_type(), "country");
    }

    #[test]
    fn test_kind_default_zooms() {
        assert_eq!(PlaceKind::City.default_zoom(), 10.0);
        assert_eq!(PlaceKind::Country.default_zoom(), 4.0);
    }

    #[test]
    fn test_kind_toggle() {
        assert_eq!(PlaceKind::City.toggled(), PlaceKind::Country);
        assert_eq!(PlaceKind::Country.toggled(), PlaceKind::City);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PlaceKind::City.to_string(), "City");
        assert_eq!(PlaceKind::Country.to_string(), "Country");
    }

    #[test]
    fn test_feature_deserialize_point_only() {
        let json = r#"{ "center": [2.35, 48.86] }"#;

        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        let center = feature.center().unwrap();
        assert!((center.lon - 2.35).abs() < 1e-9);
        assert!((center.lat - 48.86).abs() < 1e-9);
        assert!(feature.bounds().is_none());
    }

    #[test]
    fn test_feature_deserialize_with_bbox() {
        let json = r#"{ "center": [2.2, 46.2], "bbox": [-5.0, 41.0, 9.6, 51.1] }"#;

        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        let bounds = feature.bounds().expect("bbox expected");
        assert_eq!(bounds.west, -5.0);
        assert_eq!(bounds.south, 41.0);
        assert_eq!(bounds.east, 9.6);
        assert_eq!(bounds.north, 51.1);
    }

    #[test]
    fn test_feature_ignores_extra_fields() {
        // The real endpoint returns many more fields per feature
        let json = r#"{
            "id": "place.123",
            "type": "Feature",
            "place_name": "Paris, France",
            "relevance": 1.0,
            "center": [2.35, 48.86],
            "geometry": { "type": "Point", "coordinates": [2.35, 48.86] }
        }"#;

        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        assert!(feature.center().is_ok());
    }

    #[test]
    fn test_unusable_bbox_treated_as_absent() {
        // Inverted edges
        let json = r#"{ "center": [2.2, 46.2], "bbox": [9.6, 41.0, -5.0, 51.1] }"#;
        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        assert!(feature.bounds().is_none());

        // Latitude outside the projection
        let json = r#"{ "center": [2.2, 46.2], "bbox": [-5.0, 41.0, 9.6, 89.9] }"#;
        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        assert!(feature.bounds().is_none());
    }

    #[test]
    fn test_invalid_center_is_an_error() {
        let json = r#"{ "center": [200.0, 48.86] }"#;
        let feature: GeocodeFeature = serde_json::from_str(json).unwrap();
        assert!(feature.center().is_err());
    }
}
