//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Supported fractional zoom range
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 22.0;

/// A geographic point in longitude/latitude order.
///
/// Longitude comes first to match the `[lon, lat]` pair convention used by
/// geocoding responses and camera constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
    /// Latitude in degrees, Web Mercator range (-85.05112878 to 85.05112878)
    pub lat: f64,
}

impl LonLat {
    /// Creates a point, validating both components.
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoordError> {
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        Ok(Self { lon, lat })
    }

    /// Creates a point by clamping both components into valid range.
    ///
    /// Used where out-of-range input should saturate rather than fail,
    /// e.g. panning against the edge of the projection.
    pub fn clamped(lon: f64, lat: f64) -> Self {
        Self {
            lon: lon.clamp(MIN_LON, MAX_LON),
            lat: lat.clamp(MIN_LAT, MAX_LAT),
        }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.lon, self.lat)
    }
}

/// A geographic rectangle as (west, south, east, north) edges.
///
/// Matches the four-value `bbox` arrays returned by geocoding responses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Creates a bounding box, validating edge ordering and ranges.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self, CoordError> {
        if !(MIN_LON..=MAX_LON).contains(&west) {
            return Err(CoordError::InvalidLongitude(west));
        }
        if !(MIN_LON..=MAX_LON).contains(&east) {
            return Err(CoordError::InvalidLongitude(east));
        }
        for lat in [south, north] {
            if !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(CoordError::InvalidLatitude(lat));
            }
        }
        if west > east || south > north {
            return Err(CoordError::EmptyBounds {
                west,
                south,
                east,
                north,
            });
        }
        Ok(Self {
            west,
            south,
            east,
            north,
        })
    }

    /// Southwest corner.
    #[inline]
    pub fn southwest(&self) -> LonLat {
        LonLat {
            lon: self.west,
            lat: self.south,
        }
    }

    /// Northeast corner.
    #[inline]
    pub fn northeast(&self) -> LonLat {
        LonLat {
            lon: self.east,
            lat: self.north,
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}, {:.4}, {:.4}]",
            self.west, self.south, self.east, self.north
        )
    }
}

/// Errors that can occur during coordinate validation or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-85.05112878 to 85.05112878)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Zoom level is outside valid range (0.0 to 22.0)
    InvalidZoom(f64),
    /// Bounding box with inverted or degenerate edges
    EmptyBounds {
        west: f64,
        south: f64,
        east: f64,
        north: f64,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be between {} and {})",
                    zoom, MIN_ZOOM, MAX_ZOOM
                )
            }
            CoordError::EmptyBounds {
                west,
                south,
                east,
                north,
            } => {
                write!(
                    f,
                    "Empty bounding box: west={}, south={}, east={}, north={}",
                    west, south, east, north
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
