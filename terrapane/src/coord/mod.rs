//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (longitude/latitude)
//! and Web Mercator world-pixel coordinates used by the viewport math.

mod types;

pub use types::{
    BoundingBox, CoordError, LonLat, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
};

use std::f64::consts::PI;

/// Pixel size of the world map at zoom 0.
pub const WORLD_TILE_SIZE: f64 = 256.0;

/// Total width/height of the projected world in pixels at the given zoom.
#[inline]
pub fn world_size(zoom: f64) -> f64 {
    WORLD_TILE_SIZE * 2.0_f64.powf(zoom)
}

/// Projects a geographic point to Web Mercator world-pixel coordinates.
///
/// The origin is the northwest corner of the projection; x grows east,
/// y grows south. The input is assumed valid ([`LonLat`] enforces range).
#[inline]
pub fn project(point: LonLat, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let x = (point.lon + 180.0) / 360.0 * size;

    let lat_rad = point.lat * PI / 180.0;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;

    (x, y)
}

/// Converts Web Mercator world-pixel coordinates back to a geographic point.
///
/// Out-of-range pixels are clamped onto the projection edge.
#[inline]
pub fn unproject(x: f64, y: f64, zoom: f64) -> LonLat {
    let size = world_size(zoom);

    let lon = x / size * 360.0 - 180.0;

    let n = 1.0 - 2.0 * y / size;
    let lat = (PI * n).sinh().atan() * 180.0 / PI;

    LonLat::clamped(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_size_doubles_per_zoom_level() {
        assert_eq!(world_size(0.0), 256.0);
        assert_eq!(world_size(1.0), 512.0);
        assert_eq!(world_size(10.0), 256.0 * 1024.0);
    }

    #[test]
    fn test_project_new_york_city() {
        // New York City: 40.7128°N, 74.0060°W
        let point = LonLat::new(-74.0060, 40.7128).unwrap();
        let (x, y) = project(point, 16.0);

        // Same location the slippy-tile formula puts at tile col 19295, row 24640
        // (256 px per tile).
        assert_eq!((x / 256.0).floor() as u32, 19295);
        assert_eq!((y / 256.0).floor() as u32, 24640);
    }

    #[test]
    fn test_project_origin_is_world_center() {
        let (x, y) = project(LonLat { lon: 0.0, lat: 0.0 }, 2.0);
        let half = world_size(2.0) / 2.0;

        assert!((x - half).abs() < 1e-9, "x should be world center");
        assert!((y - half).abs() < 1e-9, "y should be world center");
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original = LonLat::new(-74.0060, 40.7128).unwrap();

        let (x, y) = project(original, 12.0);
        let converted = unproject(x, y, 12.0);

        assert!(
            (converted.lat - original.lat).abs() < 1e-9,
            "Latitude should roundtrip"
        );
        assert!(
            (converted.lon - original.lon).abs() < 1e-9,
            "Longitude should roundtrip"
        );
    }

    #[test]
    fn test_roundtrip_at_different_zooms() {
        let point = LonLat::new(-0.1278, 51.5074).unwrap(); // London

        for zoom in [0.0, 4.5, 10.12, 18.0, 22.0] {
            let (x, y) = project(point, zoom);
            let converted = unproject(x, y, zoom);

            assert!(
                (converted.lat - point.lat).abs() < 1e-6,
                "Zoom {}: lat diff {}",
                zoom,
                (converted.lat - point.lat).abs()
            );
            assert!(
                (converted.lon - point.lon).abs() < 1e-6,
                "Zoom {}: lon diff {}",
                zoom,
                (converted.lon - point.lon).abs()
            );
        }
    }

    #[test]
    fn test_unproject_clamps_outside_world() {
        let size = world_size(3.0);

        let west_edge = unproject(-10.0, size / 2.0, 3.0);
        assert_eq!(west_edge.lon, MIN_LON);

        let north_edge = unproject(size / 2.0, -10.0, 3.0);
        assert_eq!(north_edge.lat, MAX_LAT);
    }

    #[test]
    fn test_lonlat_validation() {
        assert!(LonLat::new(-74.0, 40.0).is_ok());
        assert!(matches!(
            LonLat::new(-74.0, 90.0),
            Err(CoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            LonLat::new(181.0, 40.0),
            Err(CoordError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_bounding_box_validation() {
        let bbox = BoundingBox::new(-5.0, 41.0, 9.6, 51.1).unwrap();
        assert_eq!(bbox.southwest(), LonLat { lon: -5.0, lat: 41.0 });
        assert_eq!(bbox.northeast(), LonLat { lon: 9.6, lat: 51.1 });

        assert!(matches!(
            BoundingBox::new(9.6, 41.0, -5.0, 51.1),
            Err(CoordError::EmptyBounds { .. })
        ));
        assert!(matches!(
            BoundingBox::new(-5.0, 41.0, 9.6, 91.0),
            Err(CoordError::InvalidLatitude(_))
        ));
    }
}
