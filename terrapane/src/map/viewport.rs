//! Viewport math for a pixel-sized window onto the Web Mercator world.

use crate::camera::Camera;
use crate::coord::{self, BoundingBox, LonLat, MAX_ZOOM, MIN_ZOOM};

/// A rectangular window onto the projected world.
///
/// Holds the camera plus the window size in screen pixels, and does all the
/// projection math the renderer and fit-bounds logic need. Zoom is always
/// clamped to the supported range; the center is always a valid coordinate.
#[derive(Debug, Clone)]
pub struct Viewport {
    center: LonLat,
    zoom: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport at the given camera and pixel size.
    pub fn new(camera: Camera, width: f64, height: f64) -> Self {
        Self {
            center: camera.center,
            zoom: camera.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Current camera snapshot.
    pub fn camera(&self) -> Camera {
        Camera::new(self.center, self.zoom)
    }

    /// Moves the camera, clamping zoom into the supported range.
    pub fn set_camera(&mut self, camera: Camera) {
        self.center = camera.center;
        self.zoom = camera.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Sets the zoom level, clamping to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Adjusts zoom by a delta, clamping to the supported range.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Resizes the pixel window. Degenerate sizes are bumped to one pixel.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Pans the view by a pixel delta (positive x east, positive y south).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let (cx, cy) = coord::project(self.center, self.zoom);
        self.center = coord::unproject(cx + dx, cy + dy, self.zoom);
    }

    /// The geographic rectangle currently visible in the window.
    pub fn visible_bounds(&self) -> BoundingBox {
        let (cx, cy) = coord::project(self.center, self.zoom);

        let nw = coord::unproject(cx - self.width / 2.0, cy - self.height / 2.0, self.zoom);
        let se = coord::unproject(cx + self.width / 2.0, cy + self.height / 2.0, self.zoom);

        BoundingBox {
            west: nw.lon,
            south: se.lat,
            east: se.lon,
            north: nw.lat,
        }
    }

    /// Camera that frames `bounds` inside this window with `padding` pixels
    /// kept clear on every side.
    ///
    /// Returns the largest zoom at which the padded box still fits, clamped
    /// to the supported range; the center is the projected midpoint of the
    /// box (not the geographic midpoint, which drifts at high latitudes).
    pub fn camera_for_bounds(&self, bounds: BoundingBox, padding: f64) -> Camera {
        let (x_west, y_south) = coord::project(bounds.southwest(), 0.0);
        let (x_east, y_north) = coord::project(bounds.northeast(), 0.0);

        let box_width = (x_east - x_west).max(f64::EPSILON);
        let box_height = (y_south - y_north).max(f64::EPSILON);

        let avail_width = (self.width - 2.0 * padding).max(1.0);
        let avail_height = (self.height - 2.0 * padding).max(1.0);

        let scale = (avail_width / box_width).min(avail_height / box_height);
        let zoom = scale.log2().clamp(MIN_ZOOM, MAX_ZOOM);

        let center = coord::unproject((x_west + x_east) / 2.0, (y_north + y_south) / 2.0, 0.0);

        Camera::new(center, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::project;

    fn viewport() -> Viewport {
        Viewport::new(Camera::initial(), 160.0, 96.0)
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut vp = viewport();

        vp.set_zoom(30.0);
        assert_eq!(vp.camera().zoom, MAX_ZOOM);

        vp.set_zoom(-3.0);
        assert_eq!(vp.camera().zoom, MIN_ZOOM);

        vp.zoom_by(-1.0);
        assert_eq!(vp.camera().zoom, MIN_ZOOM);
    }

    #[test]
    fn test_set_camera_clamps_zoom() {
        let mut vp = viewport();
        vp.set_camera(Camera::new(LonLat { lon: 0.0, lat: 0.0 }, 99.0));
        assert_eq!(vp.camera().zoom, MAX_ZOOM);
    }

    #[test]
    fn test_visible_bounds_contains_center() {
        let vp = viewport();
        let bounds = vp.visible_bounds();
        let center = vp.camera().center;

        assert!(bounds.west < center.lon && center.lon < bounds.east);
        assert!(bounds.south < center.lat && center.lat < bounds.north);
    }

    #[test]
    fn test_pan_east_moves_center_east() {
        let mut vp = viewport();
        let before = vp.camera().center.lon;

        vp.pan_by(10.0, 0.0);

        assert!(vp.camera().center.lon > before);
    }

    #[test]
    fn test_pan_roundtrip_returns_to_start() {
        let mut vp = viewport();
        let before = vp.camera().center;

        vp.pan_by(25.0, -13.0);
        vp.pan_by(-25.0, 13.0);

        let after = vp.camera().center;
        assert!((after.lon - before.lon).abs() < 1e-9);
        assert!((after.lat - before.lat).abs() < 1e-9);
    }

    #[test]
    fn test_camera_for_bounds_fits_box_with_padding() {
        let vp = viewport();
        // France
        let bounds = BoundingBox::new(-5.0, 41.0, 9.6, 51.1).unwrap();
        let padding = 10.0;

        let camera = vp.camera_for_bounds(bounds, padding);

        // At the computed zoom, the projected box must fit the padded window.
        let (x_west, y_south) = project(bounds.southwest(), camera.zoom);
        let (x_east, y_north) = project(bounds.northeast(), camera.zoom);
        assert!(x_east - x_west <= 160.0 - 2.0 * padding + 1e-6);
        assert!(y_south - y_north <= 96.0 - 2.0 * padding + 1e-6);

        // Center is inside the box.
        assert!(bounds.west < camera.center.lon && camera.center.lon < bounds.east);
        assert!(bounds.south < camera.center.lat && camera.center.lat < bounds.north);
    }

    #[test]
    fn test_camera_for_bounds_larger_box_means_lower_zoom() {
        let vp = viewport();
        let country = BoundingBox::new(-5.0, 41.0, 9.6, 51.1).unwrap();
        let city = BoundingBox::new(2.2, 48.8, 2.5, 48.9).unwrap();

        let country_zoom = vp.camera_for_bounds(country, 10.0).zoom;
        let city_zoom = vp.camera_for_bounds(city, 10.0).zoom;

        assert!(country_zoom < city_zoom);
    }

    #[test]
    fn test_camera_for_bounds_degenerate_box_clamps_to_max_zoom() {
        let vp = viewport();
        let point_box = BoundingBox::new(2.35, 48.86, 2.35, 48.86).unwrap();

        let camera = vp.camera_for_bounds(point_box, 10.0);
        assert_eq!(camera.zoom, MAX_ZOOM);
    }
}
