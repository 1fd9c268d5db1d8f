//! Headless map backend.
//!
//! A [`MapControl`] implementation with no renderer: every command applies
//! instantly and emits a single move event. Used by tests and by one-shot
//! command-line resolution, where animating would be meaningless.

use tokio::sync::broadcast;

use super::{MapControl, Viewport};
use crate::camera::Camera;
use crate::coord::{BoundingBox, LonLat, MAX_ZOOM, MIN_ZOOM};

/// Default pixel size for headless fit-bounds math.
const DEFAULT_SIZE: (f64, f64) = (1024.0, 768.0);

/// Move event channel capacity; headless moves are applied synchronously so a
/// small buffer suffices.
const MOVE_CHANNEL_CAPACITY: usize = 16;

/// Map backend that applies every camera command instantly.
pub struct HeadlessMap {
    camera: Camera,
    width: f64,
    height: f64,
    tx: broadcast::Sender<Camera>,
}

impl HeadlessMap {
    /// Creates a headless map at the initial camera with the default size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }

    /// Creates a headless map with an explicit pixel size for fit math.
    pub fn with_size(width: f64, height: f64) -> Self {
        let (tx, _) = broadcast::channel(MOVE_CHANNEL_CAPACITY);
        Self {
            camera: Camera::initial(),
            width,
            height,
            tx,
        }
    }

    fn apply(&mut self, camera: Camera) {
        self.camera = camera;
        let _ = self.tx.send(camera);
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapControl for HeadlessMap {
    fn camera(&self) -> Camera {
        self.camera
    }

    fn jump_to(&mut self, center: LonLat, zoom: f64) {
        self.apply(Camera::new(center, zoom.clamp(MIN_ZOOM, MAX_ZOOM)));
    }

    fn fly_to(&mut self, center: LonLat, zoom: f64) {
        // No animation without a frame clock; a fly-to lands instantly.
        self.jump_to(center, zoom);
    }

    fn fit_bounds(&mut self, bounds: BoundingBox, padding: f64) {
        let viewport = Viewport::new(self.camera, self.width, self.height);
        self.apply(viewport.camera_for_bounds(bounds, padding));
    }

    fn subscribe_moves(&self) -> broadcast::Receiver<Camera> {
        self.tx.subscribe()
    }
}
