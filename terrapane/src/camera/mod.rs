//! Camera state tracking.
//!
//! The camera is a mirror of the map's current view: every move event the map
//! emits (pan, zoom, fly-to step, fit-bounds step) overwrites the held state.
//! Consumers read it through a pull API ([`CameraProvider`]) or subscribe to
//! updates through a push API ([`CameraBroadcaster`]); the state holder itself
//! is independent of any UI framework.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use crate::coord::LonLat;

/// Initial camera center (longitude, latitude).
pub const INITIAL_CENTER: LonLat = LonLat {
    lon: -74.0242,
    lat: 40.6941,
};

/// Initial camera zoom.
pub const INITIAL_ZOOM: f64 = 10.12;

/// Broadcast channel capacity for camera move events.
///
/// Move events supersede each other, so a lagging subscriber only needs the
/// most recent few.
const MOVE_CHANNEL_CAPACITY: usize = 16;

/// A camera snapshot: where the map is looking and how close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Center of the view.
    pub center: LonLat,
    /// Fractional zoom level.
    pub zoom: f64,
}

impl Camera {
    /// Creates a camera at an explicit center and zoom.
    pub fn new(center: LonLat, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// The fixed startup camera.
    pub fn initial() -> Self {
        Self {
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::initial()
    }
}

/// Trait for querying the current camera (pull API).
pub trait CameraProvider: Send + Sync {
    /// Get the current camera snapshot.
    fn camera(&self) -> Camera;
}

/// Trait for subscribing to camera updates (push API).
pub trait CameraBroadcaster: Send + Sync {
    /// Subscribe to camera move events.
    fn subscribe(&self) -> broadcast::Receiver<Camera>;
}

/// Shared camera state - thread-safe mirror of the map's view.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Clone)]
pub struct SharedCamera {
    inner: Arc<RwLock<Camera>>,
    tx: broadcast::Sender<Camera>,
}

impl SharedCamera {
    /// Creates a shared camera seeded with the initial constants.
    pub fn new() -> Self {
        Self::with_camera(Camera::initial())
    }

    /// Creates a shared camera seeded with an explicit snapshot.
    pub fn with_camera(camera: Camera) -> Self {
        let (tx, _) = broadcast::channel(MOVE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(camera)),
            tx,
        }
    }

    /// Receive a move event from the map: overwrite held state and notify
    /// subscribers. No debouncing; every move event is applied.
    pub fn receive_move(&self, camera: Camera) {
        *self.inner.write().expect("camera lock poisoned") = camera;
        // Send fails only when there are no subscribers, which is fine.
        let _ = self.tx.send(camera);
    }
}

impl Default for SharedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraProvider for SharedCamera {
    fn camera(&self) -> Camera {
        *self.inner.read().expect("camera lock poisoned")
    }
}

impl CameraBroadcaster for SharedCamera {
    fn subscribe(&self) -> broadcast::Receiver<Camera> {
        self.tx.subscribe()
    }
}
