//! Map control abstraction.
//!
//! The map renderer is treated purely as an opaque camera-control capability:
//! consumers can read the camera, command moves, and subscribe to move
//! events, and nothing else. Rendering backends implement [`MapControl`];
//! the library ships [`HeadlessMap`] for tests and one-shot use, and the CLI
//! provides the terminal canvas backend.

mod animation;
mod headless;
mod viewport;

pub use animation::{CameraAnimation, DEFAULT_FLY_DURATION};
pub use headless::HeadlessMap;
pub use viewport::Viewport;

use tokio::sync::broadcast;

use crate::camera::Camera;
use crate::coord::{BoundingBox, LonLat};

/// Camera-control capability exposed by a map backend.
///
/// Every mutation must emit at least one move event; animated backends emit
/// one per animation step so mirrors track the camera continuously.
pub trait MapControl {
    /// Current camera.
    fn camera(&self) -> Camera;

    /// Move the camera immediately, without animation.
    fn jump_to(&mut self, center: LonLat, zoom: f64);

    /// Animate the camera to a target center and zoom.
    fn fly_to(&mut self, center: LonLat, zoom: f64);

    /// Animate the camera so `bounds` is framed with `padding` screen pixels
    /// kept clear on every side.
    fn fit_bounds(&mut self, bounds: BoundingBox, padding: f64);

    /// Subscribe to camera move events.
    fn subscribe_moves(&self) -> broadcast::Receiver<Camera>;
}
