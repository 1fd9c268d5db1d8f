//! Eased camera transitions.
//!
//! A [`CameraAnimation`] is pure interpolation state: callers decide how
//! progress maps to wall-clock time, which keeps the math testable without a
//! clock.

use std::time::Duration;

use crate::camera::Camera;
use crate::coord::LonLat;

/// Default duration of a fly-to or fit-bounds transition.
pub const DEFAULT_FLY_DURATION: Duration = Duration::from_millis(600);

/// An in-flight camera transition between two snapshots.
#[derive(Debug, Clone)]
pub struct CameraAnimation {
    from: Camera,
    to: Camera,
    duration: Duration,
}

impl CameraAnimation {
    /// Creates a transition with the default duration.
    pub fn new(from: Camera, to: Camera) -> Self {
        Self {
            from,
            to,
            duration: DEFAULT_FLY_DURATION,
        }
    }

    /// Overrides the transition duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Total duration of the transition.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The camera this transition ends at.
    pub fn target(&self) -> Camera {
        self.to
    }

    /// Samples the transition at `progress` in `[0, 1]` (clamped), applying
    /// ease-in-out so movement starts and ends gently.
    pub fn sample(&self, progress: f64) -> Camera {
        let t = ease_in_out(progress.clamp(0.0, 1.0));

        Camera::new(
            LonLat::clamped(
                lerp(self.from.center.lon, self.to.center.lon, t),
                lerp(self.from.center.lat, self.to.center.lat, t),
            ),
            lerp(self.from.zoom, self.to.zoom, t),
        )
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease-in-out.
#[inline]
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
