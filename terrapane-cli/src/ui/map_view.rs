//! Terminal map backend.
//!
//! Renders the world onto ratatui's braille canvas and implements the
//! library's [`MapControl`] capability on top of a [`Viewport`]. Fly-to and
//! fit-bounds are animated: each UI tick advances the active transition one
//! step and emits a move event, so the camera mirror tracks continuously.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::canvas::{Canvas, Map as WorldMap, MapResolution},
    widgets::{Block, Borders},
    Frame,
};
use tokio::sync::broadcast;

use terrapane::camera::Camera;
use terrapane::coord::{BoundingBox, LonLat, MAX_ZOOM, MIN_ZOOM};
use terrapane::map::{CameraAnimation, MapControl, Viewport};

/// Braille dots per terminal cell.
const PX_PER_CELL_X: f64 = 2.0;
const PX_PER_CELL_Y: f64 = 4.0;

/// Pixels moved per pan keypress.
pub const PAN_STEP: f64 = 16.0;

/// Zoom change per zoom keypress.
pub const ZOOM_STEP: f64 = 0.5;

/// Move event channel capacity.
const MOVE_CHANNEL_CAPACITY: usize = 64;

struct ActiveAnimation {
    animation: CameraAnimation,
    started: Instant,
}

/// Map backend rendering into the terminal.
pub struct TerminalMap {
    viewport: Viewport,
    animation: Option<ActiveAnimation>,
    tx: broadcast::Sender<Camera>,
}

impl TerminalMap {
    /// Creates a map at the initial camera.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(MOVE_CHANNEL_CAPACITY);
        Self {
            viewport: Viewport::new(Camera::initial(), 160.0, 96.0),
            animation: None,
            tx,
        }
    }

    /// Advances the active transition, if any. Call once per UI tick.
    pub fn tick(&mut self, now: Instant) {
        let Some(active) = &self.animation else {
            return;
        };

        let elapsed = now.saturating_duration_since(active.started).as_secs_f64();
        let duration = active.animation.duration().as_secs_f64();
        let t = if duration > 0.0 {
            (elapsed / duration).min(1.0)
        } else {
            1.0
        };

        self.viewport.set_camera(active.animation.sample(t));
        if t >= 1.0 {
            self.animation = None;
        }
        self.emit();
    }

    /// Pans the view by a pixel delta, interrupting any transition.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.animation = None;
        self.viewport.pan_by(dx, dy);
        self.emit();
    }

    /// Adjusts zoom around the view center, interrupting any transition.
    pub fn zoom(&mut self, delta: f64) {
        self.animation = None;
        self.viewport.zoom_by(delta);
        self.emit();
    }

    /// Renders the map into `area`, adopting its size for viewport math.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.viewport.set_size(
            f64::from(area.width) * PX_PER_CELL_X,
            f64::from(area.height) * PX_PER_CELL_Y,
        );

        let bounds = self.viewport.visible_bounds();
        let center = self.viewport.camera().center;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Map "),
            )
            .x_bounds([bounds.west, bounds.east])
            .y_bounds([bounds.south, bounds.north])
            .paint(move |ctx| {
                ctx.draw(&WorldMap {
                    color: Color::Green,
                    resolution: MapResolution::High,
                });
                ctx.print(
                    center.lon,
                    center.lat,
                    Line::styled("+", Style::default().fg(Color::Red)),
                );
            });

        frame.render_widget(canvas, area);
    }

    fn start_transition(&mut self, target: Camera) {
        self.animation = Some(ActiveAnimation {
            animation: CameraAnimation::new(self.viewport.camera(), target),
            started: Instant::now(),
        });
    }

    fn emit(&self) {
        let _ = self.tx.send(self.viewport.camera());
    }
}

impl Default for TerminalMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapControl for TerminalMap {
    fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    fn jump_to(&mut self, center: LonLat, zoom: f64) {
        self.animation = None;
        self.viewport
            .set_camera(Camera::new(center, zoom.clamp(MIN_ZOOM, MAX_ZOOM)));
        self.emit();
    }

    fn fly_to(&mut self, center: LonLat, zoom: f64) {
        self.start_transition(Camera::new(center, zoom.clamp(MIN_ZOOM, MAX_ZOOM)));
    }

    fn fit_bounds(&mut self, bounds: BoundingBox, padding: f64) {
        let target = self.viewport.camera_for_bounds(bounds, padding);
        self.start_transition(target);
    }

    fn subscribe_moves(&self) -> broadcast::Receiver<Camera> {
        self.tx.subscribe()
    }
}
