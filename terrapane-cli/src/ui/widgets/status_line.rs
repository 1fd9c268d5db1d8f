//! Status line widget.
//!
//! Single-line camera readout plus key hints:
//!
//! ```text
//! 74.0242°W, 40.6941°N | Zoom: 10.12    ←↑↓→ pan | PgUp/PgDn zoom | Tab kind | ^R reset | Esc quit
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use terrapane::camera::Camera;

const KEY_HINTS: &str = "←↑↓→ pan | PgUp/PgDn zoom | Tab kind | ^R reset | Esc quit";

/// Widget displaying the mirrored camera state.
pub struct StatusLine {
    camera: Camera,
}

impl StatusLine {
    /// Create a status line for the given camera snapshot.
    pub fn new(camera: Camera) -> Self {
        Self { camera }
    }

    /// Format longitude to four decimal places with direction suffix.
    fn format_lon(lon: f64) -> String {
        let dir = if lon >= 0.0 { "E" } else { "W" };
        format!("{:.4}°{}", lon.abs(), dir)
    }

    /// Format latitude to four decimal places with direction suffix.
    fn format_lat(lat: f64) -> String {
        let dir = if lat >= 0.0 { "N" } else { "S" };
        format!("{:.4}°{}", lat.abs(), dir)
    }

    /// Format zoom to two decimal places.
    fn format_zoom(zoom: f64) -> String {
        format!("{:.2}", zoom)
    }

    fn build_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!(
                    " {}, {}",
                    Self::format_lon(self.camera.center.lon),
                    Self::format_lat(self.camera.center.lat)
                ),
                Style::default().fg(Color::White),
            ),
            Span::styled(" | Zoom: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                Self::format_zoom(self.camera.zoom),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("    {}", KEY_HINTS),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Widget for StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}
