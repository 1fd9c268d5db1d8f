//! Error banner widget.
//!
//! Shown only while the search phase carries an error message; the banner
//! disappears on the next submit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget displaying the last search error.
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    /// Create a banner for the given message.
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    fn build_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                " ✗ ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message.to_string(), Style::default().fg(Color::Red)),
        ])
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_carries_message() {
        let banner = ErrorBanner::new("City not found");
        let text: String = banner
            .build_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.contains("City not found"));
    }
}
