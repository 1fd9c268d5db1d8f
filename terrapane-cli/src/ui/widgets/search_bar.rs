//! Search input widget.
//!
//! Layout:
//! ```text
//! ┌─ Search ───────────────────────────────────────────┐
//! │ > paris▏                          [City] Enter ⏎   │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! While a request is in flight the prompt shows a searching indicator and
//! submission is disabled by the app's key handling.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use terrapane::geocode::PlaceKind;

/// Widget for the search input row.
pub struct SearchBar<'a> {
    query: &'a str,
    kind: PlaceKind,
    loading: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a search bar over the current input state.
    pub fn new(query: &'a str, kind: PlaceKind, loading: bool) -> Self {
        Self {
            query,
            kind,
            loading,
        }
    }

    /// Label for the kind selector.
    fn kind_label(kind: PlaceKind) -> String {
        format!("[{}]", kind)
    }

    fn build_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(" > ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.query.to_string(), Style::default().fg(Color::White)),
        ];

        if self.loading {
            spans.push(Span::styled(
                "  Searching…",
                Style::default().fg(Color::Yellow),
            ));
        } else {
            // Block cursor marks where typing lands.
            spans.push(Span::styled("▏", Style::default().fg(Color::DarkGray)));
        }

        spans.push(Span::styled(
            format!("  {}", Self::kind_label(self.kind)),
            Style::default().fg(Color::Cyan),
        ));

        Line::from(spans)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Search ");

        Paragraph::new(self.build_line())
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(bar: &SearchBar) -> String {
        bar.build_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SearchBar::kind_label(PlaceKind::City), "[City]");
        assert_eq!(SearchBar::kind_label(PlaceKind::Country), "[Country]");
    }

    #[test]
    fn test_query_text_shown() {
        let bar = SearchBar::new("paris", PlaceKind::City, false);
        assert!(text_of(&bar).contains("paris"));
    }

    #[test]
    fn test_loading_indicator_replaces_cursor() {
        let idle = SearchBar::new("paris", PlaceKind::City, false);
        assert!(text_of(&idle).contains('▏'));
        assert!(!text_of(&idle).contains("Searching"));

        let loading = SearchBar::new("paris", PlaceKind::City, true);
        assert!(text_of(&loading).contains("Searching"));
        assert!(!text_of(&loading).contains('▏'));
    }
}
