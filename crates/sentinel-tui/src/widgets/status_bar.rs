//! Status bar widget
//!
//! Displays stream connection state, pause state, active filter, and log
//! scroll position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use sentinel_app::AppState;
use sentinel_core::StreamKind;

use crate::theme::{palette, styles};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `● Logs` style indicator for one stream
    fn connection(&self, kind: StreamKind) -> Span<'static> {
        let (icon, label, style) = styles::connection_indicator(self.state.connection(kind));
        Span::styled(format!("{} {} {}", icon, kind.label(), label), style)
    }

    fn pause_indicator(&self) -> Span<'static> {
        if self.state.log_sink.is_paused() {
            Span::styled(
                "⏸ Paused",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("▶ Live", Style::default().fg(palette::STATUS_GREEN))
        }
    }

    fn filter_info(&self) -> Option<Span<'static>> {
        let filter = self.state.log_sink.filter();
        filter.is_active().then(|| {
            Span::styled(
                format!("filter \"{}\"", filter.text()),
                Style::default().fg(palette::FILTER_PROMPT),
            )
        })
    }

    fn scroll_indicator(&self) -> Span<'static> {
        if self.state.log_view_state.auto_scroll {
            Span::styled("⬇ Auto", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("⬆ Manual", Style::default().fg(palette::STATUS_YELLOW))
        }
    }

    /// `first-last/total` over the visible entries
    fn log_position(&self) -> String {
        let view = &self.state.log_view_state;
        if view.total_lines == 0 {
            "0/0".to_string()
        } else {
            let current = view.offset + 1;
            let end = (view.offset + view.visible_lines).min(view.total_lines);
            format!("{}-{}/{}", current, end, view.total_lines)
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let mut segments = vec![
            Span::raw(" "),
            self.connection(StreamKind::Logs),
            styles::separator(),
            self.connection(StreamKind::Directives),
            styles::separator(),
            self.pause_indicator(),
        ];

        if let Some(filter) = self.filter_info() {
            segments.push(styles::separator());
            segments.push(filter);
        }

        segments.push(styles::separator());
        segments.push(self.scroll_indicator());
        segments.push(Span::raw(" "));
        segments.push(Span::styled(self.log_position(), styles::text_muted()));
        segments.push(Span::raw(" "));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator from the panels
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sentinel_stream::ConnectionState;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 2);
        let area = term.area();
        term.render_widget(StatusBar::new(state), area);
        term
    }

    #[test]
    fn test_initial_connection_state() {
        let state = AppState::default();
        let term = render(&state);

        assert!(term.buffer_contains("Logs connecting"));
        assert!(term.buffer_contains("Directives connecting"));
        assert!(term.buffer_contains("Live"));
    }

    #[test]
    fn test_connection_changes_are_shown() {
        let mut state = AppState::default();
        state.set_connection(StreamKind::Logs, ConnectionState::Connected);
        state.set_connection(StreamKind::Directives, ConnectionState::Disconnected);
        let term = render(&state);

        assert!(term.buffer_contains("● Logs connected"));
        assert!(term.buffer_contains("✗ Directives disconnected"));
    }

    #[test]
    fn test_paused_and_filter() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();
        state.log_sink.set_filter("GPU");
        let term = render(&state);

        assert!(term.buffer_contains("Paused"));
        assert!(term.buffer_contains("filter \"gpu\""));
    }

    #[test]
    fn test_scroll_position() {
        let mut state = AppState::default();
        state.log_view_state.update_content_size(50, 10);
        let term = render(&state);
        assert!(term.buffer_contains("Auto"));
        assert!(term.buffer_contains("41-50/50"));

        state.log_view_state.scroll_to_top();
        let term = render(&state);
        assert!(term.buffer_contains("Manual"));
        assert!(term.buffer_contains("1-10/50"));
    }
}
