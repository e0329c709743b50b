//! Filter prompt widget
//!
//! While editing: `/text_` with live match count. Otherwise, when a filter is
//! active, a summary with the key that clears it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sentinel_app::LogSink;

use crate::theme::{palette, styles};

pub struct FilterInput<'a> {
    sink: &'a LogSink,
    /// Text being typed
    input: &'a str,
    editing: bool,
}

impl<'a> FilterInput<'a> {
    pub fn new(sink: &'a LogSink, input: &'a str) -> Self {
        Self {
            sink,
            input,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn match_count(&self) -> Span<'static> {
        let visible = self.sink.visible_count();
        let style = if visible > 0 {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            Style::default().fg(palette::STATUS_RED)
        };
        Span::styled(format!("[{}/{} entries]", visible, self.sink.len()), style)
    }

    fn editing_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(palette::FILTER_PROMPT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.input, styles::text_primary()),
            Span::styled("_", Style::default().fg(palette::FILTER_PROMPT)),
        ];

        if !self.input.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(self.match_count());
        }
        spans.push(Span::styled(
            "  Enter keep · Esc clear",
            styles::text_muted(),
        ));
        Line::from(spans)
    }

    fn summary_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(palette::FILTER_PROMPT)),
            Span::styled(
                format!("\"{}\"", self.sink.filter().text()),
                styles::text_primary(),
            ),
            Span::raw(" "),
            self.match_count(),
            Span::styled(" (Esc to clear)", styles::text_muted()),
        ])
    }
}

impl Widget for FilterInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.editing {
            self.editing_line()
        } else if self.sink.filter().is_active() {
            self.summary_line()
        } else {
            return;
        };
        Paragraph::new(line).render(area, buf);
    }
}
