//! Scrollable log view widget
//!
//! Renders the visible entries of a [`LogSink`] (filtered, in receipt order)
//! one line per entry. Scroll position lives in [`LogViewState`], which this
//! widget updates with the content and viewport size on every render.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use sentinel_app::{LogSink, LogViewState};
use sentinel_core::LogEntry;

use crate::theme::{palette, styles};

/// Log view widget
pub struct LogView<'a> {
    sink: &'a LogSink,
    title: &'a str,
    show_timestamps: bool,
    focused: bool,
}

impl<'a> LogView<'a> {
    pub fn new(sink: &'a LogSink) -> Self {
        Self {
            sink,
            title: "Logs",
            show_timestamps: true,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Title with pause and filter indicators, e.g. ` Logs [PAUSED] filter: "gpu" 3/40 `
    fn build_title(&self) -> String {
        let mut parts = vec![self.title.to_string()];

        if self.sink.is_paused() {
            parts.push("[PAUSED]".to_string());
        }

        let filter = self.sink.filter();
        if filter.is_active() {
            parts.push(format!(
                "filter: \"{}\" {}/{}",
                filter.text(),
                self.sink.visible_count(),
                self.sink.len()
            ));
        }

        format!(" {} ", parts.join(" "))
    }

    fn format_entry(&self, entry: &LogEntry) -> Line<'static> {
        let mut spans = Vec::with_capacity(3);

        if self.show_timestamps {
            spans.push(Span::styled(
                format!("[{}] ", entry.time_display()),
                styles::text_muted(),
            ));
        }

        let mut style = styles::severity(entry.severity);
        if entry.is_notice() {
            style = style.add_modifier(Modifier::ITALIC);
        }
        spans.push(Span::styled(entry.message.clone(), style));

        Line::from(spans)
    }

    /// Centered placeholder for an empty or fully filtered view
    fn render_placeholder(&self, text: String, inner: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl StatefulWidget for LogView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.focused).title(self.build_title());
        let inner = block.inner(area);
        block.render(area, buf);

        let visible: Vec<&LogEntry> = self.sink.visible_entries().collect();
        let total_lines = visible.len();
        let visible_lines = inner.height as usize;
        state.update_content_size(total_lines, visible_lines);

        if self.sink.is_empty() {
            self.render_placeholder("Awaiting log messages...".to_string(), inner, buf);
            return;
        }
        if visible.is_empty() {
            self.render_placeholder(
                format!("No logs match \"{}\"", self.sink.filter().text()),
                inner,
                buf,
            );
            return;
        }

        let lines: Vec<Line> = visible
            .iter()
            .skip(state.offset)
            .take(visible_lines)
            .map(|entry| self.format_entry(entry))
            .collect();

        Paragraph::new(lines).render(inner, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(total_lines).position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}
