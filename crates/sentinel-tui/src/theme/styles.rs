//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};
use sentinel_core::Severity;
use sentinel_stream::ConnectionState;

use super::palette;

pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// "Black on Cyan" - the selected row of a focused table
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected row when the table does not have focus
pub fn unfocused_selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Message style for a log entry of the given severity
pub fn severity(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::default().fg(palette::SEVERITY_ERROR),
        Severity::Warning => Style::default().fg(palette::SEVERITY_WARNING),
        Severity::Success => Style::default().fg(palette::SEVERITY_SUCCESS),
        Severity::Info => Style::default().fg(palette::SEVERITY_INFO),
        Severity::Default => Style::default().fg(palette::SEVERITY_DEFAULT),
    }
}

/// Style for a directive status cell.
///
/// Status values are free-form server strings; unknown ones render plain.
pub fn directive_status(status: &str) -> Style {
    match status.to_ascii_lowercase().as_str() {
        "completed" | "done" | "success" => Style::default().fg(palette::STATUS_GREEN),
        "failed" | "error" | "cancelled" | "canceled" => Style::default().fg(palette::STATUS_RED),
        "in-progress" | "in_progress" | "running" => Style::default().fg(palette::STATUS_YELLOW),
        "pending" | "queued" | "retrying" => Style::default().fg(palette::STATUS_BLUE),
        _ => text_primary(),
    }
}

/// Indicator glyph, label, and style for a stream connection
pub fn connection_indicator(state: ConnectionState) -> (&'static str, &'static str, Style) {
    match state {
        ConnectionState::Connecting => (
            "○",
            "connecting",
            Style::default().fg(palette::STATUS_YELLOW),
        ),
        ConnectionState::Connected => (
            "●",
            "connected",
            Style::default().fg(palette::STATUS_GREEN),
        ),
        ConnectionState::Disconnected => (
            "✗",
            "disconnected",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// `" │ "` separator used between status segments
pub fn separator() -> Span<'static> {
    Span::styled(" │ ", text_muted())
}
