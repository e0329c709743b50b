//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, server, and key hints
    pub header: Rect,
    pub logs: Rect,
    pub directives: Rect,
    /// Filter line, present while editing or while a filter is active
    pub filter: Option<Rect>,
    pub status: Rect,
}

/// Create the main screen layout
///
/// Logs take 60% of the body, the directive table the rest.
pub fn create(area: Rect, show_filter: bool) -> ScreenAreas {
    let filter_height = if show_filter { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Min(6),                // Body
        Constraint::Length(filter_height), // Filter line
        Constraint::Length(2),             // Status bar (top border + line)
    ])
    .split(area);

    let body = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    ScreenAreas {
        header: chunks[0],
        logs: body[0],
        directives: body[1],
        filter: show_filter.then_some(chunks[2]),
        status: chunks[3],
    }
}
