//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use sentinel_app::{AppState, Focus, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the log view state is written here: the log widget records content
/// and viewport size so scroll commands have current bounds.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let editing = state.ui_mode == UiMode::FilterInput;
    let show_filter = editing || state.log_sink.filter().is_active();
    let areas = layout::create(area, show_filter);

    frame.render_widget(widgets::MainHeader::new(&state.server_label), areas.header);

    let log_view = widgets::LogView::new(&state.log_sink)
        .show_timestamps(state.settings.ui.show_timestamps)
        .focused(state.focus == Focus::Logs);
    frame.render_stateful_widget(log_view, areas.logs, &mut state.log_view_state);

    frame.render_widget(
        widgets::DirectiveTableView::new(&state.directives)
            .focused(state.focus == Focus::Directives),
        areas.directives,
    );

    if let Some(filter_area) = areas.filter {
        frame.render_widget(
            widgets::FilterInput::new(&state.log_sink, &state.filter_input).editing(editing),
            filter_area,
        );
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
