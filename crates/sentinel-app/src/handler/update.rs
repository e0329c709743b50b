//! Main update function - handles state transitions (TEA pattern)

use sentinel_core::Severity;
use sentinel_stream::DirectiveAction;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus, UiMode};

use super::{keys::handle_key, scroll, stream, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
///
/// Any message that adds a log line brings the log view back to the tail.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let newest = state.log_sink.last_id();
    let result = dispatch(state, message);
    if state.log_sink.last_id() != newest {
        state.log_view_state.follow_tail();
    }
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Stream { kind, event } => stream::handle_stream_event(state, kind, event),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Log Sink Messages
        // ─────────────────────────────────────────────────────────
        Message::TogglePause => {
            let paused = state.log_sink.toggle_pause();
            debug!("Log intake paused: {}", paused);
            UpdateResult::none()
        }

        Message::ClearLogs => {
            state.log_sink.clear();
            UpdateResult::none()
        }

        Message::StartFilterInput => {
            state.filter_input = state.log_sink.filter().text().to_string();
            state.ui_mode = UiMode::FilterInput;
            UpdateResult::none()
        }

        Message::FilterInput { text } => {
            state.log_sink.set_filter(&text);
            state.filter_input = text;
            state.log_view_state.follow_tail();
            UpdateResult::none()
        }

        Message::ConfirmFilter => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::CancelFilter => {
            state.filter_input.clear();
            state.log_sink.set_filter("");
            state.log_view_state.follow_tail();
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Directive Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Logs => Focus::Directives,
                Focus::Directives => Focus::Logs,
            };
            UpdateResult::none()
        }

        Message::SelectNextDirective => {
            state.directives.select_next();
            UpdateResult::none()
        }

        Message::SelectPreviousDirective => {
            state.directives.select_previous();
            UpdateResult::none()
        }

        Message::RequestDirectiveAction { action } => {
            let Some(directive) = state.directives.selected() else {
                debug!("{} requested with no directive selected", action.label());
                return UpdateResult::none();
            };
            UpdateResult::action(UpdateAction::RunDirectiveAction {
                action,
                id: directive.id.clone(),
            })
        }

        Message::DirectiveActionCompleted { action, id, result } => {
            handle_action_completed(state, action, &id, result);
            UpdateResult::none()
        }
    }
}

fn handle_action_completed(
    state: &mut AppState,
    action: DirectiveAction,
    id: &str,
    result: Result<String, String>,
) {
    let verb = action.label();
    match result {
        Ok(message) => {
            debug!("{} {} -> {}", verb, id, message);
            state.log_sink.notice(
                format!("{verb} directive response: {message}"),
                Severity::Info,
            );
        }
        Err(detail) => {
            warn!("{} {} failed: {}", verb, id, detail);
            state.log_sink.notice(
                format!("{verb} directive failed: {detail}"),
                Severity::Error,
            );
        }
    }
}
