//! Key event handlers for different UI modes

use sentinel_stream::DirectiveAction;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::FilterInput => handle_key_filter_input(state, key),
    }
}

/// Handle key events in filter input mode
fn handle_key_filter_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep the filter, leave input mode
        InputKey::Enter => Some(Message::ConfirmFilter),
        // Drop the filter, leave input mode
        InputKey::Esc => Some(Message::CancelFilter),

        InputKey::Backspace => {
            let mut text = state.filter_input.clone();
            text.pop();
            Some(Message::FilterInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::FilterInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut text = state.filter_input.clone();
            text.push(c);
            Some(Message::FilterInput { text })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('p') | InputKey::Char(' ') => Some(Message::TogglePause),
        InputKey::Char('c') => Some(Message::ClearLogs),
        InputKey::Char('/') => Some(Message::StartFilterInput),
        // Esc clears an active filter from normal mode too
        InputKey::Esc if state.log_sink.filter().is_active() => Some(Message::CancelFilter),

        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),

        // Directive actions act on the selected row regardless of focus
        InputKey::Char('r') => Some(Message::RequestDirectiveAction {
            action: DirectiveAction::Retry,
        }),
        InputKey::Char('x') => Some(Message::RequestDirectiveAction {
            action: DirectiveAction::Cancel,
        }),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Char('J') if state.focus == Focus::Logs => Some(Message::SelectNextDirective),
        InputKey::Char('K') if state.focus == Focus::Logs => {
            Some(Message::SelectPreviousDirective)
        }

        _ => None,
    }
}
