//! Message types for the application (TEA pattern)

use sentinel_core::StreamKind;
use sentinel_stream::DirectiveAction;

use crate::input_key::InputKey;

/// Lifecycle signal forwarded from one stream connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Opened,
    /// Raw text frame, parsed by the handler
    Received(String),
    Failed(String),
    Closed,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    /// Event from one of the push streams
    Stream { kind: StreamKind, event: StreamEvent },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Log Sink Messages
    // ─────────────────────────────────────────────────────────
    TogglePause,
    ClearLogs,
    /// Enter filter input mode
    StartFilterInput,
    /// Filter text edited (applied live)
    FilterInput { text: String },
    /// Keep the current filter and leave input mode
    ConfirmFilter,
    /// Clear the filter and leave input mode
    CancelFilter,

    // ─────────────────────────────────────────────────────────
    // Directive Messages
    // ─────────────────────────────────────────────────────────
    /// Switch keyboard focus between the log panel and the directive table
    ToggleFocus,
    SelectNextDirective,
    SelectPreviousDirective,
    /// Trigger `action` on the selected directive
    RequestDirectiveAction { action: DirectiveAction },
    /// A directive action request finished
    DirectiveActionCompleted {
        action: DirectiveAction,
        id: String,
        result: Result<String, String>,
    },
}
