//! Push-stream event handling
//!
//! Maps connection transitions to notices and dispatches parsed envelopes.
//! Any stream may carry any envelope type. Pause drops every frame from the
//! log stream before parsing; the directive stream is never paused.

use sentinel_core::{parse_stream_message, Severity, StreamKind, StreamMessage};
use sentinel_stream::ConnectionState;
use tracing::{debug, trace, warn};

use crate::message::StreamEvent;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_stream_event(
    state: &mut AppState,
    kind: StreamKind,
    event: StreamEvent,
) -> UpdateResult {
    let label = kind.label();
    match event {
        StreamEvent::Opened => {
            state.set_connection(kind, ConnectionState::Connected);
            state
                .log_sink
                .notice(format!("Connected to {label} stream"), Severity::Success);
        }
        StreamEvent::Failed(detail) => {
            state
                .log_sink
                .notice(format!("{label} stream error: {detail}"), Severity::Error);
        }
        StreamEvent::Closed => {
            state.set_connection(kind, ConnectionState::Disconnected);
            state
                .log_sink
                .notice(format!("{label} stream disconnected"), Severity::Warning);
        }
        StreamEvent::Received(text) => handle_frame(state, kind, &text),
    }
    UpdateResult::none()
}

fn handle_frame(state: &mut AppState, kind: StreamKind, text: &str) {
    if kind == StreamKind::Logs && state.log_sink.is_paused() {
        trace!("Logs stream paused, frame dropped");
        return;
    }

    let message = match parse_stream_message(text) {
        Ok(message) => message,
        Err(e) => {
            warn!("{} stream: dropping frame: {}", kind.label(), e);
            state.log_sink.notice(
                format!("Error parsing {} message: {e}", kind.label()),
                Severity::Error,
            );
            return;
        }
    };

    match message {
        StreamMessage::Log { message } => match kind {
            StreamKind::Logs => {
                state.log_sink.append(message, Severity::Default);
            }
            StreamKind::Directives => {
                state.log_sink.record(message, Severity::Default);
            }
        },
        StreamMessage::Info { message } => {
            state.log_sink.notice(message, Severity::Info);
        }
        StreamMessage::DirectiveUpdate { directive } => {
            let notice = format!("Directive update: {} → {}", directive.id, directive.status);
            let outcome = state.directives.upsert(directive);
            debug!("{:?}", outcome);
            state.log_sink.notice(notice, Severity::Info);
        }
        StreamMessage::Unknown { kind: tag } => {
            state.log_sink.notice(
                format!("Unrecognized message type: {tag}"),
                Severity::Warning,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::{Directive, LogEntry, Origin};

    fn received(state: &mut AppState, kind: StreamKind, text: &str) {
        handle_stream_event(state, kind, StreamEvent::Received(text.to_string()));
    }

    fn last(state: &AppState) -> &LogEntry {
        state.log_sink.entries().last().unwrap()
    }

    #[test]
    fn test_opened_marks_connected_with_success_notice() {
        let mut state = AppState::default();
        handle_stream_event(&mut state, StreamKind::Logs, StreamEvent::Opened);

        assert_eq!(state.logs_connection, ConnectionState::Connected);
        assert_eq!(last(&state).message, "Connected to Logs stream");
        assert_eq!(last(&state).severity, Severity::Success);
    }

    #[test]
    fn test_failure_then_close() {
        let mut state = AppState::default();
        handle_stream_event(
            &mut state,
            StreamKind::Directives,
            StreamEvent::Failed("connection refused".into()),
        );
        handle_stream_event(&mut state, StreamKind::Directives, StreamEvent::Closed);

        let tail: Vec<_> = state
            .log_sink
            .entries()
            .iter()
            .rev()
            .take(2)
            .map(|e| (e.message.as_str(), e.severity))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("Directives stream disconnected", Severity::Warning),
                (
                    "Directives stream error: connection refused",
                    Severity::Error
                ),
            ]
        );
        assert_eq!(state.directives_connection, ConnectionState::Disconnected);
        assert_eq!(state.logs_connection, ConnectionState::Connecting);
    }

    #[test]
    fn test_log_message_appends_stream_entry() {
        let mut state = AppState::default();
        received(&mut state, StreamKind::Logs, r#"{"type":"log","message":"Agent online"}"#);

        assert_eq!(last(&state).message, "Agent online");
        assert_eq!(last(&state).origin, Origin::Stream);
        assert_eq!(last(&state).severity, Severity::Default);
    }

    #[test]
    fn test_log_message_dropped_while_paused() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();
        let before = state.log_sink.len();

        received(&mut state, StreamKind::Logs, r#"{"type":"log","message":"lost"}"#);

        assert_eq!(state.log_sink.len(), before);
    }

    #[test]
    fn test_directive_stream_keeps_flowing_while_paused() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();

        received(
            &mut state,
            StreamKind::Directives,
            r#"{"type":"directive_update","directive":{"id":"d1","agent_id":"a1","task":"t1","status":"pending"}}"#,
        );
        received(
            &mut state,
            StreamKind::Directives,
            r#"{"type":"info","message":"Queue drained"}"#,
        );

        assert_eq!(state.directives.len(), 1);
        assert_eq!(last(&state).message, "Queue drained");
    }

    #[test]
    fn test_directive_update_upserts_and_notices() {
        let mut state = AppState::default();
        received(
            &mut state,
            StreamKind::Directives,
            r#"{"type":"directive_update","directive":{"id":"d1","agent_id":"a1","task":"t1","status":"pending"}}"#,
        );
        received(
            &mut state,
            StreamKind::Directives,
            r#"{"type":"directive_update","directive":{"id":"d1","status":"done"}}"#,
        );

        assert_eq!(state.directives.rows(), &[Directive::new("d1", "a1", "t1", "done")]);
        assert_eq!(last(&state).message, "Directive update: d1 → done");
        assert_eq!(last(&state).severity, Severity::Info);
        assert!(last(&state).is_notice());
    }

    #[test]
    fn test_any_stream_may_carry_any_type() {
        let mut state = AppState::default();
        received(
            &mut state,
            StreamKind::Logs,
            r#"{"type":"directive_update","directive":{"id":"d9","status":"pending"}}"#,
        );
        received(&mut state, StreamKind::Directives, r#"{"type":"log","message":"hi"}"#);

        assert!(state.directives.get("d9").is_some());
        assert_eq!(last(&state).message, "hi");
        assert_eq!(last(&state).origin, Origin::Stream);
    }

    #[test]
    fn test_unknown_type_is_a_warning() {
        let mut state = AppState::default();
        received(&mut state, StreamKind::Directives, r#"{"type":"heartbeat"}"#);

        assert_eq!(last(&state).message, "Unrecognized message type: heartbeat");
        assert_eq!(last(&state).severity, Severity::Warning);
    }

    #[test]
    fn test_non_json_frame_yields_one_error_notice() {
        let mut state = AppState::default();
        let before = state.log_sink.len();

        received(&mut state, StreamKind::Logs, "not json at all");

        assert_eq!(state.log_sink.len(), before + 1);
        assert_eq!(state.log_sink.stream_entries().count(), 0);
        assert!(last(&state).message.starts_with("Error parsing Logs message:"));
        assert_eq!(last(&state).severity, Severity::Error);
    }

    #[test]
    fn test_known_type_missing_fields_is_a_parse_error() {
        let mut state = AppState::default();
        received(&mut state, StreamKind::Directives, r#"{"type":"directive_update"}"#);

        assert!(state.directives.is_empty());
        assert_eq!(last(&state).severity, Severity::Error);
    }

    #[test]
    fn test_directive_stream_log_is_recorded_while_paused() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();

        received(
            &mut state,
            StreamKind::Directives,
            r#"{"type":"log","message":"from directives"}"#,
        );

        assert_eq!(last(&state).message, "from directives");
        assert_eq!(last(&state).origin, Origin::Stream);
    }

    #[test]
    fn test_every_log_stream_frame_is_dropped_while_paused() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();
        let before = state.log_sink.len();

        received(&mut state, StreamKind::Logs, r#"{"type":"info","message":"ignored"}"#);
        received(
            &mut state,
            StreamKind::Logs,
            r#"{"type":"directive_update","directive":{"id":"d1","status":"pending"}}"#,
        );
        received(&mut state, StreamKind::Logs, "not json at all");

        assert_eq!(state.log_sink.len(), before);
        assert!(state.directives.is_empty());
    }

    #[test]
    fn test_log_stream_transitions_are_noticed_while_paused() {
        let mut state = AppState::default();
        state.log_sink.toggle_pause();

        handle_stream_event(&mut state, StreamKind::Logs, StreamEvent::Closed);

        assert_eq!(last(&state).message, "Logs stream disconnected");
    }
}
