//! Full-frame rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use sentinel_app::{Message, StreamEvent};
use sentinel_core::{Directive, Severity, StreamKind};
use sentinel_stream::ConnectionState;

fn draw(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn feed(state: &mut AppState, kind: StreamKind, frame: &str) {
    let mut next = Some(Message::Stream {
        kind,
        event: StreamEvent::Received(frame.to_string()),
    });
    while let Some(msg) = next {
        next = sentinel_app::handler::update(state, msg).message;
    }
}

#[test]
fn test_initial_frame() {
    let mut state = AppState::default();
    let term = draw(&mut state);

    assert!(term.buffer_contains("Sentinel Console"));
    assert!(term.buffer_contains("Sentinel console initialized. Awaiting updates..."));
    assert!(term.buffer_contains("Directives (0)"));
    assert!(term.buffer_contains("Logs connecting"));
}

#[test]
fn test_stream_frames_reach_both_panels() {
    let mut state = AppState::default();
    state.set_connection(StreamKind::Logs, ConnectionState::Connected);

    feed(
        &mut state,
        StreamKind::Logs,
        r#"{"type":"log","message":"Directive dispatched to Agent agent_1234"}"#,
    );
    feed(
        &mut state,
        StreamKind::Directives,
        r#"{"type":"directive_update","directive":{"id":"d1","agent_id":"a1","task":"Optimize GPU","status":"pending"}}"#,
    );

    let term = draw(&mut state);
    assert!(term.buffer_contains("Directive dispatched to Agent agent_1234"));
    assert!(term.buffer_contains("Optimize GPU"));
    assert!(term.buffer_contains("Directives (1)"));
    assert!(term.buffer_contains("Logs connected"));
}

#[test]
fn test_filter_line_while_editing() {
    let mut state = AppState::default();
    state.ui_mode = UiMode::FilterInput;
    state.filter_input = "gpu".to_string();
    state.log_sink.set_filter("gpu");

    let term = draw(&mut state);
    assert!(term.buffer_contains("/gpu_"));
}

#[test]
fn test_filter_summary_after_confirm() {
    let mut state = AppState::default();
    state.log_sink.append("GPU optimized", Severity::Default);
    state.log_sink.set_filter("gpu");

    let term = draw(&mut state);
    assert!(term.buffer_contains("Filter: \"gpu\""));
    assert!(!term.buffer_contains("Sentinel console initialized"));
}

#[test]
fn test_render_records_log_viewport() {
    let mut state = AppState::default();
    for i in 0..100 {
        state.log_sink.append(format!("line {i}"), Severity::Default);
    }

    draw(&mut state);
    assert_eq!(state.log_view_state.total_lines, 101);
    assert!(state.log_view_state.visible_lines > 0);
    assert!(state.log_view_state.auto_scroll);
}

#[test]
fn test_directive_focus_highlights_selection() {
    let mut state = AppState::default();
    state
        .directives
        .upsert(Directive::new("d1", "a1", "Optimize GPU", "pending"));
    state.focus = Focus::Directives;

    let term = draw(&mut state);
    let row = term.find_line("Optimize GPU").unwrap();
    assert!(term.line_contains(row, "▶"));
}
