//! Application state (Model in TEA pattern)

use sentinel_core::{Severity, StreamKind};
use sentinel_stream::ConnectionState;

use crate::config::Settings;
use crate::directive_table::DirectiveTable;
use crate::log_sink::LogSink;
use crate::log_view_state::LogViewState;

/// Notice recorded when the console starts
pub const STARTUP_NOTICE: &str = "Sentinel console initialized. Awaiting updates...";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Panels receive navigation and command keys
    #[default]
    Normal,
    /// Typing into the filter line
    FilterInput,
}

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Logs,
    Directives,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub focus: Focus,

    pub log_sink: LogSink,
    pub log_view_state: LogViewState,
    pub directives: DirectiveTable,

    /// Filter text being edited. Applied live to the sink.
    pub filter_input: String,

    pub logs_connection: ConnectionState,
    pub directives_connection: ConnectionState,

    pub settings: Settings,

    /// Display name of the server (`host[:port]`)
    pub server_label: String,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let mut log_sink = LogSink::new();
        log_sink.notice(STARTUP_NOTICE, Severity::Info);

        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            focus: Focus::Logs,
            log_sink,
            log_view_state: LogViewState::new(),
            directives: DirectiveTable::new(settings.directives.refresh_details),
            filter_input: String::new(),
            logs_connection: ConnectionState::Connecting,
            directives_connection: ConnectionState::Connecting,
            server_label: settings.server.host.clone(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn connection(&self, kind: StreamKind) -> ConnectionState {
        match kind {
            StreamKind::Logs => self.logs_connection,
            StreamKind::Directives => self.directives_connection,
        }
    }

    pub fn set_connection(&mut self, kind: StreamKind, state: ConnectionState) {
        match kind {
            StreamKind::Logs => self.logs_connection = state,
            StreamKind::Directives => self.directives_connection = state,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
