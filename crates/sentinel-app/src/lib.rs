//! sentinel-app - Application state and orchestration for Sentinel Console
//!
//! Implements the TEA (The Elm Architecture) loop: [`AppState`] is the model,
//! [`Message`] the events, and [`handler::update`] the only place state
//! changes. The log sink and directive table live here, along with config
//! loading, stream wiring, and background action spawning.

pub mod actions;
pub mod config;
pub mod directive_table;
pub mod handler;
pub mod input_key;
pub mod log_sink;
pub mod log_view_state;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod streams;

// Re-export primary types
pub use directive_table::{DirectiveTable, UpsertOutcome};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use log_sink::LogSink;
pub use log_view_state::LogViewState;
pub use message::{Message, StreamEvent};
pub use process::process_message;
pub use state::{AppPhase, AppState, Focus, UiMode};
pub use streams::{spawn_streams, StreamClients};
