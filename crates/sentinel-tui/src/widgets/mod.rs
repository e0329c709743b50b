//! Custom widget components

mod directive_table;
mod filter_input;
mod header;
mod log_view;
mod status_bar;

pub use directive_table::DirectiveTableView;
pub use filter_input::FilterInput;
pub use header::MainHeader;
pub use log_view::LogView;
pub use status_bar::StatusBar;

// Re-export state types from app layer (these are used by render/)
pub use sentinel_app::LogViewState;
