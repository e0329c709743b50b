//! sentinel-tui - Terminal UI for Sentinel Console
//!
//! ratatui rendering on top of the sentinel-app TEA loop: event polling,
//! layout, widgets, and the runner that owns the terminal.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
