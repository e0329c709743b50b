//! Abstract input key event, independent of terminal library.
//!
//! Keeps sentinel-app free of crossterm types. The TUI converts
//! `crossterm::event::KeyEvent` into [`InputKey`] at its boundary.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}
